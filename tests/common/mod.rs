//! Shared helpers for integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use spa_review::test_utils::{SAMPLE_DATASET_JSON, init_test_logging};

/// Temporary workspace holding a dataset and an empty config file.
pub struct TestSite {
    pub temp: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("spas.json"), SAMPLE_DATASET_JSON).unwrap();
        std::fs::write(temp.path().join("config.toml"), "").unwrap();
        Self {
            temp,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn data_path(&self) -> PathBuf {
        self.path().join("spas.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).unwrap();
    }

    /// `spa-review` isolated from the user's config and API key.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("spa-review").unwrap();
        cmd.env("SPA_REVIEW_CONFIG", self.config_path())
            .env_remove("GOOGLE_PLACES_API_KEY")
            .env_remove("RUST_LOG")
            .arg("--quiet");
        cmd
    }

    /// Same as [`TestSite::command`], reading the sample dataset.
    pub fn command_with_data(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--data").arg(self.data_path());
        cmd
    }
}
