//! Error handling for spa-review
//!
//! The error system is built around two principles:
//! 1. **Strongly-typed errors** for the few operations that can genuinely fail
//!    (loading the dataset, reading configuration, rendering copy)
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! "Not found" is deliberately *not* an error anywhere in the crate. Unknown
//! slugs, countries and cities are normal outcomes reported through
//! [`SlugLookup::NotFound`](crate::directory::SlugLookup), `Option::None` or an
//! empty list. Likewise a failed places lookup degrades to an empty enrichment
//! payload instead of surfacing an error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use spa_review::core::{SpaReviewError, ErrorContext, user_friendly_error};
//!
//! let error = SpaReviewError::DuplicateSlug {
//!     slug: "oasis-spa-bangkok".to_string(),
//!     first: "Oasis Spa (Bangkok, Thailand)".to_string(),
//!     second: "Oasis Spa Bangkok (Bangkok, Thailand)".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for spa-review operations.
#[derive(Error, Debug, Clone)]
pub enum SpaReviewError {
    /// The dataset document could not be read from disk.
    #[error("Failed to read spa dataset from {path}: {reason}")]
    DatasetRead {
        /// Path that was read
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// The dataset document is not valid compact-record JSON.
    #[error("Invalid spa dataset: {reason}")]
    DatasetParse {
        /// Parser message, including line and column where available
        reason: String,
    },

    /// Two bulk entries expand to the same slug.
    ///
    /// Slugs are page locators, so a collision would make one spa unreachable.
    #[error("Duplicate spa slug '{slug}': {first} and {second}")]
    DuplicateSlug {
        /// The colliding slug
        slug: String,
        /// First entry producing the slug, as "name (city, country)"
        first: String,
        /// Second entry producing the slug
        second: String,
    },

    /// Configuration file is unreadable or malformed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// An editorial template failed to render.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateError {
        /// Name of the template pool entry
        template: String,
        /// Tera's description of the failure
        reason: String,
    },

    /// Catch-all for errors that don't fit a more specific variant.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

impl From<serde_json::Error> for SpaReviewError {
    fn from(error: serde_json::Error) -> Self {
        Self::DatasetParse {
            reason: error.to_string(),
        }
    }
}

/// Flatten a Tera error and its sources into a single line.
pub(crate) fn format_tera_error(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Error wrapper with user-facing details and a suggested fix.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SpaReviewError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: SpaReviewError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colours.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for CLI display.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(spa_error) = error.downcast_ref::<SpaReviewError>() {
        return create_error_context(spa_error.clone());
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(SpaReviewError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your config file. Verify quotes, brackets and table names")
        .with_details("The config file is read from --config, SPA_REVIEW_CONFIG or ~/.spa-review/config.toml");
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return create_error_context(SpaReviewError::DatasetParse {
            reason: json_error.to_string(),
        });
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::NotFound {
            return ErrorContext::new(SpaReviewError::Other {
                message: error.to_string(),
            })
            .with_suggestion("Check that the file exists and the path is correct");
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(SpaReviewError::Other {
        message,
    })
}

fn create_error_context(error: SpaReviewError) -> ErrorContext {
    match &error {
        SpaReviewError::DatasetRead {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the data_path setting or pass --data with a readable JSON file"),
        SpaReviewError::DatasetParse {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("The dataset must map country -> city -> [[name, rating x10, reviews / 10, type code], ...]")
            .with_details("Example record: [\"Oasis Spa\", 47, 63, \"D\"]"),
        SpaReviewError::DuplicateSlug {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Rename one of the spas so their name and city produce different slugs")
            .with_details("Slugs are lowercase, diacritic-free and hyphenated, so names differing only in case or punctuation collide"),
        SpaReviewError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the config file for typos or remove it to fall back to defaults"),
        SpaReviewError::TemplateError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check template syntax: variables use {{ var }} and every variable must exist in the context"),
        SpaReviewError::Other {
            ..
        } => ErrorContext::new(error),
    }
}
