//! Integration test suite for spa-review
//!
//! End-to-end checks over the embedded dataset and the `spa-review` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **directory**: ordering, slug and shadowing properties over the full dataset
//! - **content**: determinism of generated copy and crawler documents
//! - **cli**: command output and error reporting

#[path = "../common/mod.rs"]
mod common;

mod cli;
mod content;
mod directory;
