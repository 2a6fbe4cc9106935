//! Core types for spa-review
//!
//! This module holds the vocabulary shared by every other module: the error
//! types and the spa category model.
//!
//! # Modules
//!
//! ## `error` - Error Handling
//!
//! - [`SpaReviewError`] - Typed failures (dataset load, configuration, rendering)
//! - [`ErrorContext`] - User-friendly wrapper with details and a suggestion
//! - [`user_friendly_error`] - Convert any `anyhow::Error` for CLI display
//!
//! ## `spa_type` - Spa Categories
//!
//! - [`SpaType`] - The eight spa categories with code, label, colour and icon
//! - [`offerings_for`] - Treatment menu lookup by label with Hotel Spa fallback
//!
//! # Example
//!
//! ```rust
//! use spa_review::core::SpaType;
//!
//! let kind = SpaType::from_code_or_default('T');
//! assert_eq!(kind.label(), "Thermal Spa");
//! assert_eq!(kind.icon(), "♨️");
//! ```

pub mod error;
pub mod spa_type;

pub use error::{ErrorContext, SpaReviewError, user_friendly_error};
pub use spa_type::{BASE_OFFERINGS, SpaType, offerings_for};
