//! Typed error definitions for Faultline.
//!
//! Report normalization itself never fails. The errors here come from the
//! edges around it:
//!
//! - **`FieldError`** - a report or request container rejected a value
//! - **`ConfigError`** - configuration could not be loaded or validated
//!
//! Both are serializable via serde and matchable via enum variants.

mod config;
mod field;

pub use config::ConfigError;
pub use field::FieldError;
