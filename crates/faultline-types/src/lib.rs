//! # Faultline Types
//!
//! Report containers, configuration models, and error definitions for Faultline.
//!
//! - **`error`** - Typed errors for container rejections and configuration
//! - **`models`** - `ErrorMessage`, `RequestInformation`, `ReportingConfig`
//!
//! ## Architecture Role
//!
//! ```text
//!     faultline-types (this crate)
//!              │
//!              ▼
//!       faultline-core
//!              │
//!              ▼
//!       faultline-cli
//! ```
//!
//! Containers serialize to the wire shape expected by error-tracking
//! backends. Transport is left to callers.

pub mod error;
pub mod models;

pub use error::{ConfigError, FieldError};

pub use models::{
    ErrorMessage, ReportMode, ReportingConfig, RequestInformation, ServiceContext,
    ServiceContextConfig, DEFAULT_SERVICE,
};
