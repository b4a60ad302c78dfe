//! Report containers and configuration models.

mod config;
mod error_message;
mod request_info;

pub use config::{ReportMode, ReportingConfig, ServiceContextConfig};
pub use error_message::{
    ErrorContext, ErrorMessage, HttpRequestContext, ReportLocation, ServiceContext,
    DEFAULT_SERVICE,
};
pub use request_info::RequestInformation;
