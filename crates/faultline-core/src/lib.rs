//! # Faultline Core
//!
//! Normalizes loosely-typed error input into structured reports.
//!
//! ```text
//! faultline-core/src/
//! ├── value/      # RawValue: undefined/null-aware dynamic values
//! ├── classify.rs # Shape { Nullish, ErrorLike, PlainObject, Other }
//! ├── populate.rs # RawValue -> ReportSink
//! ├── extract.rs  # RawValue -> RequestSink
//! ├── sink.rs     # Sink traits + ErrorMessage / RequestInformation impls
//! ├── inspect.rs  # REPL-style pretty printer
//! ├── trace.rs    # Synthesized stack traces
//! └── modules/    # Configuration loading
//! ```
//!
//! Nothing here performs I/O on the report path or keeps state between
//! calls; each call owns its output container.

#![cfg_attr(test, allow(clippy::panic))]

pub mod classify;
pub mod extract;
pub mod inspect;
pub mod modules;
pub mod populate;
pub mod sink;
pub mod trace;
pub mod value;

pub use classify::{classify, Shape};
pub use extract::{extract_into, extract_request_information};
pub use inspect::{inspect, Inspector};
pub use populate::populate;
pub use sink::{ReportSink, RequestSink};
pub use trace::build_trace;
pub use value::{Fields, RawValue};
