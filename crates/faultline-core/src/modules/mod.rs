//! Supporting modules around the normalizer.

pub mod config;
