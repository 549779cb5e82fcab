//! Response handling module.
//!
//! This module provides the [`ResponseFormat`] trait for content-type checks
//! and body parsing, plus the [`DecodedResponse`] enum for callers that
//! handle JSON and binary results uniformly.

mod format;
mod value;

pub use format::{BinaryFormat, JsonFormat, ResponseFormat};
pub use value::DecodedResponse;
