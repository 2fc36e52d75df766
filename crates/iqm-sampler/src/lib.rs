//! Shared sampler abstractions for the IQM workspace.
//!
//! This crate provides the common types and traits that sampler backends
//! (like `iqm-exact`) use to integrate with the integer model layer.
//!
//! # Overview
//!
//! - [`SamplerConfig`]: configuration options passed through to backends
//! - [`SamplerError`]: error types for sampler operations
//! - [`SampleSet`] / [`SampleRecord`]: result set returned by a sample call
//! - [`Sampler`]: trait for sampler implementations

mod config;
mod error;
mod sampleset;
mod traits;

pub use config::SamplerConfig;
pub use error::SamplerError;
pub use sampleset::{SampleRecord, SampleSet};
pub use traits::Sampler;
