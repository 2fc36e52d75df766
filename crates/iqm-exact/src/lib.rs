//! Exhaustive reference sampler.
//!
//! Enumerates every assignment of a binary quadratic model and reports each
//! one with its exact energy, ordered from lowest to highest. Intended as a
//! reference backend for small models and for testing the integer encoding
//! layer; it enumerates the full space, it does not search.

mod sampler;

pub use sampler::{ExactSampler, MAX_VARIABLES};
