//! Integer-variable model builder over a binary quadratic model.
//!
//! Integer decision variables (unsigned and signed) are encoded as weighted
//! sums of binary variables so that any binary quadratic sampler can
//! optimize over them. Linear and quadratic terms declared at the integer
//! level are algebraically substituted into equivalent binary-level terms;
//! sample results are decoded back to integer values per variable.
//!
//! # Overview
//!
//! - [`VarKind`]: variable kinds with per-variable bit precision
//! - [`IntegerModel`]: the accumulating model builder and sample orchestrator
//! - [`IlpModel`]: integer linear programs encoded via quadratic penalties
//! - [`ModelError`]: error types for model operations
//! - [`encoding`]: binary expansion weights and encode/decode helpers

pub mod encoding;
mod error;
mod ilp;
mod model;
mod types;

pub use error::ModelError;
pub use ilp::IlpModel;
pub use model::IntegerModel;
pub use types::VarKind;
