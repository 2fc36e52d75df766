//! Binary quadratic model storage.
//!
//! This crate holds the data structure that everything else in the IQM
//! workspace builds on: a quadratic objective over 0/1 variables with
//! accumulating linear and pairwise coefficients plus a constant offset.
//!
//! # Overview
//!
//! - [`BitLabel`]: label of a single binary digit backing an integer variable
//! - [`Bqm`]: coefficient storage with add-accumulate semantics

mod bqm;
mod label;

pub use bqm::Bqm;
pub use label::BitLabel;
