//! Sampler trait for abstraction over different backends.

use crate::{SampleSet, SamplerConfig, SamplerError};
use iqm_bqm::{BitLabel, Bqm};

/// Trait for sampler backends.
///
/// A sampler searches for low-energy assignments of a binary quadratic model
/// and reports them as a [`SampleSet`] keyed by the model's binary labels.
/// Backends read what they need from the configuration and ignore the rest.
pub trait Sampler {
    /// Sample assignments of the given model.
    ///
    /// # Errors
    ///
    /// Returns a `SamplerError` if the model is empty, exceeds backend
    /// limits, or the backend itself fails.
    fn sample(
        &mut self,
        bqm: &Bqm,
        config: &SamplerConfig,
    ) -> Result<SampleSet<BitLabel>, SamplerError>;
}
