//! Exhaustive sampler implementation.

use iqm_bqm::{BitLabel, Bqm};
use iqm_sampler::{SampleRecord, SampleSet, Sampler, SamplerConfig, SamplerError};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

/// Default upper bound on model size for exhaustive enumeration.
pub const MAX_VARIABLES: usize = 24;

/// Sampler that enumerates all `2^n` assignments of the model.
///
/// Returns one record per assignment with `num_occurrences = 1`, sorted by
/// ascending energy, so the first record is a true global minimum.
/// Configuration options are accepted for interface compatibility and
/// ignored; enumeration is complete and deterministic.
#[derive(Debug, Clone)]
pub struct ExactSampler {
    limit: usize,
}

impl ExactSampler {
    /// Create a sampler with the default variable limit.
    pub fn new() -> Self {
        Self {
            limit: MAX_VARIABLES,
        }
    }

    /// Override the variable limit.
    ///
    /// Enumeration cost doubles per variable; raise this with care.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// The current variable limit.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for ExactSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for ExactSampler {
    fn sample(
        &mut self,
        bqm: &Bqm,
        _config: &SamplerConfig,
    ) -> Result<SampleSet<BitLabel>, SamplerError> {
        let variables = bqm.variables();
        if variables.is_empty() {
            return Err(SamplerError::EmptyModel);
        }
        let n = variables.len();
        // the enumeration mask is a u64, so 63 variables is a hard ceiling
        let limit = self.limit.min(63);
        if n > limit {
            return Err(SamplerError::TooManyVariables { count: n, limit });
        }

        // index terms by column so the inner loop avoids map lookups
        let positions: BTreeMap<&BitLabel, usize> = variables
            .iter()
            .enumerate()
            .map(|(i, label)| (label, i))
            .collect();
        let linear: Vec<f64> = variables
            .iter()
            .map(|label| bqm.get_linear(label).unwrap_or(0.0))
            .collect();
        let quadratic: Vec<(usize, usize, f64)> = bqm
            .quadratic()
            .iter()
            .map(|((u, v), bias)| (positions[u], positions[v], *bias))
            .collect();

        let start = Instant::now();
        let mut records = Vec::with_capacity(1usize << n);
        for mask in 0u64..(1u64 << n) {
            let sample: Vec<i64> = (0..n).map(|i| ((mask >> i) & 1) as i64).collect();
            let mut energy = bqm.offset();
            for (i, bias) in linear.iter().enumerate() {
                if sample[i] == 1 {
                    energy += bias;
                }
            }
            for &(i, j, bias) in &quadratic {
                if sample[i] == 1 && sample[j] == 1 {
                    energy += bias;
                }
            }
            records.push(SampleRecord {
                sample,
                energy,
                num_occurrences: 1,
            });
        }
        records.sort_by(|a, b| a.energy.total_cmp(&b.energy));

        debug!(
            component = "sampler",
            operation = "sample",
            status = "success",
            variables = n as u64,
            records = records.len() as u64,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Enumerated all assignments"
        );
        Ok(SampleSet::new(variables, records))
    }
}
