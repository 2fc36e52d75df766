//! Sampler configuration types.

use std::collections::BTreeMap;

/// Configuration options for sampler behavior.
///
/// This struct provides a unified way to pass parameters across different
/// sampler backends. Every field is optional; backends apply their own
/// defaults for anything left unset and ignore options they have no use for.
/// Backend-specific options go into the free-form [`params`](Self::params)
/// map and are forwarded unmodified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplerConfig {
    /// Number of samples to draw. `None` uses the backend default.
    pub num_reads: Option<u32>,
    /// Random seed for stochastic backends. `None` uses entropy.
    pub seed: Option<u64>,
    /// Time limit in seconds. `None` means no limit.
    pub time_limit: Option<f64>,
    /// Log backend output to console. `None` uses the backend default.
    pub log_to_console: Option<bool>,
    /// Backend-specific numeric options, forwarded as-is.
    pub params: BTreeMap<String, f64>,
}

impl SamplerConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of reads.
    pub fn with_num_reads(mut self, num_reads: u32) -> Self {
        self.num_reads = Some(num_reads);
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Enable or disable console logging.
    pub fn with_log_to_console(mut self, enabled: bool) -> Self {
        self.log_to_console = Some(enabled);
        self
    }

    /// Set a backend-specific numeric option.
    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Get a backend-specific option set via [`with_param`](Self::with_param).
    pub fn param(&self, name: &str) -> Option<f64> {
        self.params.get(name).copied()
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.num_reads.is_none()
            && self.seed.is_none()
            && self.time_limit.is_none()
            && self.log_to_console.is_none()
            && self.params.is_empty()
    }
}
