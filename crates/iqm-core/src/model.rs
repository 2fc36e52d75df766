//! The integer-level model builder and sample orchestrator.

use crate::encoding::{self, MAX_PRECISION};
use crate::error::ModelError;
use crate::types::VarKind;
use iqm_bqm::{BitLabel, Bqm};
use iqm_sampler::{SampleRecord, SampleSet, Sampler, SamplerConfig};
use std::collections::BTreeMap;
use tracing::debug;

/// A quadratic model over named integer variables, backed by a binary
/// quadratic model.
///
/// Declarations and terms accumulate through the add methods; every add
/// keeps the underlying binary model up to date, so sampling always runs
/// against the current accumulated state. The binary model is only reachable
/// read-only — all mutation goes through the integer-level API.
///
/// Term coefficients accumulate like the underlying model's: adding a linear
/// or interaction term for the same variable(s) twice sums the biases.
pub struct IntegerModel {
    bqm: Bqm,
    registry: BTreeMap<String, VarKind>,
    sampler: Option<Box<dyn Sampler>>,
}

impl IntegerModel {
    /// Create an empty model with no sampler registered.
    pub fn new() -> Self {
        Self {
            bqm: Bqm::new(),
            registry: BTreeMap::new(),
            sampler: None,
        }
    }

    /// Declare a variable and register its expansion digits in the binary
    /// model with zero bias.
    ///
    /// Returns the binary labels backing the variable, in digit order.
    ///
    /// # Errors
    ///
    /// `DuplicateName` if the name is already declared; `InvalidPrecision`
    /// if an integer kind's precision is 0 or above [`MAX_PRECISION`].
    pub fn add_variable(&mut self, name: &str, kind: VarKind) -> Result<Vec<BitLabel>, ModelError> {
        if kind.is_integer() && !(1..=MAX_PRECISION).contains(&kind.precision()) {
            return Err(ModelError::InvalidPrecision {
                name: name.to_string(),
                precision: kind.precision(),
            });
        }
        if self.registry.contains_key(name) {
            return Err(ModelError::DuplicateName(name.to_string()));
        }

        let labels: Vec<BitLabel> = (0..kind.num_bits())
            .map(|bit| BitLabel::new(name, bit))
            .collect();
        for label in &labels {
            self.bqm.add_linear(label.clone(), 0.0);
        }
        self.registry.insert(name.to_string(), kind);

        debug!(
            component = "model",
            operation = "add_variable",
            status = "success",
            name = name,
            kind = kind.as_str(),
            bits = kind.num_bits() as u64,
            "Declared variable"
        );
        Ok(labels)
    }

    /// Add a linear term `bias * name` by distributing the bias across the
    /// variable's expansion weights.
    ///
    /// # Errors
    ///
    /// `UnknownVariable` if the name was never declared.
    pub fn add_linear(&mut self, name: &str, bias: f64) -> Result<(), ModelError> {
        let kind = self.lookup(name)?;
        for (bit, weight) in encoding::expansion_weights(kind).iter().enumerate() {
            self.bqm
                .add_linear(BitLabel::new(name, bit as u32), bias * *weight as f64);
        }
        Ok(())
    }

    /// Add an interaction term `bias * u * v`.
    ///
    /// The term is rewritten over the two expansions: with weights `wᵢ` for
    /// `u` and `wⱼ` for `v`, every digit pair receives `bias * wᵢ * wⱼ`.
    /// Use the same name for `u` and `v` to add a square term; same-digit
    /// pairs then fold into linear coefficients, since a binary digit equals
    /// its own square.
    ///
    /// # Errors
    ///
    /// `UnknownVariable` if either name was never declared.
    pub fn add_interaction(&mut self, u: &str, v: &str, bias: f64) -> Result<(), ModelError> {
        let u_kind = self.lookup(u)?;
        let v_kind = self.lookup(v)?;

        let u_weights = encoding::expansion_weights(u_kind);
        let v_weights = encoding::expansion_weights(v_kind);
        for (i, wi) in u_weights.iter().enumerate() {
            for (j, wj) in v_weights.iter().enumerate() {
                self.bqm.add_quadratic(
                    BitLabel::new(u, i as u32),
                    BitLabel::new(v, j as u32),
                    bias * (*wi as f64) * (*wj as f64),
                );
            }
        }
        Ok(())
    }

    /// Add a constant shift to the objective.
    pub fn add_offset(&mut self, offset: f64) {
        self.bqm.add_offset(offset);
    }

    fn lookup(&self, name: &str) -> Result<VarKind, ModelError> {
        self.registry
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownVariable(name.to_string()))
    }

    /// The kind of a declared variable.
    pub fn kind(&self, name: &str) -> Option<VarKind> {
        self.registry.get(name).copied()
    }

    /// Iterate over declared variables and their kinds, in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, VarKind)> {
        self.registry.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Number of declared integer-level variables.
    pub fn num_variables(&self) -> usize {
        self.registry.len()
    }

    /// Number of binary variables in the underlying model.
    pub fn num_binary_variables(&self) -> usize {
        self.bqm.num_variables()
    }

    /// Read access to the underlying binary quadratic model.
    pub fn bqm(&self) -> &Bqm {
        &self.bqm
    }

    /// Register the sampler used by [`sample`](Self::sample).
    pub fn set_sampler(&mut self, sampler: Box<dyn Sampler>) {
        self.sampler = Some(sampler);
    }

    /// True if a sampler is registered.
    pub fn has_sampler(&self) -> bool {
        self.sampler.is_some()
    }

    /// Sample the model with the registered sampler and decode the result.
    ///
    /// # Errors
    ///
    /// `UnregisteredSampler` if no sampler was registered; backend failures
    /// surface unchanged.
    pub fn sample(&mut self, config: &SamplerConfig) -> Result<SampleSet<String>, ModelError> {
        let sampler = self.sampler.as_mut().ok_or(ModelError::UnregisteredSampler)?;
        let raw = sampler.sample(&self.bqm, config)?;
        debug!(
            component = "model",
            operation = "sample",
            status = "success",
            records = raw.len() as u64,
            "Sampled binary model"
        );
        Ok(self.decode(&raw))
    }

    /// Sample the model with a caller-supplied sampler and decode the result.
    ///
    /// # Errors
    ///
    /// Backend failures surface unchanged.
    pub fn sample_with(
        &mut self,
        sampler: &mut dyn Sampler,
        config: &SamplerConfig,
    ) -> Result<SampleSet<String>, ModelError> {
        let raw = sampler.sample(&self.bqm, config)?;
        Ok(self.decode(&raw))
    }

    /// Rebuild integer values from a binary sample set.
    ///
    /// Each integer value is the weighted sum of its digits' 0/1 values;
    /// energies and occurrence counts carry over verbatim. The decoded set
    /// is keyed by the original names, in name order.
    fn decode(&self, raw: &SampleSet<BitLabel>) -> SampleSet<String> {
        let names: Vec<String> = self.registry.keys().cloned().collect();
        let columns: BTreeMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        let weights: BTreeMap<&str, Vec<i64>> = self
            .registry
            .iter()
            .map(|(name, kind)| (name.as_str(), encoding::expansion_weights(*kind)))
            .collect();

        let records = raw
            .records()
            .iter()
            .map(|record| {
                let mut values = vec![0i64; names.len()];
                for (pos, label) in raw.variables().iter().enumerate() {
                    let Some(&column) = columns.get(label.name()) else {
                        continue;
                    };
                    if let Some(weight) = weights[label.name()].get(label.bit() as usize) {
                        values[column] += weight * record.sample[pos];
                    }
                }
                SampleRecord {
                    sample: values,
                    energy: record.energy,
                    num_occurrences: record.num_occurrences,
                }
            })
            .collect();
        SampleSet::new(names, records)
    }
}

impl Default for IntegerModel {
    fn default() -> Self {
        Self::new()
    }
}
