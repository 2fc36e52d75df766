//! Coefficient storage for a quadratic model over binary variables.

use crate::BitLabel;
use std::collections::{BTreeMap, BTreeSet};

/// A binary quadratic model: an objective over 0/1 variables with linear and
/// pairwise coefficients plus a constant offset.
///
/// All add operations accumulate: adding a term for a variable or pair that
/// already has a coefficient sums the biases. Pair keys are stored in sorted
/// order, so `(u, v)` and `(v, u)` address the same coefficient. A pair of a
/// variable with itself folds into its linear term, since `b * b == b` for
/// `b` in {0, 1}.
#[derive(Debug, Clone, Default)]
pub struct Bqm {
    linear: BTreeMap<BitLabel, f64>,
    quadratic: BTreeMap<(BitLabel, BitLabel), f64>,
    offset: f64,
}

impl Bqm {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `bias` to the linear coefficient of `label`, inserting it with
    /// that bias if absent. A zero bias still registers the variable.
    pub fn add_linear(&mut self, label: BitLabel, bias: f64) {
        *self.linear.entry(label).or_insert(0.0) += bias;
    }

    /// Add `bias` to the pairwise coefficient of `u` and `v`.
    ///
    /// If `u == v` the bias lands on the linear term instead.
    pub fn add_quadratic(&mut self, u: BitLabel, v: BitLabel, bias: f64) {
        if u == v {
            self.add_linear(u, bias);
            return;
        }
        let key = if u <= v { (u, v) } else { (v, u) };
        *self.quadratic.entry(key).or_insert(0.0) += bias;
    }

    /// Add a constant shift to the objective.
    pub fn add_offset(&mut self, offset: f64) {
        self.offset += offset;
    }

    /// The constant offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The linear coefficient of `label`, if the variable is present.
    pub fn get_linear(&self, label: &BitLabel) -> Option<f64> {
        self.linear.get(label).copied()
    }

    /// The pairwise coefficient of `u` and `v` in either order, if present.
    pub fn get_quadratic(&self, u: &BitLabel, v: &BitLabel) -> Option<f64> {
        let key = if u <= v {
            (u.clone(), v.clone())
        } else {
            (v.clone(), u.clone())
        };
        self.quadratic.get(&key).copied()
    }

    /// All linear coefficients, keyed by label.
    pub fn linear(&self) -> &BTreeMap<BitLabel, f64> {
        &self.linear
    }

    /// All pairwise coefficients, keyed by sorted label pair.
    pub fn quadratic(&self) -> &BTreeMap<(BitLabel, BitLabel), f64> {
        &self.quadratic
    }

    /// Every variable appearing in the model, in sorted order.
    pub fn variables(&self) -> Vec<BitLabel> {
        let mut set: BTreeSet<&BitLabel> = self.linear.keys().collect();
        for (u, v) in self.quadratic.keys() {
            set.insert(u);
            set.insert(v);
        }
        set.into_iter().cloned().collect()
    }

    /// Number of distinct variables in the model.
    pub fn num_variables(&self) -> usize {
        self.variables().len()
    }

    /// True if the model has no variables.
    pub fn is_empty(&self) -> bool {
        self.linear.is_empty() && self.quadratic.is_empty()
    }

    /// Evaluate the objective at the given assignment.
    ///
    /// Variables missing from the assignment are treated as 0.
    pub fn energy(&self, assignment: &BTreeMap<BitLabel, u8>) -> f64 {
        let value = |label: &BitLabel| f64::from(assignment.get(label).copied().unwrap_or(0));
        let mut total = self.offset;
        for (label, bias) in &self.linear {
            total += bias * value(label);
        }
        for ((u, v), bias) in &self.quadratic {
            total += bias * value(u) * value(v);
        }
        total
    }
}
