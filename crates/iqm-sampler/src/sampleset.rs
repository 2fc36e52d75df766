//! Result set types returned by samplers.

/// A single sample: one assignment with its energy and occurrence count.
///
/// `sample` is aligned with the variable order of the owning [`SampleSet`].
/// Binary backends store 0/1 values; the integer decode layer reuses the
/// same record type with reconstructed integer values.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    /// Assigned values, one per variable of the owning set.
    pub sample: Vec<i64>,
    /// Objective value of this assignment.
    pub energy: f64,
    /// How many times this assignment was observed.
    pub num_occurrences: u32,
}

/// An ordered collection of samples over a fixed variable list.
///
/// Generic over the variable label type: backends return sets keyed by
/// binary digit labels, the decode layer returns sets keyed by the original
/// variable names.
#[derive(Debug, Clone)]
pub struct SampleSet<V> {
    variables: Vec<V>,
    records: Vec<SampleRecord>,
}

impl<V> SampleSet<V> {
    /// Create a sample set from a variable list and matching records.
    ///
    /// Every record's `sample` length must equal the variable count.
    pub fn new(variables: Vec<V>, records: Vec<SampleRecord>) -> Self {
        debug_assert!(records.iter().all(|r| r.sample.len() == variables.len()));
        Self { variables, records }
    }

    /// The variables this set is defined over, in column order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// All records in this set.
    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record with the lowest energy, if any.
    pub fn lowest(&self) -> Option<&SampleRecord> {
        self.records
            .iter()
            .min_by(|a, b| a.energy.total_cmp(&b.energy))
    }

    /// Sort records in place by ascending energy.
    pub fn sort_by_energy(&mut self) {
        self.records.sort_by(|a, b| a.energy.total_cmp(&b.energy));
    }
}

impl<V: PartialEq> SampleSet<V> {
    /// Column index of `variable`, if it is part of this set.
    pub fn position(&self, variable: &V) -> Option<usize> {
        self.variables.iter().position(|v| v == variable)
    }

    /// Value of `variable` in the given record.
    pub fn value(&self, record: &SampleRecord, variable: &V) -> Option<i64> {
        self.position(variable).map(|i| record.sample[i])
    }
}
