//! Integer linear programs encoded as quadratic penalty models.

use crate::error::ModelError;
use crate::model::IntegerModel;
use crate::types::VarKind;
use iqm_sampler::{SampleSet, Sampler, SamplerConfig};
use tracing::debug;

/// An integer linear program with equality constraints, encoded into an
/// [`IntegerModel`].
///
/// The problem is `minimize cᵀx subject to a x = b`, with `n` variables and
/// `m` equality constraints: `c` has one coefficient and `kinds` one kind
/// per variable, `a` is the `m × n` constraint matrix given as rows, and
/// `b` the right-hand side vector. Constraint violations are penalized by
/// `‖a x − b‖²`, which expands into the offset `bᵀb`, linear terms
/// `−2 (aᵀb)ᵢ`, and the quadratic form `(aᵀa)ᵢⱼ xᵢ xⱼ`.
///
/// The penalty weight is 1; scale `a` and `b` together to strengthen the
/// constraints against the objective. A lowest-energy record with energy
/// equal to its objective value satisfies all constraints exactly.
///
/// Variables are named `x_0 .. x_{n-1}` in decoded sample sets; see
/// [`variable_name`](Self::variable_name).
pub struct IlpModel {
    model: IntegerModel,
    num_variables: usize,
}

impl IlpModel {
    /// Encode the program `minimize cᵀx subject to a x = b`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `c`, `a`, `b`, and `kinds` disagree on the
    /// variable or constraint count; `InvalidPrecision` for an out-of-range
    /// kind.
    pub fn new(
        c: &[f64],
        a: &[Vec<f64>],
        b: &[f64],
        kinds: &[VarKind],
    ) -> Result<Self, ModelError> {
        let n = c.len();
        if kinds.len() != n {
            return Err(ModelError::DimensionMismatch(format!(
                "{} objective coefficients but {} variable kinds",
                n,
                kinds.len()
            )));
        }
        if a.len() != b.len() {
            return Err(ModelError::DimensionMismatch(format!(
                "{} constraint rows but {} right-hand sides",
                a.len(),
                b.len()
            )));
        }
        if let Some((row, _)) = a.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(ModelError::DimensionMismatch(format!(
                "constraint row {} has {} coefficients, expected {}",
                row,
                a[row].len(),
                n
            )));
        }

        let mut model = IntegerModel::new();
        for (i, kind) in kinds.iter().enumerate() {
            let name = Self::variable_name(i);
            model.add_variable(&name, *kind)?;
            model.add_linear(&name, c[i])?;
        }

        // ‖a x − b‖² = bᵀb − 2 bᵀa x + xᵀ aᵀa x
        model.add_offset(b.iter().map(|rhs| rhs * rhs).sum());
        for i in 0..n {
            let atb: f64 = a.iter().zip(b).map(|(row, rhs)| row[i] * rhs).sum();
            model.add_linear(&Self::variable_name(i), -2.0 * atb)?;
        }
        for i in 0..n {
            for j in 0..n {
                let ata: f64 = a.iter().map(|row| row[i] * row[j]).sum();
                model.add_interaction(&Self::variable_name(i), &Self::variable_name(j), ata)?;
            }
        }

        debug!(
            component = "ilp",
            operation = "build",
            status = "success",
            variables = n as u64,
            constraints = a.len() as u64,
            "Encoded integer linear program"
        );
        Ok(Self {
            model,
            num_variables: n,
        })
    }

    /// The name the variable at `index` carries in decoded sample sets.
    pub fn variable_name(index: usize) -> String {
        format!("x_{index}")
    }

    /// Number of program variables.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Read access to the encoded integer model.
    pub fn model(&self) -> &IntegerModel {
        &self.model
    }

    /// Register the sampler used by [`sample`](Self::sample).
    pub fn set_sampler(&mut self, sampler: Box<dyn Sampler>) {
        self.model.set_sampler(sampler);
    }

    /// Sample the encoded model with the registered sampler.
    ///
    /// # Errors
    ///
    /// `UnregisteredSampler` if no sampler was registered; backend failures
    /// surface unchanged.
    pub fn sample(&mut self, config: &SamplerConfig) -> Result<SampleSet<String>, ModelError> {
        self.model.sample(config)
    }

    /// Sample the encoded model with a caller-supplied sampler.
    ///
    /// # Errors
    ///
    /// Backend failures surface unchanged.
    pub fn sample_with(
        &mut self,
        sampler: &mut dyn Sampler,
        config: &SamplerConfig,
    ) -> Result<SampleSet<String>, ModelError> {
        self.model.sample_with(sampler, config)
    }
}

impl std::fmt::Debug for IlpModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IlpModel")
            .field("num_variables", &self.num_variables)
            .finish_non_exhaustive()
    }
}
