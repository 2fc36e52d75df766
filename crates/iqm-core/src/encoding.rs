//! Binary expansion weights and encode/decode helpers.
//!
//! A `Uint` of precision `p` is the plain binary expansion with weights
//! `2^0 .. 2^(p-1)`. An `Int` of precision `p` uses two's complement: the
//! first `p - 1` digits carry ascending powers of two and the final digit
//! is the sign digit with weight `-2^(p-1)`.

use crate::types::VarKind;

/// Largest supported precision.
///
/// Weights are `i64`; at precision 63 the full unsigned expansion sums to
/// exactly `i64::MAX`.
pub const MAX_PRECISION: u32 = 63;

/// The ordered expansion weights for a variable kind.
///
/// The weight at index `i` belongs to digit `i` of the expansion.
pub fn expansion_weights(kind: VarKind) -> Vec<i64> {
    match kind {
        VarKind::Binary => vec![1],
        VarKind::Uint { precision } => (0..precision).map(|i| 1i64 << i).collect(),
        VarKind::Int { precision } => {
            let mut weights: Vec<i64> = (0..precision - 1).map(|i| 1i64 << i).collect();
            weights.push(-(1i64 << (precision - 1)));
            weights
        }
    }
}

/// Reconstruct an integer value from its assigned digits.
///
/// `digits` holds 0/1 values in expansion order; extra trailing digits are
/// ignored, missing ones count as 0.
pub fn decode(kind: VarKind, digits: &[i64]) -> i64 {
    expansion_weights(kind)
        .iter()
        .zip(digits)
        .map(|(weight, digit)| weight * digit)
        .sum()
}

/// The 0/1 digits representing `value` in the kind's expansion.
///
/// `value` must lie in the kind's representable range.
pub fn encode(kind: VarKind, value: i64) -> Vec<i64> {
    debug_assert!(value >= kind.min_value() && value <= kind.max_value());
    match kind {
        VarKind::Binary => vec![value & 1],
        VarKind::Uint { precision } => (0..precision).map(|i| (value >> i) & 1).collect(),
        VarKind::Int { precision } => {
            let sign = i64::from(value < 0);
            let rest = value + sign * (1i64 << (precision - 1));
            let mut digits: Vec<i64> = (0..precision - 1).map(|i| (rest >> i) & 1).collect();
            digits.push(sign);
            digits
        }
    }
}
