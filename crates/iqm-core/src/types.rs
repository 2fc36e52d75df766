//! Variable kinds for the integer model.

/// Kind of a declared variable, with bit precision for integer kinds.
///
/// Precision is the number of binary digits used in the expansion, declared
/// per variable. A `Uint` with precision `p` covers `[0, 2^p - 1]`; an `Int`
/// with precision `p` covers the two's-complement range
/// `[-2^(p-1), 2^(p-1) - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    /// A single 0/1 variable.
    Binary,
    /// Unsigned integer with the given bit precision.
    Uint {
        /// Number of binary digits in the expansion.
        precision: u32,
    },
    /// Signed integer (two's complement) with the given bit precision.
    Int {
        /// Number of binary digits in the expansion, including the sign digit.
        precision: u32,
    },
}

impl VarKind {
    /// Number of binary digits in this kind's expansion.
    pub fn num_bits(self) -> u32 {
        match self {
            VarKind::Binary => 1,
            VarKind::Uint { precision } | VarKind::Int { precision } => precision,
        }
    }

    /// The declared precision (1 for `Binary`).
    pub fn precision(self) -> u32 {
        self.num_bits()
    }

    /// True for the integer kinds (`Uint` and `Int`).
    pub fn is_integer(self) -> bool {
        !matches!(self, VarKind::Binary)
    }

    /// Smallest representable value.
    pub fn min_value(self) -> i64 {
        match self {
            VarKind::Binary | VarKind::Uint { .. } => 0,
            VarKind::Int { precision } => -(1i64 << (precision - 1)),
        }
    }

    /// Largest representable value.
    pub fn max_value(self) -> i64 {
        match self {
            VarKind::Binary => 1,
            VarKind::Uint { precision } => ((1u64 << precision) - 1) as i64,
            VarKind::Int { precision } => (1i64 << (precision - 1)) - 1,
        }
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Binary => "binary",
            VarKind::Uint { .. } => "uint",
            VarKind::Int { .. } => "int",
        }
    }
}

impl std::fmt::Display for VarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarKind::Binary => write!(f, "binary"),
            VarKind::Uint { precision } => write!(f, "uint{}", precision),
            VarKind::Int { precision } => write!(f, "int{}", precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_bits() {
        assert_eq!(VarKind::Binary.num_bits(), 1);
        assert_eq!(VarKind::Uint { precision: 4 }.num_bits(), 4);
        assert_eq!(VarKind::Int { precision: 5 }.num_bits(), 5);
    }

    #[test]
    fn test_is_integer() {
        assert!(!VarKind::Binary.is_integer());
        assert!(VarKind::Uint { precision: 4 }.is_integer());
        assert!(VarKind::Int { precision: 4 }.is_integer());
    }

    #[test]
    fn test_value_ranges() {
        assert_eq!(VarKind::Binary.min_value(), 0);
        assert_eq!(VarKind::Binary.max_value(), 1);

        let uint3 = VarKind::Uint { precision: 3 };
        assert_eq!(uint3.min_value(), 0);
        assert_eq!(uint3.max_value(), 7);

        let int4 = VarKind::Int { precision: 4 };
        assert_eq!(int4.min_value(), -8);
        assert_eq!(int4.max_value(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VarKind::Binary), "binary");
        assert_eq!(format!("{}", VarKind::Uint { precision: 8 }), "uint8");
        assert_eq!(format!("{}", VarKind::Int { precision: 16 }), "int16");
    }
}
