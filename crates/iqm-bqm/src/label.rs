//! Labels for the binary digits of an encoded variable.

use std::fmt;

/// Label of a single binary variable in the underlying model.
///
/// Each integer variable expands into a run of binary digits; the label pairs
/// the original variable name with the digit's index in that expansion. For a
/// plain binary variable the index is always 0.
///
/// Ordering is lexicographic on `(name, bit)`, so all digits of one variable
/// sort together in digit order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitLabel {
    name: String,
    bit: u32,
}

impl BitLabel {
    /// Create a label for digit `bit` of the variable `name`.
    pub fn new(name: impl Into<String>, bit: u32) -> Self {
        Self {
            name: name.into(),
            bit,
        }
    }

    /// The original variable name this digit belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The digit index within the variable's expansion.
    pub fn bit(&self) -> u32 {
        self.bit
    }
}

impl fmt::Display for BitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_accessors() {
        let label = BitLabel::new("x", 3);
        assert_eq!(label.name(), "x");
        assert_eq!(label.bit(), 3);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(format!("{}", BitLabel::new("flow", 0)), "flow[0]");
        assert_eq!(format!("{}", BitLabel::new("y", 7)), "y[7]");
    }

    #[test]
    fn test_label_ordering_groups_digits() {
        let mut labels = vec![
            BitLabel::new("y", 0),
            BitLabel::new("x", 2),
            BitLabel::new("x", 0),
            BitLabel::new("x", 1),
        ];
        labels.sort();
        assert_eq!(
            labels,
            vec![
                BitLabel::new("x", 0),
                BitLabel::new("x", 1),
                BitLabel::new("x", 2),
                BitLabel::new("y", 0),
            ]
        );
    }
}
