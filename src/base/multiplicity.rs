//! Multiplicity bounds for attributes and association ends.

use std::fmt;

/// A `lower..upper` multiplicity; `upper == None` means unbounded (`*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multiplicity {
    pub lower: u32,
    pub upper: Option<u32>,
}

impl Multiplicity {
    /// Exactly one (`1..1`)
    pub const ONE: Multiplicity = Multiplicity { lower: 1, upper: Some(1) };
    /// Optional (`0..1`)
    pub const OPT_ONE: Multiplicity = Multiplicity { lower: 0, upper: Some(1) };
    /// Any number (`0..*`)
    pub const ANY: Multiplicity = Multiplicity { lower: 0, upper: None };

    pub fn new(lower: u32, upper: Option<u32>) -> Self {
        Self { lower, upper }
    }

    /// True when the lower bound admits absence.
    pub fn is_optional(&self) -> bool {
        self.lower == 0
    }

    /// True when more than one value is admitted.
    pub fn is_multivalue(&self) -> bool {
        match self.upper {
            Some(upper) => upper > 1,
            None => true,
        }
    }
}

impl Default for Multiplicity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) if upper == self.lower => write!(f, "{}", self.lower),
            Some(upper) => write!(f, "{}..{}", self.lower, upper),
            None => write!(f, "{}..*", self.lower),
        }
    }
}
