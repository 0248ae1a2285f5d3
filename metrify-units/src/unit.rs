//! Target metric base units
//!
//! Every conversion rule lands on one of these canonical bases. Prefix scaling
//! (k, m, µ, ...) happens later, against the base symbol.

use std::fmt;

/// The metric base a source unit converts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseUnit {
    /// Meter, `m`
    Meter,
    /// Gram, `g`
    Gram,
    /// Liter, `L`
    Liter,
    /// Degree Celsius, `℃`
    Celsius,
    /// Square meter, `m²`
    SquareMeter,
}

impl BaseUnit {
    /// The display symbol for this base unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            BaseUnit::Meter => "m",
            BaseUnit::Gram => "g",
            BaseUnit::Liter => "L",
            BaseUnit::Celsius => "℃",
            BaseUnit::SquareMeter => "m²",
        }
    }

    /// Whether SI decimal prefixes may be attached to this base.
    ///
    /// Length, mass and volume take prefixes; temperature and area are always
    /// rendered on the bare symbol.
    pub fn prefixable(&self) -> bool {
        matches!(self, BaseUnit::Meter | BaseUnit::Gram | BaseUnit::Liter)
    }

    /// Whether the centi prefix applies to sub-unit values of this base.
    ///
    /// Grams are exempt: there is no centigram convention in practice.
    pub fn allows_centi(&self) -> bool {
        !matches!(self, BaseUnit::Gram)
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
