//! SI prefix selection
//!
//! Picks a decimal prefix so the displayed magnitude stays human-scale:
//! 3218.688 m reads better as 3.22 km, 0.0001016 m as 101.60 µm.

use metrify_units::BaseUnit;

/// An SI decimal prefix, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Tera,
    Giga,
    Mega,
    Kilo,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    None,
}

impl Prefix {
    /// Select a prefix for a raw converted value, first matching row wins.
    ///
    /// Bases outside the prefix-eligible set (temperature, area) always get
    /// [`Prefix::None`]; sub-unit masses skip the centi row because nobody
    /// writes centigrams.
    pub fn select(value: f64, base: BaseUnit) -> Prefix {
        if !base.prefixable() {
            return Prefix::None;
        }
        if value > 1e12 {
            Prefix::Tera
        } else if value > 1e9 {
            Prefix::Giga
        } else if value > 1e6 {
            Prefix::Mega
        } else if value > 1e3 {
            Prefix::Kilo
        } else if value < 1e-9 {
            Prefix::Pico
        } else if value < 1e-6 {
            Prefix::Nano
        } else if value < 1e-3 {
            Prefix::Micro
        } else if value < 1e-2 {
            Prefix::Milli
        } else if value < 1.0 && base.allows_centi() {
            Prefix::Centi
        } else {
            Prefix::None
        }
    }

    /// The symbol written in front of the base unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Prefix::Tera => "T",
            Prefix::Giga => "G",
            Prefix::Mega => "M",
            Prefix::Kilo => "k",
            Prefix::Centi => "c",
            Prefix::Milli => "m",
            Prefix::Micro => "µ",
            Prefix::Nano => "n",
            Prefix::Pico => "p",
            Prefix::None => "",
        }
    }

    /// What the raw value is divided by before display.
    pub fn divisor(&self) -> f64 {
        match self {
            Prefix::Tera => 1e12,
            Prefix::Giga => 1e9,
            Prefix::Mega => 1e6,
            Prefix::Kilo => 1e3,
            Prefix::Centi => 1e-2,
            Prefix::Milli => 1e-3,
            Prefix::Micro => 1e-6,
            Prefix::Nano => 1e-9,
            Prefix::Pico => 1e-12,
            Prefix::None => 1.0,
        }
    }
}
