//! Imperial unit recognition and metric conversion rules for Metrify
//!
//! A [`Rule`] pairs a pattern recognizing the spellings of one imperial unit
//! with a conversion to a metric base unit; [`RuleTable`] holds the built-in,
//! ordered set of rules. Families covered:
//!
//! - Temperature: F, fahrenheit(s), degrees F
//! - Distance: thou, inch, foot/feet, yard/yd, chain, furlong/fur, mile, league
//! - Maritime: fathom/ftm, cable, nautical mile
//! - Survey: link, rod
//! - Area: acre
//! - Volume: fluid ounce/fl oz, gill, pint/pt, quart, gallon/gal
//! - Mass: grain, drachm, ounce/oz, lb(s), stone, quarter, hundredweight
//!
//! The table is compiled once (see [`RULES`]) and read-only afterward.
//! Deliberately absent: bare "pound" (currency ambiguity) and "ton"
//! (metric/imperial ambiguity).

mod matcher;
mod rule;
mod table;
mod unit;

pub use matcher::{build_matcher, NUMBER_PATTERN};
pub use rule::{Conversion, Rule, RuleError, RuleInfo};
pub use table::{RuleTable, RULES};
pub use unit::BaseUnit;
