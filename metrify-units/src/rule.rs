//! Conversion rules
//!
//! A rule ties a source-unit pattern ("miles?", "lbs?") to a target metric
//! base and a conversion, plus the matcher compiled from the pattern.

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::matcher::build_matcher;
use crate::unit::BaseUnit;

/// Errors raised while building a rule.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    #[error("Invalid unit pattern '{0}': {1}")]
    InvalidPattern(String, regex::Error),
}

/// How a parsed value becomes a value in the target base unit.
///
/// Almost every unit is a fixed multiple of its base; temperature is the one
/// family that needs a real function.
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// Multiply the parsed value by a constant factor.
    Factor(f64),
    /// Apply a pure function to the parsed value.
    Formula(fn(f64) -> f64),
}

impl Conversion {
    /// Convert a parsed value into the target base unit.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Conversion::Factor(factor) => value * factor,
            Conversion::Formula(formula) => formula(value),
        }
    }
}

/// One conversion rule: pattern, target base, conversion, compiled matcher.
///
/// The matcher is built once in [`Rule::new`] and never rebuilt; rules are
/// immutable after construction.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Regex fragment recognizing the unit's accepted spellings.
    pub pattern: String,
    /// The metric base this rule converts into.
    pub target: BaseUnit,
    /// The conversion from parsed value to target base.
    pub conversion: Conversion,
    /// Unit family, e.g. "distance" or "mass".
    pub category: String,
    /// Compiled scan matcher, numeric grammar included.
    pub matcher: Regex,
}

impl Rule {
    /// Build a rule, compiling its matcher from the unit pattern.
    pub fn new(
        pattern: &str,
        target: BaseUnit,
        conversion: Conversion,
        category: &str,
    ) -> Result<Self, RuleError> {
        let matcher = build_matcher(pattern)
            .map_err(|e| RuleError::InvalidPattern(pattern.to_string(), e))?;
        Ok(Rule {
            pattern: pattern.to_string(),
            target,
            conversion,
            category: category.to_string(),
            matcher,
        })
    }

    /// Convert a parsed value into this rule's base unit.
    pub fn convert(&self, value: f64) -> f64 {
        self.conversion.apply(value)
    }

    /// Serializable metadata view of this rule.
    pub fn info(&self) -> RuleInfo {
        RuleInfo {
            category: self.category.clone(),
            pattern: self.pattern.clone(),
            target: self.target.symbol().to_string(),
        }
    }
}

/// Metadata view of a [`Rule`], for listing and inspection.
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub category: String,
    pub pattern: String,
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift_down(value: f64) -> f64 {
        value - 32.0
    }

    #[test]
    fn test_factor_conversion() {
        let conversion = Conversion::Factor(0.3048);
        assert_eq!(conversion.apply(2.0), 0.6096);
    }

    #[test]
    fn test_formula_conversion() {
        let conversion = Conversion::Formula(shift_down);
        assert_eq!(conversion.apply(32.0), 0.0);
    }

    #[test]
    fn test_rule_builds_and_converts() {
        let rule = Rule::new("feets?|foot", BaseUnit::Meter, Conversion::Factor(0.3048), "distance")
            .unwrap();
        assert_eq!(rule.target, BaseUnit::Meter);
        assert_eq!(rule.convert(2.0), 0.6096);
        assert!(rule.matcher.is_match("a 2 foot drop"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Rule::new("foot(", BaseUnit::Meter, Conversion::Factor(0.3048), "distance")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("foot("), "error should name the pattern, got: {}", message);
    }

    #[test]
    fn test_info_view() {
        let rule = Rule::new("yards?|yd", BaseUnit::Meter, Conversion::Factor(0.9144), "distance")
            .unwrap();
        let info = rule.info();
        assert_eq!(info.category, "distance");
        assert_eq!(info.pattern, "yards?|yd");
        assert_eq!(info.target, "m");
    }
}
