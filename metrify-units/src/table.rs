//! The built-in conversion rule table
//!
//! Sources for the constants:
//! https://en.wikipedia.org/wiki/Imperial_units
//! https://en.wikipedia.org/wiki/Fahrenheit

use std::sync::LazyLock;

use tracing::debug;

use crate::rule::{Conversion, Rule};
use crate::unit::BaseUnit;

/// Global rule table, compiled once on first use.
pub static RULES: LazyLock<RuleTable> = LazyLock::new(|| RuleTable::new());

/// Ordered, read-only collection of conversion rules.
///
/// Rules are registered family by family; order matters only in that the
/// engine runs each rule to completion before starting the next one.
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        let mut table = RuleTable { rules: Vec::new() };
        table.register_all_rules();
        debug!("compiled {} conversion rules", table.rules.len());
        table
    }

    /// All rules, in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    fn register_all_rules(&mut self) {
        self.register_temperature_rules();
        self.register_distance_rules();
        self.register_maritime_rules();
        self.register_survey_rules();
        self.register_area_rules();
        self.register_volume_rules();
        self.register_mass_rules();
    }

    fn register_temperature_rules(&mut self) {
        self.register(Rule::new("F|fahrenheit|fahrenheits|degrees F|degrees fahrenheit", BaseUnit::Celsius, Conversion::Formula(fahrenheit_to_celsius), "temperature").unwrap());
    }

    fn register_distance_rules(&mut self) {
        self.register(Rule::new("thou", BaseUnit::Meter, Conversion::Factor(25.4e-6), "distance").unwrap());
        self.register(Rule::new("inch(?:es|e)?", BaseUnit::Meter, Conversion::Factor(25.4e-3), "distance").unwrap());
        self.register(Rule::new("feets?|foot", BaseUnit::Meter, Conversion::Factor(0.3048), "distance").unwrap());
        self.register(Rule::new("yards?|yd", BaseUnit::Meter, Conversion::Factor(0.9144), "distance").unwrap());
        self.register(Rule::new("chains?", BaseUnit::Meter, Conversion::Factor(20.1168), "distance").unwrap());
        self.register(Rule::new("furlongs?|fur", BaseUnit::Meter, Conversion::Factor(201.168), "distance").unwrap());
        self.register(Rule::new("miles?", BaseUnit::Meter, Conversion::Factor(1609.344), "distance").unwrap());
        self.register(Rule::new("leagues?", BaseUnit::Meter, Conversion::Factor(4828.032), "distance").unwrap());
    }

    fn register_maritime_rules(&mut self) {
        self.register(Rule::new("fathoms?|ftm", BaseUnit::Meter, Conversion::Factor(1.853184), "maritime").unwrap());
        self.register(Rule::new("cables?", BaseUnit::Meter, Conversion::Factor(185.3184), "maritime").unwrap());
        self.register(Rule::new(r"nautical\smiles?", BaseUnit::Meter, Conversion::Factor(1853.184), "maritime").unwrap());
    }

    // Gunter's survey units; chain already lives in the distance family.
    fn register_survey_rules(&mut self) {
        self.register(Rule::new("links?", BaseUnit::Meter, Conversion::Factor(0.201168), "survey").unwrap());
        self.register(Rule::new("rods?", BaseUnit::Meter, Conversion::Factor(5.0292), "survey").unwrap());
    }

    fn register_area_rules(&mut self) {
        self.register(Rule::new("acres?", BaseUnit::SquareMeter, Conversion::Factor(4046.8564224), "area").unwrap());
    }

    fn register_volume_rules(&mut self) {
        self.register(Rule::new("fluid ounces?|fl oz", BaseUnit::Liter, Conversion::Factor(28.4130625e-3), "volume").unwrap());
        self.register(Rule::new("gills?", BaseUnit::Liter, Conversion::Factor(142.0653125e-3), "volume").unwrap());
        self.register(Rule::new("pints?|pt", BaseUnit::Liter, Conversion::Factor(0.56826125), "volume").unwrap());
        self.register(Rule::new("quarts?", BaseUnit::Liter, Conversion::Factor(1.1365225), "volume").unwrap());
        self.register(Rule::new("gal(?:lons?)?", BaseUnit::Liter, Conversion::Factor(4.54609), "volume").unwrap());
    }

    fn register_mass_rules(&mut self) {
        self.register(Rule::new("grains?", BaseUnit::Gram, Conversion::Factor(64.79891e-3), "mass").unwrap());
        self.register(Rule::new("drachms?", BaseUnit::Gram, Conversion::Factor(1.7718451953125), "mass").unwrap());
        self.register(Rule::new("ounces?|oz", BaseUnit::Gram, Conversion::Factor(28.349523125), "mass").unwrap());
        // A bare "pound" can just as well be currency, so only the lb/lbs
        // abbreviation is recognized. No ton rule either: a ton may be
        // metric or imperial.
        self.register(Rule::new("lbs?", BaseUnit::Gram, Conversion::Factor(453.59), "mass").unwrap());
        self.register(Rule::new("stones?", BaseUnit::Gram, Conversion::Factor(6350.29318), "mass").unwrap());
        self.register(Rule::new("quarters?", BaseUnit::Gram, Conversion::Factor(12700.58636), "mass").unwrap());
        self.register(Rule::new("hundredweights?", BaseUnit::Gram, Conversion::Factor(50802.34544), "mass").unwrap());
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}
