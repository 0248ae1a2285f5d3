//! Metrify - metric annotations for imperial quantities
//!
//! Scans text for quantities expressed in imperial units ("2 miles",
//! "1 1/2 inch", "32 F") and appends a bracketed metric equivalent after each
//! one:
//!
//! - "Drive 2 miles north" becomes "Drive 2 miles [3.22 km] north"
//! - text outside recognized quantities is never altered, only extended
//! - the transform is idempotent: feeding its output back in changes nothing
//!
//! [`transform`] uses the shared built-in rule table; [`Metrify`] owns a
//! table explicitly, for callers that want to hold one.

mod engine;
mod literal;
mod prefix;

pub use literal::parse_quantity;
pub use metrify_units::{BaseUnit, Conversion, Rule, RuleError, RuleInfo, RuleTable, RULES};
pub use prefix::Prefix;

/// The annotation engine, bound to one rule table.
pub struct Metrify {
    table: RuleTable,
}

impl Metrify {
    /// Build an engine around a compiled rule table.
    pub fn new(table: RuleTable) -> Self {
        Metrify { table }
    }

    /// Annotate every recognized imperial quantity in the text.
    ///
    /// Never fails; text without matches comes back unchanged.
    pub fn transform(&self, text: &str) -> String {
        engine::annotate(&self.table, text)
    }
}

impl Default for Metrify {
    fn default() -> Self {
        Metrify::new(RuleTable::new())
    }
}

/// Annotate using the shared built-in rule table.
pub fn transform(text: &str) -> String {
    engine::annotate(&RULES, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket_count(text: &str) -> usize {
        text.matches('[').count()
    }

    #[test]
    fn test_simple_distance() {
        assert_eq!(transform("Drive 2 miles north"), "Drive 2 miles [3.22 km] north");
    }

    #[test]
    fn test_annotation_at_start_of_text() {
        assert_eq!(transform("3 miles to go"), "3 miles [4.83 km] to go");
    }

    #[test]
    fn test_annotation_at_end_of_text() {
        assert_eq!(transform("It is 6 feet"), "It is 6 feet [1.83 m]");
    }

    #[test]
    fn test_fraction_literal() {
        assert_eq!(transform("a 1 1/2 inch pipe"), "a 1 1/2 inch [3.81 cm] pipe");
    }

    #[test]
    fn test_tab_separated_mixed_fraction() {
        assert_eq!(transform("a 1\t1/2 inch pipe"), "a 1\t1/2 inch [3.81 cm] pipe");
    }

    #[test]
    fn test_leading_dot_literal() {
        assert_eq!(transform("ran .5 miles"), "ran .5 miles [804.67 m]");
    }

    #[test]
    fn test_comma_grouped_literal() {
        assert_eq!(transform("a 2,204.6 lbs load"), "a 2,204.6 lbs [999.98 kg] load");
    }

    #[test]
    fn test_temperature_is_nonlinear() {
        assert_eq!(transform("It was 32 F outside"), "It was 32 F [0.00 ℃] outside");
    }

    #[test]
    fn test_temperature_spelled_out() {
        assert_eq!(
            transform("water boils at 212 degrees fahrenheit"),
            "water boils at 212 degrees fahrenheit [100.00 ℃]"
        );
    }

    #[test]
    fn test_temperature_below_freezing() {
        assert_eq!(transform("a chilly 0 F morning"), "a chilly 0 F [-17.78 ℃] morning");
    }

    #[test]
    fn test_small_values_keep_their_digits() {
        assert_eq!(
            transform("measuring 0.004 inches"),
            "measuring 0.004 inches [101.60 µm]"
        );
    }

    #[test]
    fn test_kilometer_prefix() {
        assert_eq!(
            transform("The bridge spans 8,200 feet"),
            "The bridge spans 8,200 feet [2.50 km]"
        );
    }

    #[test]
    fn test_megameter_prefix() {
        assert_eq!(transform("flew 1,250 miles"), "flew 1,250 miles [2.01 Mm]");
    }

    #[test]
    fn test_mass_below_one_gram_stays_bare() {
        assert_eq!(transform("add 5 grains of salt"), "add 5 grains [0.32 g] of salt");
    }

    #[test]
    fn test_volume_below_one_liter_takes_centi() {
        assert_eq!(transform("pour 1/4 pint slowly"), "pour 1/4 pint [14.21 cL] slowly");
    }

    #[test]
    fn test_area_stays_on_the_bare_base() {
        assert_eq!(transform("a 5 acres plot"), "a 5 acres [20234.28 m²] plot");
    }

    #[test]
    fn test_multiple_matches_of_one_rule() {
        assert_eq!(
            transform("5 miles then 3 miles"),
            "5 miles [8.05 km] then 3 miles [4.83 km]"
        );
    }

    #[test]
    fn test_mixed_families_in_one_text() {
        assert_eq!(
            transform("6 feet and 32 F"),
            "6 feet [1.83 m] and 32 F [0.00 ℃]"
        );
    }

    #[test]
    fn test_idempotence() {
        let text = "Drive 5 miles at 90 F, then wade 2 fathoms deep with 3 gallons \
                    of water and 45 lbs of gear over 1 1/2 inch gravel for 2,204.6 lbs \
                    per 5 acres.";
        let once = transform(text);
        let twice = transform(&once);
        assert_eq!(twice, once, "second pass must change nothing");
        assert_eq!(bracket_count(&once), 8, "got: {}", once);
    }

    #[test]
    fn test_no_double_annotation() {
        let once = transform("3 miles and 2 gallons");
        assert_eq!(bracket_count(&once), 2);
        assert_eq!(bracket_count(&transform(&once)), 2);
    }

    #[test]
    fn test_only_extends_the_text() {
        let text = "alpha 3 miles omega";
        let annotated = transform(text);
        assert_eq!(annotated, "alpha 3 miles [4.83 km] omega");
        assert_eq!(annotated.replace(" [4.83 km]", ""), text);
    }

    #[test]
    fn test_unmatched_text_passes_through() {
        assert_eq!(transform("no imperial quantities in sight"), "no imperial quantities in sight");
        assert_eq!(transform(""), "");
    }

    #[test]
    fn test_bare_pound_is_ignored() {
        assert_eq!(transform("It costs 5 pounds"), "It costs 5 pounds");
    }

    #[test]
    fn test_existing_bracket_suppresses_annotation() {
        assert_eq!(transform("read 5 miles [sic] onward"), "read 5 miles [sic] onward");
    }

    #[test]
    fn test_zero_denominator_skips_only_that_match() {
        assert_eq!(
            transform("cut 1/0 inches then 2 inches"),
            "cut 1/0 inches then 2 inches [5.08 cm]"
        );
    }

    #[test]
    fn test_default_engine_matches_free_function() {
        let engine = Metrify::default();
        let text = "run 2 miles now";
        assert_eq!(engine.transform(text), transform(text));
    }
}
