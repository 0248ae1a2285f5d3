//! Matcher construction
//!
//! Every rule shares one numeric-literal grammar; a rule's matcher is that
//! grammar composed with the rule's own unit pattern into a single
//! case-insensitive regex, compiled once when the rule is built.

use regex::Regex;

/// The shared numeric-literal grammar, one capture group around the literal.
///
/// Alternatives in priority order:
/// - comma-grouped integer or decimal (`1,250`, `2,204.6`, `17`)
/// - leading-dot decimal (`.34`)
/// - mixed or simple fraction (`1 1/2`, `3/4`)
pub const NUMBER_PATTERN: &str = r"\d+(?:,\d+)*(?:\.\d+)?|\.\d+|(?:\d+\s)?\d+/\d+";

/// Compose the shared numeric grammar with a unit pattern.
///
/// The result matches `<number> <unit>` where the quantity starts the text or
/// follows whitespace, the literal is captured as group 1, and the unit is
/// word-bounded on its trailing edge so it never matches inside a larger word.
/// The scan loop refuses matches that are already trailed by a bracketed
/// annotation; together the two keep the transform idempotent.
pub fn build_matcher(unit_pattern: &str) -> Result<Regex, regex::Error> {
    let pattern = format!(
        r"(?i)(?:^|\s)({number})\s*(?:{unit})\b",
        number = NUMBER_PATTERN,
        unit = unit_pattern,
    );
    Regex::new(&pattern)
}
