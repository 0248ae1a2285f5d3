//! Quantity literal parsing
//!
//! The matcher captures one literal in one of three surface forms: plain or
//! comma-grouped decimal (`2,204.6`), leading-dot decimal (`.34`), or fraction
//! (`1 1/2`, `3/4`). This module turns the captured text into a finite f64.

/// Parse a captured numeric literal.
///
/// Grouping commas are stripped first; fractions evaluate to
/// `whole + numerator / denominator`. Returns `None` for anything that does
/// not describe a finite number (a zero denominator, an overflowing digit
/// string), so the caller can skip the match instead of annotating garbage.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let value = if cleaned.contains('/') {
        parse_fraction(&cleaned)?
    } else {
        cleaned.parse::<f64>().ok()?
    };
    value.is_finite().then_some(value)
}

fn parse_fraction(text: &str) -> Option<f64> {
    // The grammar separates the whole part with any single whitespace char.
    let (whole, fraction) = match text.split_once(char::is_whitespace) {
        Some((whole, fraction)) => (whole.parse::<f64>().ok()?, fraction),
        None => (0.0, text),
    };
    let (numerator, denominator) = fraction.split_once('/')?;
    let numerator = numerator.parse::<f64>().ok()?;
    let denominator = denominator.parse::<f64>().ok()?;
    Some(whole + numerator / denominator)
}
