//! The text transform loop
//!
//! Each rule scans the current text with an explicit local cursor, splices an
//! annotation after every fresh match, and advances the cursor past its own
//! insertion. A rule runs to completion before the next rule starts, on the
//! already-updated text. Values are converted and prefix-scaled before any
//! rounding; rounding earlier collapses small magnitudes (0.004 inches is
//! 101.60 µm, not 0.00 m).

use metrify_units::{BaseUnit, Rule, RuleTable};
use tracing::{debug, trace};

use crate::literal::parse_quantity;
use crate::prefix::Prefix;

/// Run every rule in table order over the text.
pub(crate) fn annotate(table: &RuleTable, text: &str) -> String {
    let mut out = text.to_string();
    let mut total = 0;
    for rule in table.rules() {
        let (next, count) = apply_rule(rule, out);
        out = next;
        total += count;
    }
    if total > 0 {
        debug!("annotated {} quantities", total);
    }
    out
}

/// Annotate every fresh match of one rule, returning the new text and the
/// number of annotations inserted.
fn apply_rule(rule: &Rule, text: String) -> (String, usize) {
    let mut text = text;
    let mut cursor = 0;
    let mut count = 0;
    loop {
        let Some(caps) = rule.matcher.captures_at(&text, cursor) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        let end = whole.end();
        // An annotation already trails this quantity; skip it, never nest.
        if already_annotated(&text[end..]) {
            cursor = end;
            continue;
        }
        let Some(value) = caps.get(1).and_then(|m| parse_quantity(m.as_str())) else {
            cursor = end;
            continue;
        };
        let converted = rule.convert(value);
        let prefix = Prefix::select(converted, rule.target);
        let scaled = converted / prefix.divisor();
        if !scaled.is_finite() {
            cursor = end;
            continue;
        }
        let annotation = format_annotation(scaled, prefix, rule.target);
        trace!("'{}' ->{}", whole.as_str().trim_start(), annotation);
        text = splice(&text, end, &annotation);
        cursor = end + annotation.len();
        count += 1;
    }
    (text, count)
}

/// True when the text right after a match already carries an annotation.
fn already_annotated(tail: &str) -> bool {
    let mut chars = tail.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(ws), Some('[')) if ws.is_whitespace()
    )
}

/// Round to exactly 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_annotation(scaled: f64, prefix: Prefix, base: BaseUnit) -> String {
    format!(" [{:.2} {}{}]", round2(scaled), prefix.symbol(), base.symbol())
}

/// Insert into a text at a byte offset, producing a new string.
fn splice(text: &str, at: usize, insertion: &str) -> String {
    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..at]);
    out.push_str(insertion);
    out.push_str(&text[at..]);
    out
}
