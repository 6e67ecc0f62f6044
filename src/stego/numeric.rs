//! Numeric literals: matching, 3-decimal normalization, and digit planting.
//!
//! Each literal found in a carrier attribute is one slot. A slot carries its
//! bit in the last character of the literal's 3-decimal form, so `10.5`
//! becomes `10.500` or `10.501`.
//!
//! Normalization reproduces `Number.prototype.toFixed(3)` from ECMAScript,
//! which is what files produced by other encoders of this scheme rely on:
//! exact decimal value of the double, ties rounded away from zero, and `-0`
//! printed without a sign.

use std::sync::LazyLock;

use regex::Regex;

/// Path data (`d`): a literal decimal point is required, bare integers such
/// as command coordinates `M10 20` are not slots.
static PATH_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]*\.[0-9]+(?:[eE][+-]?[0-9]+)?").unwrap());

/// Every other carrier attribute: the decimal point is optional.
static LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]*\.?[0-9]+(?:[eE][+-]?[0-9]+)?").unwrap());

/// Literal pattern used for `attribute`.
#[inline]
pub fn pattern_for(attribute: &str) -> &'static Regex {
    if attribute == "d" {
        &*PATH_LITERAL
    } else {
        &*LITERAL
    }
}

/// Number of slots in `value` of `attribute`.
pub fn slot_count(attribute: &str, value: &str) -> usize {
    pattern_for(attribute).find_iter(value).count()
}

/// Format `value` with exactly three decimals, `toFixed(3)` style.
pub fn to_fixed3(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        return format!("{sign}Infinity");
    }

    // A tie at the fourth decimal needs an exact value of k/16 with k odd.
    // `{:.3}` would round it to even, toFixed rounds it up.
    let sixteenths = magnitude * 16.0;
    let digits = if sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0 {
        let thousandths = (sixteenths as u128 * 125 + 1) / 2;
        format!("{}.{:03}", thousandths / 1000, thousandths % 1000)
    } else {
        format!("{magnitude:.3}")
    };

    format!("{sign}{digits}")
}

/// Parse a matched literal. The patterns only match valid floats.
#[inline]
fn parse_literal(literal: &str) -> f64 {
    literal.parse().unwrap_or_default()
}

/// Normalize `literal` and overwrite its last digit with `bit`.
pub fn plant_bit(literal: &str, bit: char) -> String {
    let mut fixed = to_fixed3(parse_literal(literal));
    fixed.pop();
    fixed.push(bit);
    fixed
}

/// Digit a slot carries: the last character of its normalized form.
pub fn carried_digit(literal: &str) -> char {
    to_fixed3(parse_literal(literal))
        .chars()
        .last()
        .unwrap_or('0')
}
