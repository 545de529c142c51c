/// Parses keypad text into a finite number.
///
/// Accepts in-progress forms like `"12."` or `"-0."`. Returns `None` for anything that is not a
/// finite numeral, including the spellings of infinity and NaN the standard parser would accept.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Canonical numeral text for a computed value.
///
/// Integers render without a fraction part, everything else with the shortest digits that
/// round-trip. Negative zero renders as `"0"`.
///
/// Never produces exponent form: `1e21` renders as 22 digits, `1e-7` as `"0.0000001"`. Entry
/// editing and [`parse_operand`] only know positional numerals.
pub fn to_numeral(value: f64) -> String {
    debug_assert!(value.is_finite(), "no numeral for {value:?}");
    if value == 0.0 {
        return String::from("0");
    }
    // `Display` for f64 is always positional, unlike `{:e}` or `{:?}` on large values
    format!("{value}")
}
