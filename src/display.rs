//! Formatting of calculator state for a two-line display.
//!
//! The equation line shows the raw operands (`12. +`), the result line a formatted number
//! (`1,234.5`).
use crate::engine::{Calculator, ERROR_TEXT};
use crate::numbers::{parse_operand, to_numeral};

/// Maximum fraction digits on the result line.
const MAX_FRACTION_DIGITS: usize = 8;
const GROUP_SEPARATOR: char = ',';

/// Text of both display lines.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Screen {
    pub equation: String,
    pub result: String,
}

#[must_use]
pub fn render(calc: &Calculator) -> Screen {
    Screen {
        equation: equation_line(calc),
        result: format_display_value(calc.current_value()),
    }
}

/// Left operand, operator and, unless awaiting the right operand, the current entry.
#[must_use]
pub fn equation_line(calc: &Calculator) -> String {
    let operator = calc.operator().map(|op| op.to_string());
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    parts.extend(calc.previous_value());
    parts.extend(operator.as_deref());
    if !calc.awaiting_next_value() {
        parts.push(calc.current_value());
    }
    parts.join(" ")
}

/// Formats a value for the result line.
///
/// Integers are shown in plain canonical form, other numbers grouped by thousands and rounded
/// to at most 8 fraction digits. Text that is no number is shown as is.
#[must_use]
pub fn format_display_value(value: &str) -> String {
    if value.is_empty() {
        return String::from("0");
    }
    if value == ERROR_TEXT {
        return value.to_owned();
    }
    let Some(number) = parse_operand(value) else {
        return value.to_owned();
    };
    if number.fract() == 0.0 {
        return to_numeral(number);
    }
    let rounded = format!("{number:.precision$}", precision = MAX_FRACTION_DIGITS);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    let (sign, unsigned) = trimmed
        .strip_prefix('-')
        .map_or(("", trimmed), |rest| ("-", rest));
    let (integer, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));
    let mut formatted = String::with_capacity(trimmed.len() + integer.len() / 3);
    formatted.push_str(sign);
    formatted.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
