//! The calculator engine: a running-total accumulator driven one [`Command`] at a time.
//!
//! Operators are applied left to right as they arrive, `2 + 3 * 4 =` gives `20`.
//! Entries are kept as text and only parsed when a computation commits.
//!
//! Division by zero (or an overflowing result) puts the engine into [`Phase::Errored`].
//! That state is sticky: operators, percent, sign toggle and equals do nothing until a digit
//! or decimal point starts a fresh operand, or the calculator is cleared.
//! A failure while chaining operators also stores the sentinel as left operand. It survives
//! the fresh operand, so the next commit of that chain fails again: `8 / 0 + 5 + 3 =` is an
//! error.
//!
//! | Phase                          | digit / `.`                 | operator                    | equals               |
//! |--------------------------------|-----------------------------|-----------------------------|----------------------|
//! | `Idle`                         | `HasOperand`                | `OperatorPending`, awaiting | -                    |
//! | `HasOperand`                   | append                      | `OperatorPending`, awaiting | -                    |
//! | `ErrorLeft`                    | append                      | `OperatorPending`, awaiting | -                    |
//! | `OperatorPending`, awaiting    | start right operand         | replace operator            | -                    |
//! | `OperatorPending`, right typed | append                      | commit, stay pending        | commit, `HasOperand` |
//! | `Errored`                      | `HasOperand` or `ErrorLeft` | -                           | -                    |
//!
//! Clear always returns to `Idle`.
pub mod command;
pub mod compute;
#[cfg(test)]
pub(crate) mod test_helpers;

pub use command::{Command, Digit, Operator};
pub use compute::{ERROR_TEXT, Value, compute};

use crate::numbers::{parse_operand, to_numeral};

const ZERO: &str = "0";
const DECIMAL_POINT: char = '.';
const MINUS: char = '-';

/// Right-hand side of a pending operation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RightOperand {
    /// No digit typed since the operator was chosen. `shown` starts as a copy of the left
    /// operand and is replaced by the next digit or decimal point.
    Awaiting { shown: String },
    /// Right operand being typed.
    Typed(String),
}

/// State of the calculator.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    /// Nothing entered, shows `0`.
    #[default]
    Idle,
    /// An operand typed or a result computed, nothing pending.
    HasOperand { entry: String },
    /// An operand typed after a failed chain, the sentinel is still stored as left operand.
    ErrorLeft { entry: String },
    /// Left operand and operator stored.
    OperatorPending {
        left: Value,
        operator: Operator,
        right: RightOperand,
    },
    /// Last computation failed, shows [`ERROR_TEXT`]. `chained` is set when the failure
    /// happened on an operator, which stores the sentinel as left operand too.
    Errored { chained: bool },
}

/// A calculator instance. Every command mutates it in place and never fails.
///
/// ```
/// use keypad_calc::engine::{Calculator, Command, Digit, Operator};
/// let mut calc = Calculator::new();
/// calc.enter_digit(Digit::Five);
/// calc.choose_operator(Operator::Add);
/// calc.enter_digit(Digit::Three);
/// calc.apply(Command::Equals);
/// assert_eq!(calc.current_value(), "8");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Calculator {
    phase: Phase,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Entry being typed, last result or [`ERROR_TEXT`]. Never empty.
    #[must_use]
    pub fn current_value(&self) -> &str {
        match &self.phase {
            Phase::Idle => ZERO,
            Phase::HasOperand { entry }
            | Phase::ErrorLeft { entry }
            | Phase::OperatorPending {
                right: RightOperand::Typed(entry) | RightOperand::Awaiting { shown: entry },
                ..
            } => entry.as_str(),
            Phase::Errored { .. } => ERROR_TEXT,
        }
    }
    /// Stored left operand, [`ERROR_TEXT`] after a failed chain.
    #[must_use]
    pub fn previous_value(&self) -> Option<&str> {
        match &self.phase {
            Phase::OperatorPending { left, .. } => Some(left.as_str()),
            Phase::ErrorLeft { .. } | Phase::Errored { chained: true } => Some(ERROR_TEXT),
            Phase::Idle | Phase::HasOperand { .. } | Phase::Errored { chained: false } => None,
        }
    }
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match &self.phase {
            Phase::OperatorPending { operator, .. } => Some(*operator),
            _ => None,
        }
    }
    /// True after an operator was chosen and before the right operand was started.
    #[must_use]
    pub const fn awaiting_next_value(&self) -> bool {
        matches!(
            self.phase,
            Phase::OperatorPending {
                right: RightOperand::Awaiting { .. },
                ..
            }
        )
    }
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.phase, Phase::Errored { .. })
    }

    /// Dispatches a command to its operation.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Digit(d) => self.enter_digit(d),
            Command::Decimal => self.enter_decimal(),
            Command::Operator(op) => self.choose_operator(op),
            Command::Clear => self.clear(),
            Command::Percent => self.apply_percent(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Equals => self.equals(),
        }
        tracing::debug!(?command, phase = ?self.phase, "applied");
    }

    pub fn enter_digit(&mut self, digit: Digit) {
        let d = digit.as_char();
        self.edit_entry(|| d.to_string(), |entry| append_digit(entry, d));
    }

    /// Adds a decimal point; a second point in the same entry is ignored.
    pub fn enter_decimal(&mut self) {
        self.edit_entry(|| String::from("0."), append_decimal_point);
    }

    /// Starts a fresh entry where none is being typed, otherwise extends the typed one.
    fn edit_entry(
        &mut self,
        fresh: impl FnOnce() -> String,
        extend: impl FnOnce(String) -> String,
    ) {
        self.phase = match std::mem::take(&mut self.phase) {
            Phase::Idle | Phase::Errored { chained: false } => {
                Phase::HasOperand { entry: fresh() }
            }
            Phase::Errored { chained: true } => Phase::ErrorLeft { entry: fresh() },
            Phase::HasOperand { entry } => Phase::HasOperand {
                entry: extend(entry),
            },
            Phase::ErrorLeft { entry } => Phase::ErrorLeft {
                entry: extend(entry),
            },
            Phase::OperatorPending {
                left,
                operator,
                right,
            } => {
                let entry = match right {
                    RightOperand::Awaiting { .. } => fresh(),
                    RightOperand::Typed(entry) => extend(entry),
                };
                Phase::OperatorPending {
                    left,
                    operator,
                    right: RightOperand::Typed(entry),
                }
            }
        };
    }

    /// Stores the current value as left operand, replaces a just chosen operator, or commits
    /// the pending operation first when a right operand was typed.
    pub fn choose_operator(&mut self, next: Operator) {
        self.phase = match std::mem::take(&mut self.phase) {
            errored @ Phase::Errored { .. } => errored,
            Phase::OperatorPending {
                left,
                right: right @ RightOperand::Awaiting { .. },
                ..
            } => Phase::OperatorPending {
                left,
                operator: next,
                right,
            },
            Phase::Idle => pending(Value::numeral(ZERO), ZERO.to_owned(), next),
            Phase::HasOperand { entry } => pending(Value::numeral(entry.clone()), entry, next),
            // the stored sentinel stays, the typed entry is only shown
            Phase::ErrorLeft { entry } => pending(Value::Error, entry, next),
            Phase::OperatorPending {
                left,
                operator,
                right: RightOperand::Typed(entry),
            } => match commit(&left, operator, entry) {
                Value::Numeral(result) => pending(Value::numeral(result.clone()), result, next),
                Value::Error => Phase::Errored { chained: true },
            },
        };
    }

    /// Flips the sign of the shown text. Leaves `0` alone.
    pub fn toggle_sign(&mut self) {
        if let Some(text) = self.shown_mut()
            && text.as_str() != ZERO
        {
            if text.starts_with(MINUS) {
                text.remove(0);
            } else {
                text.insert(0, MINUS);
            }
        }
    }

    /// Divides the shown value by 100.
    pub fn apply_percent(&mut self) {
        if let Some(text) = self.shown_mut()
            && let Some(value) = parse_operand(text)
        {
            *text = to_numeral(value / 100.0);
        }
    }

    /// Commits the pending operation and ends the chain. Does nothing unless an operator is
    /// pending and its right operand was typed.
    pub fn equals(&mut self) {
        self.phase = match std::mem::take(&mut self.phase) {
            Phase::OperatorPending {
                left,
                operator,
                right: RightOperand::Typed(entry),
            } => match commit(&left, operator, entry) {
                Value::Numeral(result) => Phase::HasOperand { entry: result },
                Value::Error => Phase::Errored { chained: false },
            },
            unchanged => unchanged,
        };
    }

    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Text the sign toggle and percent operate on. `None` for `Idle` (shows `0`, which
    /// neither changes) and for `Errored`.
    fn shown_mut(&mut self) -> Option<&mut String> {
        match &mut self.phase {
            Phase::HasOperand { entry }
            | Phase::ErrorLeft { entry }
            | Phase::OperatorPending {
                right: RightOperand::Typed(entry) | RightOperand::Awaiting { shown: entry },
                ..
            } => Some(entry),
            Phase::Idle | Phase::Errored { .. } => None,
        }
    }
}

fn pending(left: Value, shown: String, operator: Operator) -> Phase {
    Phase::OperatorPending {
        left,
        operator,
        right: RightOperand::Awaiting { shown },
    }
}

fn commit(left: &Value, operator: Operator, right: String) -> Value {
    let result = compute(left, &Value::Numeral(right), operator);
    match &result {
        Value::Numeral(text) => tracing::info!(%operator, result = %text, "committed"),
        Value::Error => tracing::warn!(%operator, "computation failed, calculator in error state"),
    }
    result
}

fn append_digit(mut entry: String, d: char) -> String {
    if entry == ZERO {
        entry.clear();
    }
    entry.push(d);
    entry
}

fn append_decimal_point(mut entry: String) -> String {
    if !entry.contains(DECIMAL_POINT) {
        entry.push(DECIMAL_POINT);
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helpers::calculator_after;
    use googletest::prelude::*;
    use yare::parameterized;

    fn expect_initial_state(calc: &Calculator) {
        expect_that!(calc.current_value(), eq("0"));
        expect_that!(calc.previous_value(), none());
        expect_that!(calc.operator(), none());
        expect_that!(calc.awaiting_next_value(), eq(false));
        expect_that!(calc.phase(), eq(&Phase::Idle));
    }

    #[gtest]
    pub fn test_new_calculator() {
        expect_initial_state(&Calculator::new());
    }

    #[parameterized(
        single = { "5", "5" },
        leading_zero_replaced = { "05", "5" },
        zeros_collapse = { "007", "7" },
        zero_stays_zero = { "00", "0" },
        inner_zeros_kept = { "1005", "1005" },
        fraction = { "0.05", "0.05" },
        point_first = { ".5", "0.5" },
        second_point_ignored = { "1..2.3", "1.23" },
        trailing_point_kept = { "12.", "12." },
    )]
    fn test_entry(keys: &str, expected: &str) {
        assert_that!(calculator_after(keys).current_value(), eq(expected));
    }

    #[gtest]
    pub fn test_operator_stores_left_operand() {
        let calc = calculator_after("12+");
        expect_that!(calc.current_value(), eq("12"));
        expect_that!(calc.previous_value(), some(eq("12")));
        expect_that!(calc.operator(), some(eq(Operator::Add)));
        expect_that!(calc.awaiting_next_value(), eq(true));
    }
    #[gtest]
    pub fn test_operator_on_fresh_calculator_uses_zero() {
        let calc = calculator_after("-4=");
        expect_that!(calc.current_value(), eq("-4"));
    }
    #[gtest]
    pub fn test_digit_after_operator_starts_right_operand() {
        let calc = calculator_after("12+3");
        expect_that!(calc.current_value(), eq("3"));
        expect_that!(calc.previous_value(), some(eq("12")));
        expect_that!(calc.awaiting_next_value(), eq(false));
        let calc = calculator_after("12+.");
        expect_that!(calc.current_value(), eq("0."));
    }
    #[gtest]
    pub fn test_chained_operators_commit() {
        let calc = calculator_after("5+3+");
        expect_that!(calc.previous_value(), some(eq("8")));
        expect_that!(calc.current_value(), eq("8"));
        expect_that!(calc.operator(), some(eq(Operator::Add)));
        expect_that!(calc.awaiting_next_value(), eq(true));

        let calc = calculator_after("5+3+2=");
        expect_that!(calc.current_value(), eq("10"));
        expect_that!(calc.previous_value(), none());
        expect_that!(calc.operator(), none());
        expect_that!(calc.awaiting_next_value(), eq(false));
    }
    #[gtest]
    pub fn test_no_precedence() {
        expect_that!(calculator_after("2+3*4=").current_value(), eq("20"));
        expect_that!(calculator_after("10-4/3=").current_value(), eq("2"));
    }
    #[gtest]
    pub fn test_consecutive_operators_keep_last() {
        let calc = calculator_after("5+*");
        expect_that!(calc.operator(), some(eq(Operator::Multiply)));
        expect_that!(calc.previous_value(), some(eq("5")));
        expect_that!(calc.current_value(), eq("5"));
        expect_that!(calculator_after("5+*3=").current_value(), eq("15"));
    }
    #[gtest]
    pub fn test_equals_without_operator_is_noop() {
        let before = calculator_after("42");
        let mut after = before.clone();
        after.equals();
        expect_that!(after, eq(&before));
        let mut fresh = Calculator::new();
        fresh.equals();
        expect_initial_state(&fresh);
    }
    #[gtest]
    pub fn test_equals_while_awaiting_is_noop() {
        let before = calculator_after("7*");
        let mut after = before.clone();
        after.equals();
        expect_that!(after, eq(&before));
    }
    #[gtest]
    pub fn test_digit_after_equals_appends_to_result() {
        let calc = calculator_after("2+3=7");
        expect_that!(calc.current_value(), eq("57"));
    }
    #[gtest]
    pub fn test_toggle_sign() {
        let mut calc = calculator_after("3.5");
        calc.toggle_sign();
        expect_that!(calc.current_value(), eq("-3.5"));
        calc.toggle_sign();
        expect_that!(calc.current_value(), eq("3.5"));

        let mut zero = Calculator::new();
        zero.toggle_sign();
        expect_initial_state(&zero);
        let mut typed_zero = calculator_after("0");
        typed_zero.toggle_sign();
        expect_that!(typed_zero.current_value(), eq("0"));

        expect_that!(calculator_after("0.n").current_value(), eq("-0."));
    }
    #[gtest]
    pub fn test_toggle_sign_while_awaiting_changes_shown_value_only() {
        let calc = calculator_after("5+n");
        expect_that!(calc.current_value(), eq("-5"));
        expect_that!(calc.previous_value(), some(eq("5")));
        expect_that!(calc.awaiting_next_value(), eq(true));
        expect_that!(calculator_after("5+n2=").current_value(), eq("7"));
    }
    #[gtest]
    pub fn test_percent() {
        expect_that!(calculator_after("50%").current_value(), eq("0.5"));
        expect_that!(calculator_after("12.%").current_value(), eq("0.12"));
        expect_that!(calculator_after("200+10%=").current_value(), eq("200.1"));
        expect_initial_state(&calculator_after("%"));
    }
    #[gtest]
    pub fn test_clear_from_any_state() {
        for keys in ["", "123.4", "9-", "9-8", "9-8=", "1/0", "1/0+", "1/0+5", "1/0+5+", "1/05", "5+n"] {
            let mut calc = calculator_after(keys);
            calc.clear();
            expect_initial_state(&calc);
        }
    }

    #[gtest]
    pub fn test_division_by_zero_errors() {
        let calc = calculator_after("1/0=");
        expect_that!(calc.is_error(), eq(true));
        expect_that!(calc.current_value(), eq(ERROR_TEXT));
        expect_that!(calc.previous_value(), none());
        expect_that!(calc.operator(), none());
        expect_that!(calc.awaiting_next_value(), eq(false));
    }
    #[gtest]
    pub fn test_chained_division_by_zero_stops_chain() {
        let calc = calculator_after("8/0+");
        expect_that!(calc.is_error(), eq(true));
        expect_that!(calc.current_value(), eq(ERROR_TEXT));
        expect_that!(calc.previous_value(), some(eq(ERROR_TEXT)));
        expect_that!(calc.operator(), none());
        expect_that!(calc.awaiting_next_value(), eq(false));
        expect_that!(
            calculator_after("8/0+*%n=").phase(),
            eq(&Phase::Errored { chained: true })
        );
    }
    #[gtest]
    pub fn test_operand_after_failed_chain_keeps_error_left() {
        let calc = calculator_after("8/0+5");
        expect_that!(calc.is_error(), eq(false));
        expect_that!(calc.current_value(), eq("5"));
        expect_that!(calc.previous_value(), some(eq(ERROR_TEXT)));
        expect_that!(calc.operator(), none());
        expect_that!(calculator_after("8/0+.5").current_value(), eq("0.5"));

        let calc = calculator_after("8/0+5+");
        expect_that!(calc.previous_value(), some(eq(ERROR_TEXT)));
        expect_that!(calc.operator(), some(eq(Operator::Add)));
        expect_that!(calc.current_value(), eq("5"));
        expect_that!(calc.awaiting_next_value(), eq(true));

        expect_that!(calculator_after("8/0+5=").current_value(), eq("5"));
        expect_that!(calculator_after("8/0+5+3=").current_value(), eq(ERROR_TEXT));
        expect_that!(calculator_after("8/0+5+3+").previous_value(), some(eq(ERROR_TEXT)));
    }
    #[parameterized(
        operator = { "1/0=+" },
        equals = { "1/0==" },
        percent = { "1/0=%" },
        toggle_sign = { "1/0=n" },
        everything = { "1/0=*%n=" },
    )]
    fn test_error_is_sticky(keys: &str) {
        let calc = calculator_after(keys);
        assert_that!(calc.phase(), eq(&Phase::Errored { chained: false }));
    }
    #[gtest]
    pub fn test_digit_and_decimal_leave_error() {
        let calc = calculator_after("1/0=4");
        expect_that!(calc.current_value(), eq("4"));
        expect_that!(calc.previous_value(), none());
        expect_that!(calc.awaiting_next_value(), eq(false));
        expect_that!(calculator_after("1/0=.").current_value(), eq("0."));
        expect_that!(calculator_after("1/0=4*2=").current_value(), eq("8"));
        expect_that!(calculator_after("1/0+4*2=").current_value(), eq(ERROR_TEXT));
        expect_that!(calculator_after("1/0+4c4*2=").current_value(), eq("8"));
    }
    #[gtest]
    pub fn test_apply_dispatches() {
        let mut calc = Calculator::new();
        for command in [
            Command::Digit(Digit::Nine),
            Command::Operator(Operator::Subtract),
            Command::Digit(Digit::Four),
            Command::Decimal,
            Command::Digit(Digit::Five),
            Command::Equals,
        ] {
            calc.apply(command);
        }
        expect_that!(calc.current_value(), eq("4.5"));
        calc.apply(Command::ToggleSign);
        expect_that!(calc.current_value(), eq("-4.5"));
        calc.apply(Command::Percent);
        expect_that!(calc.current_value(), eq("-0.045"));
        calc.apply(Command::Clear);
        expect_initial_state(&calc);
    }
}
