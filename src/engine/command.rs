//! Symbolic calculator inputs and their decoding from keys and action pairs.
use crate::errors::CommandError;
use std::fmt::{Display, Formatter};

/// A single keypad digit.
#[repr(u8)]
#[derive(enumn::N, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Digit {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}
impl Digit {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::n)
    }
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self as u8) as char
    }
}

/// Binary operators, discriminant is the ASCII symbol.
#[repr(u8)]
#[derive(enumn::N, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Operator {
    Add = b'+',
    Subtract = b'-',
    Multiply = b'*',
    Divide = b'/',
}
impl Operator {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok().and_then(Self::n)
    }
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }
}
impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One input to the calculator engine.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Clear,
    Percent,
    ToggleSign,
    Equals,
}

impl Command {
    /// Decodes an action kind with its optional payload, e.g. `("digit", Some("7"))` or
    /// `("toggle-sign", None)`. Payloads of kinds that take none are ignored.
    ///
    /// # Errors
    /// - unknown action kind
    /// - `digit` or `operator` without payload
    /// - payload that is not a single digit or operator symbol
    pub fn from_action(kind: &str, payload: Option<&str>) -> Result<Self, CommandError> {
        match kind {
            "digit" => {
                let text = payload.ok_or(CommandError::MissingPayload { kind: "digit" })?;
                single_char(text)
                    .and_then(Digit::from_char)
                    .map(Self::Digit)
                    .ok_or_else(|| CommandError::InvalidDigit(text.to_owned()))
            }
            "operator" => {
                let text = payload.ok_or(CommandError::MissingPayload { kind: "operator" })?;
                single_char(text)
                    .and_then(Operator::from_char)
                    .map(Self::Operator)
                    .ok_or_else(|| CommandError::UnknownOperator(text.to_owned()))
            }
            "decimal" => Ok(Self::Decimal),
            "clear" => Ok(Self::Clear),
            "percent" => Ok(Self::Percent),
            "toggle-sign" => Ok(Self::ToggleSign),
            "equals" => Ok(Self::Equals),
            other => Err(CommandError::UnknownAction(other.to_owned())),
        }
    }

    /// The action kind this command is decoded from.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Clear => "clear",
            Self::Percent => "percent",
            Self::ToggleSign => "toggle-sign",
            Self::Equals => "equals",
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Keyboard binding: digits, `.`, `+ - * /` (`x` also multiplies), `%`, `=`,
/// `c` clears and `n` or `_` toggles the sign.
impl TryFrom<char> for Command {
    type Error = CommandError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        if let Some(d) = Digit::from_char(key) {
            return Ok(Self::Digit(d));
        }
        if let Some(op) = Operator::from_char(key) {
            return Ok(Self::Operator(op));
        }
        match key {
            '.' | ',' => Ok(Self::Decimal),
            'x' | 'X' => Ok(Self::Operator(Operator::Multiply)),
            '%' => Ok(Self::Percent),
            '=' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            'n' | 'N' | '_' => Ok(Self::ToggleSign),
            other => Err(CommandError::UnrecognizedKey(other)),
        }
    }
}
