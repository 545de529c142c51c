use displaydoc::Display;
use std::error::Error;
use std::io;

/// Errors decoding an input into a calculator command.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown action kind {0:?}
    UnknownAction(String),
    /// Action {kind:?} needs a payload
    MissingPayload { kind: &'static str },
    /// Invalid digit {0:?}, expected a single character 0-9
    InvalidDigit(String),
    /// Unknown operator {0:?}, expected one of + - * /
    UnknownOperator(String),
    /// No calculator command is bound to key {0:?}
    UnrecognizedKey(char),
}
impl Error for CommandError {}

/// Errors running a calculator session.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Error during reading keys from Stdin or writing the display to Stdout: {0}
    IOInputOutputError(String),
    /// Invalid key at position {position}: {source}
    InvalidKey {
        position: usize,
        source: CommandError,
    },
}
impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IOInputOutputError(_) => None,
            Self::InvalidKey { source, .. } => Some(source),
        }
    }
}
impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::IOInputOutputError(e.to_string())
    }
}
