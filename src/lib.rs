//! # Keypad Calculator.
//!
//! `keypad-calc` is a running-total calculator: operators apply left to right as they are
//! pressed, there is no precedence. Usage starts with a [`engine::Calculator`] fed one
//! [`engine::Command`] per key press.
//!
//!  # Example
//! ```
//! use keypad_calc::{display, session};
//! let calc = session::evaluate_keys("1234.5 * 2 + 0.25 =", false).unwrap();
//! assert_eq!(calc.current_value(), "2469.25");
//! assert_eq!(display::render(&calc).result, "2,469.25");
//! ```
//! # Errors
//! Engine operations never fail. Division by zero turns the calculator into an error state
//! that a digit, a decimal point or clear leaves again.

pub mod cli;
pub mod display;
pub mod engine;
pub mod errors;
pub mod keyboard;
pub mod logging;
pub(crate) mod numbers;
pub mod session;
pub mod terminal;
