//! Driving a [`Calculator`] from a keyboard or from a key string.
use crate::display;
use crate::engine::{Calculator, Command};
use crate::errors::SessionError;
use crate::keyboard::{KeyInput, KeyboardInputProvider};
use crate::terminal;
use std::io::Write;
use std::ops::ControlFlow;

/// Runs the interactive keypad until a quit key, redrawing the display after every command.
/// Returns the final calculator state.
///
/// The display is closed on every exit, a failed read leaves the cursor below it too.
///
/// # Errors
/// - reading a key or writing the display failed
pub fn run_interactive(
    keyboard: &mut impl KeyboardInputProvider,
    stdout: &mut impl Write,
) -> Result<Calculator, SessionError> {
    let mut calc = Calculator::new();
    terminal::open_display(stdout)?;
    let outcome = read_keys(keyboard, &mut calc, stdout);
    let closed = terminal::close_display(stdout);
    if let Err(e) = &outcome {
        tracing::error!("interactive session failed: {e}");
    }
    outcome?;
    closed?;
    tracing::info!(result = calc.current_value(), "session ended");
    Ok(calc)
}

fn read_keys(
    keyboard: &mut impl KeyboardInputProvider,
    calc: &mut Calculator,
    stdout: &mut impl Write,
) -> Result<(), SessionError> {
    terminal::draw(stdout, &display::render(calc))?;
    while let ControlFlow::Continue(()) = handle_key(keyboard.next_key()?, calc, stdout)? {}
    Ok(())
}

fn handle_key(
    key: KeyInput,
    calc: &mut Calculator,
    stdout: &mut impl Write,
) -> Result<ControlFlow<()>, SessionError> {
    match key {
        KeyInput::Quit => return Ok(ControlFlow::Break(())),
        KeyInput::Unbound => tracing::debug!("ignoring unbound key"),
        KeyInput::Command(command) => {
            calc.apply(command);
            terminal::draw(stdout, &display::render(calc))?;
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Feeds every character of `keys` to a fresh calculator, whitespace is skipped.
///
/// # Errors
/// - a key has no binding, unless `skip_unknown` is set
pub fn evaluate_keys(keys: &str, skip_unknown: bool) -> Result<Calculator, SessionError> {
    let mut calc = Calculator::new();
    for (position, key) in keys.chars().enumerate() {
        if key.is_whitespace() {
            continue;
        }
        match Command::try_from(key) {
            Ok(command) => calc.apply(command),
            Err(e) if skip_unknown => tracing::warn!(position, "skipping key: {e}"),
            Err(source) => return Err(SessionError::InvalidKey { position, source }),
        }
    }
    Ok(calc)
}
