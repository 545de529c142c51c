use crate::engine::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, read};
use std::io;

/// Meaning of a key press for a calculator session.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeyInput {
    Command(Command),
    /// End the session (`q` or CTRL-C).
    Quit,
    /// Key without a binding.
    Unbound,
}

/// Providing Keyboard Input independent of an implementation.
pub trait KeyboardInputProvider {
    /// Blocks until the next key press.
    ///
    /// # Errors
    /// - reading from the input device failed
    fn next_key(&mut self) -> io::Result<KeyInput>;
}

/// Reads key presses from the terminal, expects raw mode to be enabled.
pub struct TerminalInputProvider {}
impl Default for TerminalInputProvider {
    fn default() -> Self {
        Self::new()
    }
}
impl TerminalInputProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}
impl KeyboardInputProvider for TerminalInputProvider {
    fn next_key(&mut self) -> io::Result<KeyInput> {
        loop {
            // releases, repeats, resizes and mouse events are skipped
            if let Some(event) = read()?.as_key_press_event() {
                return Ok(map_key_event(event));
            }
        }
    }
}

/// Maps a key press to its calculator meaning. Besides the character keys of
/// [`Command::try_from`], Enter is equals and Esc or Delete clear.
#[must_use]
pub fn map_key_event(event: KeyEvent) -> KeyInput {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Quit,
        KeyCode::Char('q' | 'Q') => KeyInput::Quit,
        KeyCode::Char(c) => Command::try_from(c).map_or_else(
            |e| {
                tracing::debug!("{e}");
                KeyInput::Unbound
            },
            KeyInput::Command,
        ),
        KeyCode::Enter => KeyInput::Command(Command::Equals),
        KeyCode::Esc | KeyCode::Delete => KeyInput::Command(Command::Clear),
        _ => KeyInput::Unbound,
    }
}
