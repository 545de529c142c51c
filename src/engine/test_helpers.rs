use crate::engine::{Calculator, Command};
use crate::keyboard::{KeyInput, KeyboardInputProvider, map_key_event};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use std::io::Write;

/// Calculator after pressing `keys` with the keyboard binding of [`Command`].
pub fn calculator_after(keys: &str) -> Calculator {
    let mut calc = Calculator::new();
    for key in keys.chars() {
        let command = Command::try_from(key)
            .unwrap_or_else(|e| panic!("test keys {keys:?} contain unbound key: {e}"));
        calc.apply(command);
    }
    calc
}

pub struct StringWriter {
    vec: Vec<u8>,
}
impl Write for StringWriter {
    fn write(&mut self, data: &[u8]) -> Result<usize, io::Error> {
        self.vec.write(data)
    }
    fn flush(&mut self) -> Result<(), io::Error> {
        Ok(())
    }
}
impl StringWriter {
    pub fn new() -> Self {
        let vec = Vec::<u8>::with_capacity(120);
        Self { vec }
    }
    pub fn get_string(&self) -> String {
        String::from_utf8(self.vec.clone()).unwrap()
    }
}

/// Keyboard replaying scripted key events, answers [`KeyInput::Quit`] once exhausted or
/// the scripted read error.
pub struct ScriptedKeyboard {
    events: VecDeque<KeyEvent>,
    error: Option<String>,
}
impl ScriptedKeyboard {
    pub fn from_keys(keys: &str) -> Self {
        let events = keys
            .chars()
            .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
            .collect();
        Self {
            events,
            error: None,
        }
    }
    pub fn with_error(message: &str) -> Self {
        Self {
            events: VecDeque::new(),
            error: Some(message.to_owned()),
        }
    }
    pub fn then(&mut self, event: KeyEvent) -> &mut Self {
        self.events.push_back(event);
        self
    }
    pub fn fail_with(&mut self, message: &str) -> &mut Self {
        self.error = Some(message.to_owned());
        self
    }
}
impl KeyboardInputProvider for ScriptedKeyboard {
    fn next_key(&mut self) -> io::Result<KeyInput> {
        match (self.events.pop_front(), &self.error) {
            (Some(event), _) => Ok(map_key_event(event)),
            (None, Some(message)) => Err(io::Error::other(message.clone())),
            (None, None) => Ok(KeyInput::Quit),
        }
    }
}
