use crate::display::Screen;
use crossterm::style::Print;
use crossterm::terminal::ClearType;
use crossterm::{cursor, queue, terminal};
use std::io;
use std::io::Write;

pub struct RawLock {}

impl Drop for RawLock {
    fn drop(&mut self) {
        // terminal stays in raw mode but no means to repair
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::error!("Error resetting terminal {e}");
        }
    }
}

/// Set terminal to raw mode until the returned lock is dropped.
///
/// # Errors
/// - stdin is not a terminal or its mode cannot be changed
pub fn set_terminal_raw() -> io::Result<RawLock> {
    terminal::enable_raw_mode()?;
    Ok(RawLock {})
}

/// Reserves the two display lines below the cursor, scrolling if the cursor is on the last row.
///
/// # Errors
/// - writing to `stdout` failed
pub fn open_display(stdout: &mut impl Write) -> io::Result<()> {
    stdout.write_all(b"\r\n")?;
    queue!(stdout, cursor::MoveToPreviousLine(1))?;
    stdout.flush()
}

/// Redraws both display lines in place, the cursor stays on the equation line.
///
/// # Errors
/// - writing to `stdout` failed
pub fn draw(stdout: &mut impl Write, screen: &Screen) -> io::Result<()> {
    queue!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(&screen.equation),
        cursor::MoveToNextLine(1),
        terminal::Clear(ClearType::CurrentLine),
        Print(&screen.result),
        cursor::MoveToPreviousLine(1),
    )?;
    stdout.flush()
}

/// Moves the cursor below the display.
///
/// # Errors
/// - writing to `stdout` failed
pub fn close_display(stdout: &mut impl Write) -> io::Result<()> {
    queue!(stdout, cursor::MoveToNextLine(1))?;
    stdout.write_all(b"\r\n")?;
    stdout.flush()
}
