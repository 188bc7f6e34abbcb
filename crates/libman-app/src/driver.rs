//! Driver trait for abstracting terminal I/O.
//!
//! The [`Driver`] trait decouples the session from a specific terminal.
//! The binary implements it with crossterm; tests implement it with a script
//! of input lines and a captured transcript.

use std::io;

/// Line-oriented terminal the [`Runtime`](crate::Runtime) talks to.
///
/// The trait is object safe: screens reach it as `&mut dyn Driver` through
/// the [`Context`](crate::Context) when they need a sub-prompt.
///
/// # Implementations
///
/// - **TUI**: crossterm screen clearing over stdout, lines from stdin
/// - **Tests**: queued input lines, output captured per cleared screen
pub trait Driver {
    /// Clear the screen before a new frame.
    fn clear(&mut self) -> io::Result<()>;

    /// Print one line of output.
    fn print_line(&mut self, line: &str) -> io::Result<()>;

    /// Print a prompt without ending the line.
    fn print_prompt(&mut self, prompt: &str) -> io::Result<()>;

    /// Read one line of input, without its line ending.
    ///
    /// Returns `None` once input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}
