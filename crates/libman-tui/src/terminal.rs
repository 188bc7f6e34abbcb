//! Terminal driver.
//!
//! Implements the [`Driver`] trait over any line reader and writer. Clearing
//! uses crossterm commands; everything else is plain line I/O, so the
//! terminal stays in cooked mode and the user edits each line with the
//! usual shell keys.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};
use libman_app::Driver;

/// Line-based terminal driver.
pub struct TerminalDriver<R, W> {
    input: R,
    output: W,
}

impl TerminalDriver<BufReader<Stdin>, Stdout> {
    /// Driver over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalDriver<R, W> {
    /// Driver reading lines from `input` and drawing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything drawn so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Give back the output, e.g. to inspect what was drawn.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Driver for TerminalDriver<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        self.output.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        self.output.flush()
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn print_prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        // Invalid UTF-8 is replaced so a stray byte reads as an unknown key
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_lines_without_line_endings() {
        let mut driver = TerminalDriver::new(Cursor::new("1\r\n20180001\nlast"), Vec::new());
        assert_eq!(driver.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(driver.read_line().unwrap().as_deref(), Some("20180001"));
        assert_eq!(driver.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(driver.read_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let input = Cursor::new(vec![0xff, b'\n', b'3', b'\n']);
        let mut driver = TerminalDriver::new(input, Vec::new());
        assert_eq!(driver.read_line().unwrap().as_deref(), Some("\u{fffd}"));
        assert_eq!(driver.read_line().unwrap().as_deref(), Some("3"));
        assert_eq!(driver.read_line().unwrap(), None);
    }

    #[test]
    fn prompt_stays_on_its_line() {
        let mut driver = TerminalDriver::new(Cursor::new(""), Vec::new());
        driver.print_line("== Sign in ==").unwrap();
        driver.print_prompt("ID: ").unwrap();
        assert_eq!(String::from_utf8(driver.into_output()).unwrap(), "== Sign in ==\nID: ");
    }

    #[test]
    fn clear_emits_escape_sequence() {
        let mut driver = TerminalDriver::new(Cursor::new(""), Vec::new());
        driver.clear().unwrap();
        let out = String::from_utf8(driver.into_output()).unwrap();
        assert!(out.starts_with('\u{1b}'), "{out:?}");
    }
}
