//! Scripted driver implementing the Driver trait.
//!
//! `ScriptedDriver` provides the same interface as the terminal driver but
//! reads input from a queue of lines and captures output, one string per
//! cleared screen. The same [`libman_app::Runtime`] loop runs in production
//! and in tests.

use std::{collections::VecDeque, io};

use libman_app::Driver;

/// Driver fed from a fixed script of input lines.
///
/// Each `clear` starts a new captured screen. A prompt and the line read
/// after it are recorded together, as a user would see them echoed.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDriver {
    input: VecDeque<String>,
    screens: Vec<String>,
    pending_prompt: Option<String>,
    reads: usize,
}

impl ScriptedDriver {
    /// Create a driver that will answer with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { input: lines.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Queue one more input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Input lines not consumed yet.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Lines consumed so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Number of captured screens.
    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    /// Captured screen `index`, without its final newline.
    pub fn screen(&self, index: usize) -> Option<&str> {
        self.screens.get(index).map(|s| s.trim_end_matches('\n'))
    }

    /// Last captured screen, without its final newline.
    pub fn last_screen(&self) -> Option<&str> {
        self.screens.last().map(|s| s.trim_end_matches('\n'))
    }

    /// Everything printed, screens separated by a rule.
    pub fn transcript(&self) -> String {
        self.screens.iter().map(|s| s.trim_end_matches('\n')).collect::<Vec<_>>().join("\n----\n")
    }

    /// Whether any captured screen contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.screens.iter().any(|s| s.contains(needle))
    }

    fn current(&mut self) -> &mut String {
        if self.screens.is_empty() {
            self.screens.push(String::new());
        }
        let last = self.screens.len() - 1;
        &mut self.screens[last]
    }
}

impl Driver for ScriptedDriver {
    fn clear(&mut self) -> io::Result<()> {
        self.screens.push(String::new());
        Ok(())
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        let screen = self.current();
        screen.push_str(line);
        screen.push('\n');
        Ok(())
    }

    fn print_prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.pending_prompt = Some(prompt.to_owned());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.input.pop_front();
        let prompt = self.pending_prompt.take().unwrap_or_default();
        let echoed = format!("{prompt}{}", line.as_deref().unwrap_or_default());

        let screen = self.current();
        screen.push_str(echoed.trim_end());
        screen.push('\n');

        if line.is_some() {
            self.reads += 1;
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_prompt_with_input() {
        let mut driver = ScriptedDriver::new(["1"]);
        driver.clear().ok();
        driver.print_line("menu").ok();
        driver.print_prompt("Select: ").ok();
        assert_eq!(driver.read_line().ok().flatten().as_deref(), Some("1"));
        assert_eq!(driver.last_screen(), Some("menu\nSelect: 1"));
    }

    #[test]
    fn exhausted_script_reads_none() {
        let mut driver = ScriptedDriver::new(Vec::<String>::new());
        driver.print_prompt("Select: ").ok();
        assert!(matches!(driver.read_line(), Ok(None)));
        assert_eq!(driver.last_screen(), Some("Select:"));
        assert_eq!(driver.reads(), 0);
    }

    #[test]
    fn clear_starts_new_screen() {
        let mut driver = ScriptedDriver::default();
        driver.clear().ok();
        driver.print_line("a").ok();
        driver.clear().ok();
        driver.print_line("b").ok();
        assert_eq!(driver.screen_count(), 2);
        assert_eq!(driver.transcript(), "a\n----\nb");
    }
}
