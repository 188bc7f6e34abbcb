//! Screen state machine.
//!
//! Every menu state is a [`Screen`]: a pure draw step that turns the session
//! and library into a [`Frame`], and an input step that consumes one line,
//! may ask follow-up questions through the [`Context`], and returns a
//! [`Transition`]. The [`ScreenTable`] maps each [`ScreenKind`] to its screen.
//!
//! Screens never own store data. They reach the library through the context
//! for the length of one input step.

mod admin_menu;
mod borrow_book;
mod find_book;
mod init;
mod member_menu;
mod modify_client;
mod register_book;
mod remove_book;
mod return_book;
mod sign_in;
mod sign_up;

use std::fmt;

use chrono::{DateTime, FixedOffset};
use libman_core::{Clock, Library, Storage, StoreKind};
use tracing::error;

use crate::{AppError, Driver, Session};

/// Identifies one screen of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Start screen: sign up, sign in or exit
    Init,
    /// New member registration
    SignUp,
    /// Member or administrator sign-in
    SignIn,
    /// Signed-in member's menu
    MemberMenu,
    /// Administrator's menu
    AdminMenu,
    /// Add a book to the catalogue
    RegisterBook,
    /// Remove a book from the catalogue
    RemoveBook,
    /// Lend a book to a member
    BorrowBook,
    /// Take a lent book back
    ReturnBook,
    /// Search the catalogue
    FindBook,
    /// Edit the signed-in member's profile
    ModifyClient,
}

impl ScreenKind {
    /// Every screen, in table order.
    pub const ALL: [Self; 11] = [
        Self::Init,
        Self::SignUp,
        Self::SignIn,
        Self::MemberMenu,
        Self::AdminMenu,
        Self::RegisterBook,
        Self::RemoveBook,
        Self::BorrowBook,
        Self::ReturnBook,
        Self::FindBook,
        Self::ModifyClient,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What the session does after an input step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Redraw the same screen
    Stay,
    /// Move to another screen
    Goto(ScreenKind),
    /// Return to the screen that navigated here
    Back,
    /// End the session
    Stop,
}

/// Output of a draw step: body lines and the prompt for the next line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// Body, one entry per terminal line
    pub lines: Vec<String>,
    /// Prompt printed before reading input
    pub prompt: String,
}

impl Frame {
    /// Empty frame with `prompt`.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { lines: Vec::new(), prompt: prompt.into() }
    }

    /// Append one line.
    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append several lines.
    #[must_use]
    pub fn extend<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        f.write_str(self.prompt.trim_end())
    }
}

/// One state of the menu state machine.
pub trait Screen {
    /// Which screen this is.
    fn kind(&self) -> ScreenKind;

    /// Render the screen. Must not change anything.
    fn draw(&self, session: &Session, library: &Library) -> Frame;

    /// Handle one line of input.
    ///
    /// Domain failures are reported as notices; only terminal and input
    /// errors come back as `Err`.
    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError>;
}

/// Everything an input step may touch, borrowed for that step only.
pub struct Context<'a> {
    session: &'a mut Session,
    library: &'a mut Library,
    driver: &'a mut dyn Driver,
    storage: &'a dyn Storage,
    clock: &'a dyn Clock,
}

impl<'a> Context<'a> {
    /// Bundle the collaborators of one input step.
    pub fn new(
        session: &'a mut Session,
        library: &'a mut Library,
        driver: &'a mut dyn Driver,
        storage: &'a dyn Storage,
        clock: &'a dyn Clock,
    ) -> Self {
        Self { session, library, driver, storage, clock }
    }

    /// Session state.
    pub fn session(&mut self) -> &mut Session {
        self.session
    }

    /// The library being edited.
    pub fn library(&mut self) -> &mut Library {
        self.library
    }

    /// Current time from the session clock.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    /// Print a line right away, below the current frame.
    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        self.driver.print_line(line)?;
        Ok(())
    }

    /// Prompt for one more line of input, trimmed.
    ///
    /// Closed input becomes [`AppError::InputClosed`].
    pub fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        self.driver.print_prompt(prompt)?;
        match self.driver.read_line()? {
            Some(line) => Ok(line.trim().to_owned()),
            None => Err(AppError::InputClosed),
        }
    }

    /// Ask a yes/no question; only `Y` or `y` confirms.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        let answer = self.ask(prompt)?;
        Ok(matches!(answer.as_str(), "Y" | "y"))
    }

    /// Queue a message for the next frame.
    pub fn notify(&mut self, notice: impl Into<String>) {
        self.session.push_notice(notice);
    }

    /// Save the given stores now.
    ///
    /// A failed save is logged and reported as a notice; the session goes on
    /// with the in-memory state.
    pub fn persist(&mut self, kinds: &[StoreKind]) {
        for &kind in kinds {
            if let Err(err) = self.storage.save(kind, self.library) {
                error!(store = %kind, error = %err, "save failed");
                self.session.push_notice(format!("Could not save {kind}: {err}"));
            }
        }
    }
}

/// Every screen, addressable by [`ScreenKind`].
pub struct ScreenTable {
    screens: [Box<dyn Screen>; 11],
}

impl Default for ScreenTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScreenTable {
    /// The library manager's screens.
    pub fn standard() -> Self {
        let screens: [Box<dyn Screen>; 11] = [
            Box::new(init::InitScreen),
            Box::new(sign_up::SignUpScreen),
            Box::new(sign_in::SignInScreen),
            Box::new(member_menu::MemberMenuScreen),
            Box::new(admin_menu::AdminMenuScreen),
            Box::new(register_book::RegisterBookScreen),
            Box::new(remove_book::RemoveBookScreen),
            Box::new(borrow_book::BorrowBookScreen),
            Box::new(return_book::ReturnBookScreen),
            Box::new(find_book::FindBookScreen),
            Box::new(modify_client::ModifyClientScreen),
        ];
        debug_assert!(
            screens.iter().zip(ScreenKind::ALL).all(|(screen, kind)| screen.kind() == kind),
            "screen table out of order"
        );
        Self { screens }
    }

    /// Screen registered for `kind`.
    pub fn get(&self, kind: ScreenKind) -> &dyn Screen {
        self.screens[kind.index()].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_kind() {
        let table = ScreenTable::standard();
        for kind in ScreenKind::ALL {
            assert_eq!(table.get(kind).kind(), kind);
        }
    }

    #[test]
    fn frame_renders_without_trailing_space() {
        let frame = Frame::new("Select: ").line("a").extend(["b", "c"]);
        assert_eq!(frame.to_string(), "a\nb\nc\nSelect:");
    }
}
