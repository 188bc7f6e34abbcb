//! Session state shared by every screen.

use tracing::debug;

use crate::screen::{ScreenKind, Transition};

/// Where the user is and who they are signed in as.
///
/// Lives for the whole process. Entering [`ScreenKind::Init`] signs the user
/// out, so every path back to the start screen clears the admin flag and the
/// signed-in client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current: ScreenKind,
    /// Screen that navigated into the current one; one level deep
    previous: ScreenKind,
    running: bool,
    is_admin: bool,
    /// Student number of the signed-in member
    login: Option<String>,
    /// Messages shown at the top of the next frame
    notices: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session on the start screen.
    pub fn new() -> Self {
        Self {
            current: ScreenKind::Init,
            previous: ScreenKind::Init,
            running: true,
            is_admin: false,
            login: None,
            notices: Vec::new(),
        }
    }

    /// Screen being shown.
    pub fn current(&self) -> ScreenKind {
        self.current
    }

    /// Screen a [`Transition::Back`] returns to.
    pub fn previous(&self) -> ScreenKind {
        self.previous
    }

    /// Whether the loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the administrator is signed in.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Student number of the signed-in member.
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// Move to `kind`, remembering the current screen.
    pub fn change_screen(&mut self, kind: ScreenKind) {
        debug!(from = %self.current, to = %kind, "screen change");
        self.previous = self.current;
        self.current = kind;
        if kind == ScreenKind::Init {
            self.is_admin = false;
            self.login = None;
        }
    }

    /// Return to the screen that navigated here.
    pub fn go_back(&mut self) {
        self.change_screen(self.previous);
    }

    /// End the session after the current step.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Mark the administrator as signed in.
    pub fn sign_in_admin(&mut self) {
        self.is_admin = true;
        self.login = None;
    }

    /// Mark a member as signed in.
    pub fn sign_in(&mut self, student_number: impl Into<String>) {
        self.is_admin = false;
        self.login = Some(student_number.into());
    }

    /// Queue a message for the next frame.
    pub fn push_notice(&mut self, notice: impl Into<String>) {
        self.notices.push(notice.into());
    }

    /// Pending notices, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Drain pending notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Apply the outcome of an input step.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {},
            Transition::Goto(kind) => self.change_screen(kind),
            Transition::Back => self.go_back(),
            Transition::Stop => self.stop(),
        }
    }
}
