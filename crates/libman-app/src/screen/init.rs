//! Start screen.

use libman_core::Library;

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session};

pub(crate) struct InitScreen;

impl Screen for InitScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Init
    }

    fn draw(&self, _session: &Session, _library: &Library) -> Frame {
        Frame::new("Select: ")
            .line("== Library Manager ==")
            .line("1. Sign up")
            .line("2. Sign in")
            .line("3. Exit")
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        Ok(match line {
            "1" => Transition::Goto(ScreenKind::SignUp),
            "2" => Transition::Goto(ScreenKind::SignIn),
            "3" => Transition::Stop,
            other => {
                ctx.notify(format!("Unknown menu item {other:?}"));
                Transition::Stay
            },
        })
    }
}
