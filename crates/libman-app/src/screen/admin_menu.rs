//! Administrator's menu.

use libman_core::Library;
use tracing::warn;

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session, view};

pub(crate) struct AdminMenuScreen;

impl Screen for AdminMenuScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::AdminMenu
    }

    fn draw(&self, _session: &Session, _library: &Library) -> Frame {
        Frame::new("Select: ")
            .line("== Admin menu ==")
            .line("1. Register a book")
            .line("2. Remove a book")
            .line("3. Lend a book")
            .line("4. Take a book back")
            .line("5. Find a book")
            .line("6. List members")
            .line("7. Sign out")
            .line("8. Exit")
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        if !ctx.session().is_admin() {
            warn!("admin menu reached without administrator sign-in");
            return Ok(Transition::Goto(ScreenKind::Init));
        }

        Ok(match line {
            "1" => Transition::Goto(ScreenKind::RegisterBook),
            "2" => Transition::Goto(ScreenKind::RemoveBook),
            "3" => Transition::Goto(ScreenKind::BorrowBook),
            "4" => Transition::Goto(ScreenKind::ReturnBook),
            "5" => Transition::Goto(ScreenKind::FindBook),
            "6" => {
                let lines: Vec<String> = ctx
                    .library()
                    .clients()
                    .iter()
                    .filter(|client| !client.is_admin())
                    .map(view::client_line)
                    .collect();
                ctx.notify(format!("Members ({}):", lines.len()));
                for line in lines {
                    ctx.notify(line);
                }
                Transition::Stay
            },
            "7" => {
                ctx.notify("Signed out");
                Transition::Goto(ScreenKind::Init)
            },
            "8" => Transition::Stop,
            other => {
                ctx.notify(format!("Unknown menu item {other:?}"));
                Transition::Stay
            },
        })
    }
}
