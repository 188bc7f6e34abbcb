//! Signed-in member's menu.

use libman_core::{Library, StoreKind};
use tracing::{info, warn};

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session, view};

pub(crate) struct MemberMenuScreen;

impl Screen for MemberMenuScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::MemberMenu
    }

    fn draw(&self, session: &Session, library: &Library) -> Frame {
        let who = session
            .login()
            .and_then(|sn| library.find_client(sn))
            .map_or_else(String::new, |c| format!(" ({} / {})", c.name, c.student_number));

        Frame::new("Select: ")
            .line(format!("== Member menu{who} =="))
            .line("1. Find a book")
            .line("2. My borrows")
            .line("3. Edit profile")
            .line("4. Withdraw membership")
            .line("5. Sign out")
            .line("6. Exit")
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let Some(student_number) = ctx.session().login().map(str::to_owned) else {
            warn!("member menu reached without a signed-in member");
            return Ok(Transition::Goto(ScreenKind::Init));
        };

        match line {
            "1" => Ok(Transition::Goto(ScreenKind::FindBook)),
            "2" => {
                let offset = *ctx.now().offset();
                let lines = view::borrow_lines(ctx.library().borrows_of(&student_number), &offset);
                ctx.notify("My borrows:");
                for line in lines {
                    ctx.notify(line);
                }
                Ok(Transition::Stay)
            },
            "3" => Ok(Transition::Goto(ScreenKind::ModifyClient)),
            "4" => withdraw(&student_number, ctx),
            "5" => {
                ctx.notify("Signed out");
                Ok(Transition::Goto(ScreenKind::Init))
            },
            "6" => Ok(Transition::Stop),
            other => {
                ctx.notify(format!("Unknown menu item {other:?}"));
                Ok(Transition::Stay)
            },
        }
    }
}

fn withdraw(student_number: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
    if !ctx.confirm("Withdraw membership? (Y/N): ")? {
        ctx.notify("Cancelled");
        return Ok(Transition::Stay);
    }

    match ctx.library().remove_client(student_number) {
        Ok(_) => {
            ctx.persist(&[StoreKind::Clients]);
            ctx.notify("Membership withdrawn");
            info!(%student_number, "member withdrew");
            Ok(Transition::Goto(ScreenKind::Init))
        },
        Err(err) => {
            warn!(%student_number, error = %err, "withdrawal refused");
            ctx.notify(format!("Cannot withdraw: {err}"));
            Ok(Transition::Stay)
        },
    }
}
