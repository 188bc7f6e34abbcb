//! Profile editing for the signed-in member.

use libman_core::{Library, ProfileField, StoreKind};
use tracing::warn;

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session};

pub(crate) struct ModifyClientScreen;

impl Screen for ModifyClientScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::ModifyClient
    }

    fn draw(&self, session: &Session, library: &Library) -> Frame {
        let mut frame = Frame::new("Select: ").line("== Edit profile ==");
        if let Some(client) = session.login().and_then(|sn| library.find_client(sn)) {
            frame = frame
                .line(format!("Name: {}", client.name))
                .line(format!("Address: {}", client.address))
                .line(format!("Phone number: {}", client.phone_number));
        }
        let items = ProfileField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| format!("{}. Change {field}", i + 1));
        frame.extend(items).line("0. Back")
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let Some(student_number) = ctx.session().login().map(str::to_owned) else {
            warn!("profile editing reached without a signed-in member");
            return Ok(Transition::Goto(ScreenKind::Init));
        };

        if line == "0" {
            return Ok(Transition::Goto(ScreenKind::MemberMenu));
        }
        let chosen = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
        let Some(&field) = chosen.and_then(|i| ProfileField::ALL.get(i)) else {
            ctx.notify(format!("Unknown menu item {line:?}"));
            return Ok(Transition::Stay);
        };

        let value = ctx.ask(&format!("New {field}: "))?;
        match ctx.library().update_profile(&student_number, field, value) {
            Ok(()) => {
                ctx.persist(&[StoreKind::Clients]);
                ctx.notify(format!("Updated {field}"));
            },
            Err(err) => ctx.notify(format!("Cannot update {field}: {err}")),
        }
        Ok(Transition::Goto(ScreenKind::MemberMenu))
    }
}
