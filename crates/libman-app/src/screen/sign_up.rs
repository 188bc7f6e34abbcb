//! New member registration.

use libman_core::{ADMIN_ID, Client, Library, PHONE_NUMBER_WIDTH, STUDENT_NUMBER_WIDTH, StoreKind};
use tracing::warn;

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session};

pub(crate) struct SignUpScreen;

impl Screen for SignUpScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::SignUp
    }

    fn draw(&self, _session: &Session, _library: &Library) -> Frame {
        Frame::new("Student number: ")
            .line("== Sign up ==")
            .line(format!("Student number: up to {STUDENT_NUMBER_WIDTH} characters"))
            .line(format!("Phone number: up to {PHONE_NUMBER_WIDTH} characters"))
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let student_number = line;
        if student_number == ADMIN_ID {
            warn!("sign-up with reserved identifier refused");
            ctx.notify(format!("{ADMIN_ID:?} is reserved"));
            return Ok(Transition::Goto(ScreenKind::Init));
        }
        if let Err(err) = ctx.library().check_new_student_number(student_number) {
            warn!(%student_number, error = %err, "sign-up refused");
            ctx.notify(format!("Sign up failed: {err}"));
            return Ok(Transition::Goto(ScreenKind::Init));
        }

        let password = ctx.ask("Password: ")?;
        let name = ctx.ask("Name: ")?;
        let address = ctx.ask("Address: ")?;
        let phone_number = ctx.ask("Phone number: ")?;

        let client = Client::new(student_number, password, name, address, phone_number);
        match ctx.library().register_client(client) {
            Ok(client) => {
                let notice = format!("Welcome, {}. Please sign in.", client.name);
                ctx.persist(&[StoreKind::Clients]);
                ctx.notify(notice);
            },
            Err(err) => {
                warn!(%student_number, error = %err, "sign-up refused");
                ctx.notify(format!("Sign up failed: {err}"));
            },
        }
        Ok(Transition::Goto(ScreenKind::Init))
    }
}
