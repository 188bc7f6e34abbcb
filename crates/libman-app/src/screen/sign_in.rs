//! Member and administrator sign-in.
//!
//! The administrator identifier is not checked against a password. Its
//! client record is created with whatever password was typed the first time
//! it signs in.

use libman_core::{ADMIN_ID, Client, Library, StoreKind};
use tracing::{info, warn};

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session};

pub(crate) struct SignInScreen;

impl Screen for SignInScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::SignIn
    }

    fn draw(&self, _session: &Session, _library: &Library) -> Frame {
        Frame::new("ID: ").line("== Sign in ==")
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let id = line;
        let password = ctx.ask("Password: ")?;

        if id == ADMIN_ID {
            if ctx.library().find_client(ADMIN_ID).is_none() {
                match ctx.library().register_client(Client::admin(password)) {
                    Ok(_) => ctx.persist(&[StoreKind::Clients]),
                    Err(err) => warn!(error = %err, "could not create administrator record"),
                }
            }
            ctx.session().sign_in_admin();
            info!("administrator signed in");
            return Ok(Transition::Goto(ScreenKind::AdminMenu));
        }

        let verified = ctx
            .library()
            .find_client(id)
            .filter(|client| client.password == password)
            .map(|client| client.name.clone());
        let Some(name) = verified else {
            warn!(id, "sign-in failed");
            ctx.notify("Wrong ID or password");
            return Ok(Transition::Goto(ScreenKind::Init));
        };

        ctx.session().sign_in(id);
        ctx.notify(format!("Welcome back, {name}"));
        info!(student_number = id, "member signed in");
        Ok(Transition::Goto(ScreenKind::MemberMenu))
    }
}
