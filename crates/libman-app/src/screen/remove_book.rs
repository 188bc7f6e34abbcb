//! Remove a book from the catalogue.

use libman_core::{Library, StoreKind};
use tracing::warn;

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session, view};

pub(crate) struct RemoveBookScreen;

impl Screen for RemoveBookScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::RemoveBook
    }

    fn draw(&self, _session: &Session, library: &Library) -> Frame {
        Frame::new("Book number: ")
            .line("== Remove a book ==")
            .extend(view::book_lines(library.books()))
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let Some(book) = ctx.library().find_book_by_number(line) else {
            ctx.notify(format!("No book with number {line:?}"));
            return Ok(Transition::Back);
        };
        let (number, name, available) =
            (book.number.clone(), book.name.clone(), book.availability.is_available());

        if !available {
            warn!(%number, "removal of lent book refused");
            ctx.notify(format!("{name} is on loan and cannot be removed"));
            return Ok(Transition::Back);
        }

        if !ctx.confirm(&format!("Remove {name} ({number})? (Y/N): "))? {
            ctx.notify("Cancelled");
            return Ok(Transition::Back);
        }

        match ctx.library().remove_book(&number) {
            Ok(book) => {
                ctx.persist(&[StoreKind::Books]);
                ctx.notify(format!("Removed {}", book.name));
            },
            Err(err) => ctx.notify(format!("Cannot remove: {err}")),
        }
        Ok(Transition::Back)
    }
}
