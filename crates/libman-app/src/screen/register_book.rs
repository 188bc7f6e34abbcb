//! Add a book to the catalogue.

use libman_core::{ISBN_WIDTH, Library, NewBook, StoreKind};
use tracing::warn;

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session};

pub(crate) struct RegisterBookScreen;

impl Screen for RegisterBookScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::RegisterBook
    }

    fn draw(&self, _session: &Session, library: &Library) -> Frame {
        let next = library.next_book_number().unwrap_or_else(|_| "none left".to_owned());
        Frame::new("Name: ")
            .line("== Register a book ==")
            .line(format!("Next book number: {next}"))
            .line(format!("ISBN: up to {ISBN_WIDTH} characters"))
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let name = line.to_owned();
        let publisher = ctx.ask("Publisher: ")?;
        let author = ctx.ask("Author: ")?;
        let isbn = ctx.ask("ISBN: ")?;
        let location = ctx.ask("Location: ")?;

        if !ctx.confirm("Register this book? (Y/N): ")? {
            ctx.notify("Cancelled");
            return Ok(Transition::Goto(ScreenKind::AdminMenu));
        }

        let new = NewBook { name, publisher, author, isbn, location };
        match ctx.library().register_book(new) {
            Ok(book) => {
                let notice = format!("Registered {} as book {}", book.name, book.number);
                ctx.persist(&[StoreKind::Books]);
                ctx.notify(notice);
            },
            Err(err) => {
                warn!(error = %err, "book registration refused");
                ctx.notify(format!("Cannot register: {err}"));
            },
        }
        Ok(Transition::Goto(ScreenKind::AdminMenu))
    }
}
