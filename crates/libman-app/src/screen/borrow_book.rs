//! Lend a book to a member.

use libman_core::{Library, StoreKind, format_date};
use tracing::warn;

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session, view};

pub(crate) struct BorrowBookScreen;

impl Screen for BorrowBookScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::BorrowBook
    }

    fn draw(&self, _session: &Session, library: &Library) -> Frame {
        Frame::new("Student number: ")
            .line("== Lend a book ==")
            .extend(view::book_lines(library.books()))
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let student_number = line;
        if ctx.library().find_client(student_number).is_none() {
            ctx.notify(format!("No member with student number {student_number:?}"));
            return Ok(Transition::Back);
        }

        let book_number = ctx.ask("Book number: ")?;
        let Some(book) = ctx.library().find_book_by_number(&book_number) else {
            ctx.notify(format!("No book with number {book_number:?}"));
            return Ok(Transition::Back);
        };
        let (name, available) = (book.name.clone(), book.availability.is_available());

        if !available {
            warn!(%book_number, "loan of lent book refused");
            ctx.notify(format!("{name} is already on loan"));
            return Ok(Transition::Back);
        }

        if !ctx.confirm(&format!("Lend {name} to {student_number}? (Y/N): "))? {
            ctx.notify("Cancelled");
            return Ok(Transition::Back);
        }

        let now = ctx.now();
        match ctx.library().lend_book(student_number, &book_number, now) {
            Ok(borrow) => {
                let due = format_date(borrow.due_at, now.offset());
                let notice = format!("Lent {}, due {due}", borrow.book_name);
                ctx.persist(&[StoreKind::Books, StoreKind::Borrows]);
                ctx.notify(notice);
            },
            Err(err) => {
                warn!(error = %err, "loan refused");
                ctx.notify(format!("Cannot lend: {err}"));
            },
        }
        Ok(Transition::Back)
    }
}
