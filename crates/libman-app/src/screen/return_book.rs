//! Take a lent book back.

use libman_core::{Library, StoreKind};
use tracing::warn;

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session, view};

pub(crate) struct ReturnBookScreen;

impl Screen for ReturnBookScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::ReturnBook
    }

    fn draw(&self, _session: &Session, _library: &Library) -> Frame {
        Frame::new("Student number: ").line("== Take a book back ==")
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let student_number = line;
        if ctx.library().borrows_of(student_number).is_empty() {
            ctx.notify(format!("{student_number:?} has no books on loan"));
            return Ok(Transition::Goto(ScreenKind::AdminMenu));
        }

        let offset = *ctx.now().offset();
        let lines = view::borrow_lines(ctx.library().borrows_of(student_number), &offset);
        for line in &lines {
            ctx.say(line)?;
        }
        let book_number = ctx.ask("Book number: ")?;

        if ctx.library().find_borrow(student_number, &book_number).is_none() {
            ctx.notify(format!("{student_number} has not borrowed book {book_number:?}"));
            return Ok(Transition::Goto(ScreenKind::AdminMenu));
        }

        if !ctx.confirm("Take this book back? (Y/N): ")? {
            ctx.notify("Cancelled");
            return Ok(Transition::Goto(ScreenKind::AdminMenu));
        }

        match ctx.library().return_book(student_number, &book_number) {
            Ok(borrow) => {
                ctx.persist(&[StoreKind::Books, StoreKind::Borrows]);
                ctx.notify(format!("Returned {}", borrow.book_name));
            },
            Err(err) => {
                warn!(error = %err, "return refused");
                ctx.notify(format!("Cannot take back: {err}"));
            },
        }
        Ok(Transition::Goto(ScreenKind::AdminMenu))
    }
}
