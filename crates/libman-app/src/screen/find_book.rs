//! Catalogue search.

use libman_core::{BookField, Library};

use super::{Context, Frame, Screen, ScreenKind, Transition};
use crate::{AppError, Session, view};

pub(crate) struct FindBookScreen;

impl Screen for FindBookScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::FindBook
    }

    fn draw(&self, _session: &Session, _library: &Library) -> Frame {
        Frame::new("Select: ")
            .line("== Find a book ==")
            .line("1. By name")
            .line("2. By publisher")
            .line("3. By author")
            .line("4. By ISBN")
            .line("5. By book number")
            .line("0. Back")
    }

    fn input(&self, line: &str, ctx: &mut Context<'_>) -> Result<Transition, AppError> {
        let field = match line {
            "0" => return Ok(Transition::Back),
            "1" => Some(BookField::Name),
            "2" => Some(BookField::Publisher),
            "3" => Some(BookField::Author),
            "4" => Some(BookField::Isbn),
            "5" => None,
            other => {
                ctx.notify(format!("Unknown menu item {other:?}"));
                return Ok(Transition::Stay);
            },
        };

        let label = field.map_or_else(|| "book number".to_owned(), |f| f.to_string());
        let needle = ctx.ask(&format!("Search {label}: "))?;

        let lines = match field {
            Some(field) => view::book_lines(ctx.library().find_books(field, &needle)),
            None => view::book_lines(ctx.library().find_book_by_number(&needle)),
        };
        ctx.notify(format!("Results for {label} {needle:?}:"));
        for line in lines {
            ctx.notify(line);
        }
        Ok(Transition::Back)
    }
}
