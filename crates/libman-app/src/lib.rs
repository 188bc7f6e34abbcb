//! Application layer for the library manager
//!
//! The screen state machine and the runtime loop that drives it, written
//! against narrow traits so the same code runs on a real terminal and under
//! a scripted test driver.
//!
//! # Components
//!
//! - [`Session`]: current and previous screen, sign-in state, pending notices
//! - [`Screen`]: one menu state with a pure draw step and an input step
//! - [`ScreenTable`]: every screen, keyed by [`ScreenKind`]
//! - [`Driver`]: trait for terminal I/O (clear, print, read a line)
//! - [`Runtime`]: load, loop clear/draw/read/handle, save

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod error;
mod runtime;
mod screen;
mod session;
pub mod view;

pub use driver::Driver;
pub use error::AppError;
pub use runtime::Runtime;
pub use screen::{Context, Frame, Screen, ScreenKind, ScreenTable, Transition};
pub use session::Session;
