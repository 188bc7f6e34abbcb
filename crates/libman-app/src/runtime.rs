//! Generic runtime for the session loop.
//!
//! The Runtime owns the library for the life of the process and drives the
//! loop, coordinating between:
//! - [`ScreenTable`]: draw and input steps per screen
//! - [`Driver`]: terminal I/O
//! - [`Storage`]: load at start, save after mutations and at exit
//! - [`Clock`]: loan timestamps

use libman_core::{Clock, Library, Storage};
use tracing::{debug, error, info};

use crate::{AppError, Context, Driver, ScreenTable, Session};

/// Generic runtime that orchestrates screens, driver and storage.
///
/// # Type Parameters
///
/// - `D`: terminal driver
/// - `S`: storage backend
/// - `C`: clock
pub struct Runtime<D, S, C>
where
    D: Driver,
    S: Storage,
    C: Clock,
{
    driver: D,
    storage: S,
    clock: C,
    library: Library,
    session: Session,
    screens: ScreenTable,
}

impl<D, S, C> Runtime<D, S, C>
where
    D: Driver,
    S: Storage,
    C: Clock,
{
    /// Load the library from `storage` and start on the init screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read at all.
    /// Missing files and malformed records are not errors.
    pub fn new(driver: D, storage: S, clock: C) -> Result<Self, AppError> {
        let library = storage.load_library()?;
        info!(
            clients = library.clients().len(),
            books = library.books().len(),
            borrows = library.borrows().len(),
            "library loaded"
        );
        Ok(Self {
            driver,
            storage,
            clock,
            library,
            session: Session::new(),
            screens: ScreenTable::standard(),
        })
    }

    /// Run the session until it stops.
    ///
    /// This is the core loop that:
    /// 1. Clears the terminal and prints pending notices
    /// 2. Draws the current screen and reads one line
    /// 3. Hands the line to the screen's input step
    /// 4. Applies the resulting transition
    ///
    /// Closed input stops the session like an explicit exit. Every store is
    /// saved on the way out.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or the final save fails.
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("session started");

        while self.session.is_running() {
            match self.step() {
                Ok(()) => {},
                Err(err) if err.is_graceful() => {
                    info!("input closed, stopping");
                    self.session.stop();
                },
                Err(err) => {
                    error!(error = %err, "session aborted");
                    self.save_all()?;
                    return Err(err);
                },
            }
        }

        self.save_all()?;
        for notice in self.session.take_notices() {
            self.driver.print_line(&notice)?;
        }

        info!("session stopped");
        Ok(())
    }

    /// Run one clear/draw/read/handle cycle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InputClosed`] if input ends, or a terminal error.
    pub fn step(&mut self) -> Result<(), AppError> {
        self.driver.clear()?;
        for notice in self.session.take_notices() {
            self.driver.print_line(&notice)?;
        }

        let screen = self.screens.get(self.session.current());
        let frame = screen.draw(&self.session, &self.library);
        for line in &frame.lines {
            self.driver.print_line(line)?;
        }
        self.driver.print_prompt(&frame.prompt)?;

        let Some(line) = self.driver.read_line()? else {
            return Err(AppError::InputClosed);
        };
        let line = line.trim();
        debug!(screen = %screen.kind(), input = line, "input");

        let mut ctx = Context::new(
            &mut self.session,
            &mut self.library,
            &mut self.driver,
            &self.storage,
            &self.clock,
        );
        let transition = screen.input(line, &mut ctx)?;
        self.session.apply(transition);
        Ok(())
    }

    /// Save every store.
    fn save_all(&mut self) -> Result<(), AppError> {
        if let Err(err) = self.storage.save_library(&self.library) {
            error!(error = %err, "final save failed");
            return Err(err.into());
        }
        debug!("library saved");
        Ok(())
    }

    /// Get a reference to the library
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Get a reference to the session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get a reference to the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Get a reference to the storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
