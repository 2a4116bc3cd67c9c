//! Controller coordinates the simulation core with its collaborators.
//!
//! It owns the run/stop/step/clear/randomize commands, the tick scheduler,
//! pattern selection and persistence. Renderers report user input through
//! [`Controller::on_command`] and [`Controller::on_cell_activated`] and read
//! everything else back through the accessors.

use tracing::{debug, info, warn};

use super::display::{ControlStates, GenerationDisplay, StatusMessage};
use super::scheduler::TickScheduler;
use super::store::KeyValueStore;
use crate::domain::{GameOfLife, PatternCatalog, Snapshot, presets};
use crate::error::Result;

/// Store key for the saved simulation
pub const STATE_KEY: &str = "life_board_state";

/// Buttons the user can press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Step,
    Clear,
    Randomize,
    Save,
    Restore,
}

pub struct Controller<S: KeyValueStore> {
    game: GameOfLife,
    catalog: PatternCatalog,
    scheduler: TickScheduler,
    display: GenerationDisplay,
    store: S,
    grid_size: usize,
    pattern: Option<&'static str>,
    status: Option<StatusMessage>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Build a controller with a fresh `grid_size x grid_size` board and
    /// `pattern` centered on it (an unknown name leaves the board empty)
    pub fn new(
        catalog: PatternCatalog,
        store: S,
        grid_size: usize,
        interval_ms: u32,
        pattern: &str,
    ) -> Result<Self> {
        let mut controller = Self {
            game: GameOfLife::new(grid_size, grid_size)?,
            catalog,
            scheduler: TickScheduler::new(interval_ms),
            display: GenerationDisplay::default(),
            store,
            grid_size,
            pattern: None,
            status: None,
        };
        controller.initialize(grid_size, pattern)?;
        Ok(controller)
    }

    pub const fn game(&self) -> &GameOfLife {
        &self.game
    }

    pub const fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub const fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub const fn display(&self) -> &GenerationDisplay {
        &self.display
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Name of the pattern the board was last built with
    pub const fn pattern(&self) -> Option<&'static str> {
        self.pattern
    }

    /// Feedback from the last save or restore, until it expires
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(StatusMessage::text)
    }

    pub const fn controls(&self) -> ControlStates {
        ControlStates::for_running(self.game.is_running())
    }

    /// Dispatch a button press
    pub fn on_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Step => self.step(),
            Command::Clear => self.clear(),
            Command::Randomize => self.randomize(),
            Command::Save => self.save()?,
            Command::Restore => {
                self.restore();
            }
        }
        Ok(())
    }

    /// A cell was clicked; edits are only accepted while stopped
    pub fn on_cell_activated(&mut self, row: usize, col: usize) {
        if self.game.is_running() {
            return;
        }
        self.game.toggle_cell(row as isize, col as isize);
    }

    pub fn start(&mut self) {
        if self.game.is_running() {
            return;
        }
        self.game.set_running(true);
        self.scheduler.arm();
        info!(interval_ms = self.scheduler.interval_ms(), "simulation started");
    }

    pub fn stop(&mut self) {
        if !self.game.is_running() {
            return;
        }
        self.game.set_running(false);
        self.scheduler.disarm();
        info!(generation = self.game.generation(), "simulation stopped");
    }

    /// Single manual step, ignored while running
    pub fn step(&mut self) {
        if self.game.is_running() {
            return;
        }
        self.game.next_generation();
        self.display.observe(self.game.generation());
        debug!(generation = self.game.generation(), "stepped");
    }

    pub fn clear(&mut self) {
        self.stop_and_reset();
        self.game.clear();
        info!("board cleared");
    }

    pub fn randomize(&mut self) {
        self.stop_and_reset();
        self.game.randomize();
        info!(population = self.game.population(), "board randomized");
    }

    /// Change the tick interval; a pending tick is rescheduled
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.scheduler.set_interval(interval_ms);
        debug!(interval_ms = self.scheduler.interval_ms(), "speed changed");
    }

    /// Rebuild the board at the current size with `name` centered on it
    pub fn select_pattern(&mut self, name: &str) -> Result<()> {
        self.stop_and_reset();
        self.initialize(self.grid_size, name)
    }

    /// Rebuild the board at a new size, starting again from a glider
    pub fn resize(&mut self, grid_size: usize) -> Result<()> {
        self.stop_and_reset();
        self.initialize(grid_size, presets::GLIDER.name)
    }

    /// Feed frame time to the status message and the scheduler, and run
    /// at most one generation. Returns true if a generation was computed.
    pub fn tick(&mut self, delta_seconds: f32) -> bool {
        if self.status.as_mut().is_some_and(|s| s.expire(delta_seconds)) {
            self.status = None;
        }

        if !self.game.is_running() || !self.scheduler.advance(delta_seconds) {
            return false;
        }
        self.game.next_generation();
        self.display.observe(self.game.generation());
        true
    }

    /// Write the current simulation to the store
    pub fn save(&mut self) -> Result<()> {
        let saved = self
            .game
            .snapshot()
            .to_json()
            .and_then(|json| self.store.set(STATE_KEY, &json));
        if let Err(e) = saved {
            self.status = Some(StatusMessage::new("Save failed"));
            return Err(e);
        }

        self.status = Some(StatusMessage::new("State saved!"));
        info!(
            generation = self.game.generation(),
            rows = self.game.rows(),
            cols = self.game.cols(),
            "state saved"
        );
        Ok(())
    }

    /// Replace the simulation with the saved one. Anything missing or
    /// malformed counts as nothing to restore and leaves the board as is.
    pub fn restore(&mut self) -> bool {
        let Some(game) = self.load_saved() else {
            self.status = Some(StatusMessage::new("Nothing to restore"));
            return false;
        };

        self.scheduler.disarm();
        self.game = game;
        // only a square board has a size the pickers can rebuild at
        if self.game.rows() == self.game.cols() {
            self.grid_size = self.game.rows();
        }
        self.display.reset_to(self.game.generation());
        self.status = Some(StatusMessage::new("State restored"));
        info!(
            generation = self.game.generation(),
            rows = self.game.rows(),
            cols = self.game.cols(),
            "state restored"
        );
        true
    }

    fn load_saved(&self) -> Option<GameOfLife> {
        let json = match self.store.get(STATE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => {
                debug!("no saved state");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "could not read saved state");
                return None;
            }
        };

        Snapshot::from_json(&json)
            .and_then(|s| GameOfLife::from_snapshot(&s))
            .inspect_err(|e| warn!(error = %e, "ignoring unusable saved state"))
            .ok()
    }

    fn stop_and_reset(&mut self) {
        self.stop();
        self.display.reset_to(0);
    }

    fn initialize(&mut self, grid_size: usize, pattern: &str) -> Result<()> {
        let mut game = GameOfLife::new(grid_size, grid_size)?;
        self.pattern = self.catalog.get(pattern).map(|found| {
            let (row, col) = found.centered_offset(game.rows(), game.cols());
            game.place_pattern(found.cells, row, col);
            found.name
        });
        if self.pattern.is_none() {
            debug!(pattern, "unknown pattern, starting empty");
        }

        self.game = game;
        self.grid_size = grid_size;
        self.display.reset_to(0);
        info!(grid_size, pattern = self.pattern.unwrap_or("none"), "board initialized");
        Ok(())
    }
}
