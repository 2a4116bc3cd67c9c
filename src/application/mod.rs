mod controller;
mod display;
mod scheduler;
mod store;

pub use controller::{Command, Controller, STATE_KEY};
pub use display::{ControlStates, GenerationDisplay, STATUS_SECONDS, StatusMessage};
pub use scheduler::{
    DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS, TickScheduler, interval_from_slider,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
