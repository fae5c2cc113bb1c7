pub mod log;
pub mod models;

pub use log::{EventLog, JournalError, ENERGY_MAX, ENERGY_MIN};
pub use models::{ActivityEvent, EnergyEvent, Mood, MoodEvent};
