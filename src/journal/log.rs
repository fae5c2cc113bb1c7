//! In-memory wellness event log

use chrono::Local;
use thiserror::Error;

use super::models::{ActivityEvent, EnergyEvent, Mood, MoodEvent};

pub const ENERGY_MIN: u8 = 1;
pub const ENERGY_MAX: u8 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum JournalError {
    #[error("activity label must not be empty")]
    EmptyLabel,

    #[error("energy level {0} is outside the allowed range {ENERGY_MIN}..={ENERGY_MAX}")]
    EnergyLevelOutOfRange(u8),
}

type Result<T> = std::result::Result<T, JournalError>;

/// Caller-owned event log backing the wellness dashboard. Newest entries come
/// first, matching the original UI which prepends on each log. Events are
/// stamped with today's date at creation and never mutated or deleted; the
/// log lives only in memory for the duration of a session.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    activities: Vec<ActivityEvent>,
    mood_entries: Vec<MoodEvent>,
    energy_entries: Vec<EnergyEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an activity for today. Blank labels are rejected (the UI suppresses
    /// them before calling in; this makes the contract explicit).
    pub fn log_activity(&mut self, label: &str) -> Result<&ActivityEvent> {
        if label.trim().is_empty() {
            return Err(JournalError::EmptyLabel);
        }
        let event = ActivityEvent::new(label.trim(), Local::now().date_naive());
        self.activities.insert(0, event);
        Ok(&self.activities[0])
    }

    /// Log a mood entry for today
    pub fn log_mood(&mut self, mood: Mood, note: &str) -> &MoodEvent {
        let event = MoodEvent::new(mood, note, Local::now().date_naive());
        self.mood_entries.insert(0, event);
        &self.mood_entries[0]
    }

    /// Log an energy level for today; levels outside `[1,10]` are rejected
    /// here so the aggregator never sees them
    pub fn log_energy(&mut self, level: u8) -> Result<&EnergyEvent> {
        if !(ENERGY_MIN..=ENERGY_MAX).contains(&level) {
            return Err(JournalError::EnergyLevelOutOfRange(level));
        }
        let event = EnergyEvent::new(level, Local::now().date_naive());
        self.energy_entries.insert(0, event);
        Ok(&self.energy_entries[0])
    }

    pub fn activities(&self) -> &[ActivityEvent] {
        &self.activities
    }

    pub fn mood_entries(&self) -> &[MoodEvent] {
        &self.mood_entries
    }

    pub fn energy_entries(&self) -> &[EnergyEvent] {
        &self.energy_entries
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty() && self.mood_entries.is_empty() && self.energy_entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_activity_stamps_today_and_prepends() {
        let mut log = EventLog::new();
        log.log_activity("walk").unwrap();
        log.log_activity("yoga").unwrap();

        let today = Local::now().date_naive();
        assert_eq!(log.activities().len(), 2);
        assert_eq!(log.activities()[0].label, "yoga");
        assert_eq!(log.activities()[1].label, "walk");
        assert!(log.activities().iter().all(|a| a.date == today));
    }

    #[test]
    fn test_log_activity_rejects_blank_label() {
        let mut log = EventLog::new();
        assert_eq!(log.log_activity("  "), Err(JournalError::EmptyLabel));
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_activity_trims_label() {
        let mut log = EventLog::new();
        log.log_activity("  morning run ").unwrap();
        assert_eq!(log.activities()[0].label, "morning run");
    }

    #[test]
    fn test_log_energy_validates_range() {
        let mut log = EventLog::new();
        assert_eq!(
            log.log_energy(0),
            Err(JournalError::EnergyLevelOutOfRange(0))
        );
        assert_eq!(
            log.log_energy(11),
            Err(JournalError::EnergyLevelOutOfRange(11))
        );
        assert!(log.log_energy(1).is_ok());
        assert!(log.log_energy(10).is_ok());
        assert_eq!(log.energy_entries().len(), 2);
    }

    #[test]
    fn test_log_mood_keeps_note() {
        let mut log = EventLog::new();
        log.log_mood(Mood::Happy, "sunny afternoon");
        assert_eq!(log.mood_entries()[0].mood, Mood::Happy);
        assert_eq!(log.mood_entries()[0].note, "sunny afternoon");
    }
}
