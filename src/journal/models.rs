//! Wellness journal data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mood options from the journal picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Stressed,
    Neutral,
}

impl Mood {
    /// Chart score: Happy=5, Neutral=3, everything else 1
    pub fn score(self) -> u8 {
        match self {
            Mood::Happy => 5,
            Mood::Neutral => 3,
            Mood::Sad | Mood::Angry | Mood::Stressed => 1,
        }
    }

    /// The glyph the original mood picker uses for this mood
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "\u{1F60A}",    // 😊
            Mood::Sad => "\u{1F614}",      // 😔
            Mood::Angry => "\u{1F620}",    // 😠
            Mood::Stressed => "\u{1F630}", // 😰
            Mood::Neutral => "\u{1F610}",  // 😐
        }
    }

    /// Parse a mood from its name or picker glyph
    pub fn parse(input: &str) -> Option<Mood> {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "happy" => return Some(Mood::Happy),
            "sad" => return Some(Mood::Sad),
            "angry" => return Some(Mood::Angry),
            "stressed" => return Some(Mood::Stressed),
            "neutral" => return Some(Mood::Neutral),
            _ => {}
        }
        [
            Mood::Happy,
            Mood::Sad,
            Mood::Angry,
            Mood::Stressed,
            Mood::Neutral,
        ]
        .into_iter()
        .find(|mood| mood.emoji() == trimmed)
    }
}

/// A free-form activity logged for a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub label: String,
    pub date: NaiveDate,
}

impl ActivityEvent {
    pub fn new(label: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            date,
        }
    }
}

/// A mood journal entry with an optional free-text note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEvent {
    pub mood: Mood,
    pub note: String,
    pub date: NaiveDate,
}

impl MoodEvent {
    pub fn new(mood: Mood, note: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            mood,
            note: note.into(),
            date,
        }
    }
}

/// An energy level reading in `[1,10]`, validated at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyEvent {
    pub level: u8,
    pub date: NaiveDate,
}

impl EnergyEvent {
    pub fn new(level: u8, date: NaiveDate) -> Self {
        Self { level, date }
    }
}
