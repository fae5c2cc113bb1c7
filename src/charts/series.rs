//! Rolling-window daily series for the wellness charts

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::journal::{ActivityEvent, EnergyEvent, EventLog, MoodEvent};

/// Window length the dashboard charts over
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// One day of the activity series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// One day of the mood series; `score` is absent when nothing was logged
/// that day, which chart consumers render as a gap rather than a zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyScore {
    pub date: NaiveDate,
    pub score: Option<u8>,
}

/// One day of the energy series; `level` is absent when nothing was logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLevel {
    pub date: NaiveDate,
    pub level: Option<u8>,
}

/// The trailing `n`-day window ending at `today`, oldest first and inclusive
/// of `today`. Recomputed fresh on every call; there is no memory of prior
/// windows, so a caller crossing midnight just asks again.
pub fn last_n_days(n: usize, today: NaiveDate) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .map(|offset| today - Duration::days(offset as i64))
        .collect()
}

/// Count activities per day by exact calendar-date equality. Every matching
/// event counts, so two walks logged the same day show as 2.
pub fn aggregate_activity(events: &[ActivityEvent], days: &[NaiveDate]) -> Vec<DailyCount> {
    days.iter()
        .map(|&date| DailyCount {
            date,
            count: events.iter().filter(|e| e.date == date).count() as u32,
        })
        .collect()
}

/// Mood score per day. The scan takes the first event in stored order whose
/// date matches, not the latest for that day.
pub fn aggregate_mood(events: &[MoodEvent], days: &[NaiveDate]) -> Vec<DailyScore> {
    days.iter()
        .map(|&date| DailyScore {
            date,
            score: events
                .iter()
                .find(|e| e.date == date)
                .map(|e| e.mood.score()),
        })
        .collect()
}

/// Energy level per day, same first-match scan as the mood series but
/// reporting the raw logged level
pub fn aggregate_energy(events: &[EnergyEvent], days: &[NaiveDate]) -> Vec<DailyLevel> {
    days.iter()
        .map(|&date| DailyLevel {
            date,
            level: events.iter().find(|e| e.date == date).map(|e| e.level),
        })
        .collect()
}

/// The three 7-day series the wellness dashboard charts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessTrends {
    pub activity: Vec<DailyCount>,
    pub mood: Vec<DailyScore>,
    pub energy: Vec<DailyLevel>,
}

impl WellnessTrends {
    /// Compute all three series over the default window ending at `today`
    pub fn compute(log: &EventLog, today: NaiveDate) -> Self {
        let days = last_n_days(DEFAULT_WINDOW_DAYS, today);
        Self {
            activity: aggregate_activity(log.activities(), &days),
            mood: aggregate_mood(log.mood_entries(), &days),
            energy: aggregate_energy(log.energy_entries(), &days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Mood;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_last_n_days_is_consecutive_and_ends_today() {
        let today = day("2026-08-27");
        let days = last_n_days(7, today);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0], day("2026-08-21"));
        assert_eq!(days[6], today);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_last_n_days_crosses_month_boundary() {
        let days = last_n_days(7, day("2026-03-03"));
        assert_eq!(days[0], day("2026-02-25"));
        assert_eq!(days[6], day("2026-03-03"));
    }

    #[test]
    fn test_aggregate_activity_empty_events_is_all_zero() {
        let days = last_n_days(7, day("2026-08-27"));
        let series = aggregate_activity(&[], &days);
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_aggregate_activity_counts_all_same_day_events() {
        let today = day("2026-08-27");
        let yesterday = day("2026-08-26");
        let events = vec![
            ActivityEvent::new("walk", today),
            ActivityEvent::new("yoga", today),
            ActivityEvent::new("run", yesterday),
        ];
        let series = aggregate_activity(&events, &last_n_days(7, today));

        assert_eq!(series[6], DailyCount { date: today, count: 2 });
        assert_eq!(series[5], DailyCount { date: yesterday, count: 1 });
        assert!(series[..5].iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_aggregate_activity_ignores_events_outside_window() {
        let today = day("2026-08-27");
        let events = vec![ActivityEvent::new("walk", day("2026-08-01"))];
        let series = aggregate_activity(&events, &last_n_days(7, today));
        assert!(series.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_aggregate_mood_first_stored_match_wins() {
        let today = day("2026-08-27");
        let events = vec![
            MoodEvent::new(Mood::Happy, "", today),
            MoodEvent::new(Mood::Sad, "", today),
        ];
        let series = aggregate_mood(&events, &last_n_days(7, today));

        // First match in stored order, not latest-for-the-day
        assert_eq!(series[6].score, Some(5));
    }

    #[test]
    fn test_aggregate_mood_absent_when_no_entry() {
        let today = day("2026-08-27");
        let events = vec![MoodEvent::new(Mood::Neutral, "", day("2026-08-25"))];
        let series = aggregate_mood(&events, &last_n_days(7, today));

        assert_eq!(series[4].score, Some(3));
        assert_eq!(series[6].score, None);
        assert!(series[..4].iter().all(|d| d.score.is_none()));
    }

    #[test]
    fn test_aggregate_energy_absent_is_distinct_from_logged() {
        let today = day("2026-08-27");
        let events = vec![
            EnergyEvent::new(7, today),
            EnergyEvent::new(2, today),
            EnergyEvent::new(4, day("2026-08-24")),
        ];
        let series = aggregate_energy(&events, &last_n_days(7, today));

        assert_eq!(series[6].level, Some(7)); // first stored match
        assert_eq!(series[3].level, Some(4));
        assert_eq!(series[5].level, None);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let today = day("2026-08-27");
        let days = last_n_days(7, today);
        let events = vec![
            EnergyEvent::new(5, today),
            EnergyEvent::new(9, day("2026-08-23")),
        ];

        let first = aggregate_energy(&events, &days);
        let second = aggregate_energy(&events, &days);
        assert_eq!(first, second);
    }

    #[test]
    fn test_trends_bundle_covers_default_window() {
        let mut log = EventLog::new();
        log.log_activity("walk").unwrap();
        log.log_mood(Mood::Happy, "");
        log.log_energy(6).unwrap();

        let today = chrono::Local::now().date_naive();
        let trends = WellnessTrends::compute(&log, today);

        assert_eq!(trends.activity.len(), DEFAULT_WINDOW_DAYS);
        assert_eq!(trends.activity[6].count, 1);
        assert_eq!(trends.mood[6].score, Some(5));
        assert_eq!(trends.energy[6].level, Some(6));
    }
}
