pub mod series;

pub use series::{
    aggregate_activity, aggregate_energy, aggregate_mood, last_n_days, DailyCount, DailyLevel,
    DailyScore, WellnessTrends, DEFAULT_WINDOW_DAYS,
};
