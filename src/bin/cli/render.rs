//! Text rendering for scan results and 7-day trend charts

use innerbloom::charts::WellnessTrends;
use innerbloom::stress::ScanReading;

pub fn print_scan(reading: &ScanReading) {
    println!(
        "Stress level: {}% ({})",
        reading.stress_level,
        reading.band().label()
    );
    println!("Heart rate: {} BPM", reading.pulse_bpm);
}

pub fn print_trends(trends: &WellnessTrends) {
    println!("Activity (count per day)");
    for day in &trends.activity {
        println!(
            "  {}  {:>2}  {}",
            day.date.format("%m-%d"),
            day.count,
            "#".repeat(day.count as usize)
        );
    }

    println!("Mood (1-5)");
    for day in &trends.mood {
        match day.score {
            Some(score) => println!("  {}  {}", day.date.format("%m-%d"), score),
            None => println!("  {}  -", day.date.format("%m-%d")),
        }
    }

    println!("Energy (1-10)");
    for day in &trends.energy {
        match day.level {
            Some(level) => println!("  {}  {}", day.date.format("%m-%d"), level),
            None => println!("  {}  -", day.date.format("%m-%d")),
        }
    }
}
