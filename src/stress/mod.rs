pub mod scan;

pub use scan::{simulate_scan, ScanReading, StressBand, SCAN_DURATION_MS};
