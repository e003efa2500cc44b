use std::time::{Duration, Instant};

pub fn to_millis(duration: Duration) -> u64 {
    (duration.as_secs() * 1_000) + (duration.subsec_nanos() / 1_000_000) as u64
}

/// Runs `work` and reports how long it took, to spot slow steps of the analyses.
pub fn timed<T, F: FnOnce() -> T>(label: &str, work: F) -> T {
    let start = Instant::now();
    let result = work();
    println!("\"{}\" ({}ms)", label, to_millis(start.elapsed()));
    result
}
