use std::hint::black_box;
use std::time::{Duration, Instant};

/// Runs `f` `runs` times (at least once) and returns the average wall time per run.
pub fn time_callable<T>(mut f: impl FnMut() -> T, runs: usize) -> Duration {
    let runs = runs.max(1);
    let stime = Instant::now();
    for _ in 0..runs {
        black_box(f());
    }
    stime.elapsed() / runs as u32
}
