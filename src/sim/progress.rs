use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// progress logging for a long Monte Carlo run. tick counting is atomic so
/// the engine's parallel sessions can share one instance through the
/// completed-count callback.
pub struct Progress {
    total: usize,
    check: usize,
    ticks: AtomicUsize,
    begin: Instant,
}

impl Progress {
    /// log roughly n times over the whole run.
    pub fn new(total: usize, n: usize) -> Self {
        Self {
            total,
            check: (total / n).max(1),
            ticks: AtomicUsize::new(0),
            begin: Instant::now(),
        }
    }

    pub fn tick(&self) {
        let ticks = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        if ticks % self.check == 0 {
            let elapsed = self.begin.elapsed();
            log::info!(
                "progress: {:8.0?} {:>10} {:6.2}%   mean {:6.0}/s",
                elapsed,
                ticks,
                ticks as f64 / self.total as f64 * 100.,
                ticks as f64 / elapsed.as_secs_f64().max(1e-9),
            );
        }
    }
}
