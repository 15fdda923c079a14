//! The timing harness: clone, time, verify, reduce

use std::time::{Duration, Instant};

/// The timing samples for one (dataset, variant) pair
#[derive(Debug)]
pub struct Timing {
    /// Elapsed wall-clock time of every run, in order
    pub samples: Vec<Duration>,
    /// Streaming statistics over the samples in seconds, for live display
    pub stats: rolling_stats::Stats<f64>,
}

impl Timing {
    /// Mean elapsed seconds over all runs
    pub fn mean(&self) -> f64 {
        let k = self.samples.len() as f64;
        self.samples.iter().map(Duration::as_secs_f64).sum::<f64>() / k
    }

    /// Population standard deviation in seconds (divisor `k`, not `k - 1`)
    pub fn std_dev(&self) -> f64 {
        let k = self.samples.len() as f64;
        let mean = self.mean();
        let variance = self
            .samples
            .iter()
            .map(|sample| (sample.as_secs_f64() - mean).powi(2))
            .sum::<f64>()
            / k;
        variance.sqrt()
    }
}

/// Time a single run of `sort` on a private copy of `data`
///
/// The copy is mandatory: the algorithms sort in place, and timing a later
/// repetition on already-sorted data would invalidate the measurement. No
/// I/O happens inside the timed region.
pub fn measure<F: FnOnce(&mut [i64])>(data: &[i64], sort: F) -> (Duration, Vec<i64>) {
    let mut copy = data.to_vec();

    let now = Instant::now();
    sort(std::hint::black_box(&mut copy));
    let elapsed = now.elapsed();

    debug_assert!(copy.is_sorted(), "data is not sorted after algorithm run");

    (elapsed, copy)
}

/// Time `runs` independent runs of `sort` over `data`
///
/// Every run is timed; `on_run` fires after each sample so progress
/// reporting stays outside the timed region.
pub fn sample<F, P>(data: &[i64], runs: usize, mut sort: F, mut on_run: P) -> Timing
where
    F: FnMut(&mut [i64]),
    P: FnMut(&rolling_stats::Stats<f64>),
{
    let mut samples = Vec::with_capacity(runs);
    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();

    for _ in 0..runs {
        let (elapsed, _) = measure(data, &mut sort);

        samples.push(elapsed);
        stats.update(elapsed.as_secs_f64());
        on_run(&stats);
    }

    Timing { samples, stats }
}
