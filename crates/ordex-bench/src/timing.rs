//! Wall-clock timing helpers.

use std::hint::black_box;
use std::time::Instant;

/// Runs `f` once and returns the elapsed time in nanoseconds.
/// The result is passed through `black_box` so the call is not optimised out.
#[inline]
pub fn measure_ns<R, F: FnOnce() -> R>(f: F) -> u64 {
    let start = Instant::now();
    black_box(f());
    start.elapsed().as_nanos() as u64
}

/// Mean of `iterations` separate timings of `f`. Zero iterations yield 0.
pub fn average_ns<R, F: FnMut() -> R>(iterations: usize, mut f: F) -> u64 {
    if iterations == 0 {
        return 0;
    }
    let total: u128 = (0..iterations).map(|_| measure_ns(&mut f) as u128).sum();
    (total / iterations as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_measure_ns_sleep() {
        let ns = measure_ns(|| std::thread::sleep(Duration::from_millis(2)));
        assert!(ns >= 2_000_000);
    }

    #[test]
    fn test_average_ns_calls_each_iteration() {
        let mut calls = 0;
        average_ns(25, || calls += 1);
        assert_eq!(calls, 25);
    }

    #[test]
    fn test_average_ns_zero_iterations() {
        let mut calls = 0;
        assert_eq!(average_ns(0, || calls += 1), 0);
        assert_eq!(calls, 0);
    }
}
