//! Exponential backoff with full jitter
//!
//! `delay = uniform[0, min(base * multiplier^attempt, max)]`
//!
//! The random source is always passed in; seed a [`rand::rngs::StdRng`] for
//! deterministic tests.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Exponential ceiling for `attempt` (0 = first retry), clamped to `max_delay`
pub fn capped_delay(
    attempt: u32,
    base_delay: Duration,
    multiplier: f64,
    max_delay: Duration,
) -> Duration {
    let max_nanos = max_delay.as_nanos() as f64;
    let exponential = base_delay.as_nanos() as f64 * multiplier.powf(f64::from(attempt));

    // NaN/inf (huge attempt or odd multiplier) collapse to the ceiling
    if !exponential.is_finite() || exponential >= max_nanos {
        return max_delay;
    }
    if exponential <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_nanos(exponential as u64)
}

/// Full-jitter delay drawn uniformly from the closed interval `[0, capped]`
pub fn full_jitter<R: Rng + ?Sized>(
    attempt: u32,
    base_delay: Duration,
    multiplier: f64,
    max_delay: Duration,
    rng: &mut R,
) -> Duration {
    let capped = capped_delay(attempt, base_delay, multiplier, max_delay);
    let capped_nanos = u64::try_from(capped.as_nanos()).unwrap_or(u64::MAX);
    Duration::from_nanos(rng.gen_range(0..=capped_nanos))
}

/// Retry schedule for the payment rail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt (total attempts = max_retries + 1)
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub multiplier: f64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            base_delay_ms: 200,
            multiplier: 2.0,
            max_delay_ms: 3_000,
        }
    }
}

impl RetryPolicy {
    /// Policy that retries immediately (tests)
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay_ms: 0,
            multiplier: 1.0,
            max_delay_ms: 0,
        }
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Upper bound of the wait before retry `attempt`
    pub fn ceiling(&self, attempt: u32) -> Duration {
        capped_delay(attempt, self.base_delay(), self.multiplier, self.max_delay())
    }

    /// Jittered wait before retry `attempt`
    pub fn delay<R: Rng + ?Sized>(&self, attempt: u32, rng: &mut R) -> Duration {
        full_jitter(
            attempt,
            self.base_delay(),
            self.multiplier,
            self.max_delay(),
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BASE: Duration = Duration::from_millis(200);
    const MAX: Duration = Duration::from_secs(3);

    #[test]
    fn test_capped_delay_grows_then_clamps() {
        assert_eq!(capped_delay(0, BASE, 2.0, MAX), Duration::from_millis(200));
        assert_eq!(capped_delay(1, BASE, 2.0, MAX), Duration::from_millis(400));
        assert_eq!(capped_delay(2, BASE, 2.0, MAX), Duration::from_millis(800));
        assert_eq!(capped_delay(3, BASE, 2.0, MAX), Duration::from_millis(1600));
        assert_eq!(capped_delay(4, BASE, 2.0, MAX), MAX);
        assert_eq!(capped_delay(63, BASE, 2.0, MAX), MAX);
        assert_eq!(capped_delay(u32::MAX, BASE, 2.0, MAX), MAX);
    }

    #[test]
    fn test_capped_delay_degenerate_inputs() {
        assert_eq!(capped_delay(3, Duration::ZERO, 2.0, MAX), Duration::ZERO);
        assert_eq!(capped_delay(3, BASE, 0.0, MAX), Duration::ZERO);
        assert_eq!(capped_delay(3, BASE, f64::NAN, MAX), MAX);
        assert_eq!(capped_delay(0, BASE, 2.0, Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_full_jitter_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for attempt in 0..12 {
            let ceiling = capped_delay(attempt, BASE, 2.0, MAX);
            for _ in 0..500 {
                let delay = full_jitter(attempt, BASE, 2.0, MAX, &mut rng);
                assert!(delay <= ceiling, "attempt {attempt}: {delay:?} > {ceiling:?}");
            }
        }
    }

    #[test]
    fn test_full_jitter_spreads_over_interval() {
        // Full jitter: draws should land in both halves of [0, cap]
        let mut rng = StdRng::seed_from_u64(7);
        let ceiling = capped_delay(2, BASE, 2.0, MAX);
        let draws: Vec<Duration> = (0..1_000)
            .map(|_| full_jitter(2, BASE, 2.0, MAX, &mut rng))
            .collect();

        assert!(draws.iter().any(|d| *d < ceiling / 2));
        assert!(draws.iter().any(|d| *d > ceiling / 2));
    }

    #[test]
    fn test_full_jitter_is_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        for attempt in 0..5 {
            assert_eq!(
                full_jitter(attempt, BASE, 2.0, MAX, &mut a),
                full_jitter(attempt, BASE, 2.0, MAX, &mut b)
            );
        }
    }

    #[test]
    fn test_zero_ceiling_yields_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let policy = RetryPolicy::immediate(4);
        for attempt in 0..5 {
            assert_eq!(policy.delay(attempt, &mut rng), Duration::ZERO);
        }
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 4);
        assert_eq!(policy.base_delay(), BASE);
        assert_eq!(policy.max_delay(), MAX);
        assert_eq!(policy.ceiling(1), Duration::from_millis(400));
    }
}
