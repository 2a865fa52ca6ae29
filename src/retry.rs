//! Bounded passive retry.
//!
//! Pages that render client-side may not have a title yet on the first read.
//! The caller re-reads once after a fixed delay; the extraction core itself
//! never waits.

use std::convert::Infallible;
use std::thread;
use std::time::Duration;

/// Fixed-delay retry with a bounded number of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 behave as 1.
    pub max_attempts: u32,

    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that tries once.
    #[must_use]
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }

    /// Run `attempt` until it yields `Some` or attempts run out.
    ///
    /// The closure receives the zero-based attempt number.
    pub fn run<T>(&self, mut attempt: impl FnMut(u32) -> Option<T>) -> Option<T> {
        match self.try_run(|n| Ok::<_, Infallible>(attempt(n))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Like [`RetryPolicy::run`], but an `Err` ends the loop immediately.
    ///
    /// A page that cannot be read at all will not become readable by waiting,
    /// so errors are not retried.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `attempt`.
    pub fn try_run<T, E>(
        &self,
        mut attempt: impl FnMut(u32) -> Result<Option<T>, E>,
    ) -> Result<Option<T>, E> {
        let attempts = self.max_attempts.max(1);
        for n in 0..attempts {
            if n > 0 {
                tracing::debug!(attempt = n + 1, delay = ?self.delay, "retrying");
                if !self.delay.is_zero() {
                    thread::sleep(self.delay);
                }
            }
            if let Some(value) = attempt(n)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn default_is_two_attempts_two_seconds() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 2);
        assert_eq!(policy.delay, Duration::from_secs(2));
    }

    #[test]
    fn first_success_stops_retrying() {
        let mut calls = 0;
        let result = fast(2).run(|_| {
            calls += 1;
            Some("ok")
        });
        assert_eq!(result, Some("ok"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn second_attempt_can_succeed() {
        let result = fast(2).run(|n| (n == 1).then_some(n));
        assert_eq!(result, Some(1));
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut calls = 0;
        let result: Option<()> = fast(2).run(|_| {
            calls += 1;
            None
        });
        assert_eq!(result, None);
        assert_eq!(calls, 2);
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let mut calls = 0;
        let _: Option<()> = fast(0).run(|_| {
            calls += 1;
            None
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn try_run_stops_on_error() {
        let mut calls = 0;
        let result: Result<Option<()>, &str> = fast(2).try_run(|_| {
            calls += 1;
            Err("gone")
        });
        assert_eq!(result, Err("gone"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn try_run_retries_misses() {
        let result: Result<Option<u32>, &str> = fast(2).try_run(|n| Ok((n == 1).then_some(7)));
        assert_eq!(result, Ok(Some(7)));
    }

    #[test]
    fn delay_is_applied_between_attempts() {
        let policy = RetryPolicy {
            max_attempts: 2,
            delay: Duration::from_millis(20),
        };
        let start = std::time::Instant::now();
        let _: Option<()> = policy.run(|_| None);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
