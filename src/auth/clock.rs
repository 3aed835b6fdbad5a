//! Time source capability.
//!
//! Token issuance and validation never read the wall clock directly; they
//! go through [`Clock`] so time-dependent behavior is deterministic under
//! simulated time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// Wall clock used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Settable clock for simulated time. Cloning shares the underlying
/// instant, so a clone handed to a service can be advanced from the test.
#[derive(Debug, Clone)]
pub struct FixedClock {
    epoch_secs: Arc<AtomicU64>,
}

impl FixedClock {
    pub fn at(instant: SystemTime) -> Self {
        let secs = instant
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            epoch_secs: Arc::new(AtomicU64::new(secs)),
        }
    }

    pub fn at_epoch_secs(secs: u64) -> Self {
        Self {
            epoch_secs: Arc::new(AtomicU64::new(secs)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.epoch_secs.fetch_add(by.as_secs(), Ordering::SeqCst);
    }

    pub fn set(&self, instant: SystemTime) {
        let secs = instant
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.epoch_secs.store(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.epoch_secs.load(Ordering::SeqCst))
    }
}
