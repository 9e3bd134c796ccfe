/// Source of the current time for expiry checks.
pub trait Clock {
    fn now_epoch_seconds(&self) -> i64;
}

/// Wall clock (`chrono::Utc::now`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock frozen at a given epoch second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> i64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_epoch_seconds(&self) -> i64 {
        (**self).now_epoch_seconds()
    }
}
