use chrono::Utc;

/// Source of wall-clock time in whole Unix seconds.
pub trait Clock: Send + Sync {
    fn now_seconds(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

#[cfg(test)]
pub use manual::ManualClock;
