use std::fmt;

/// The most recent known-good pair of channel statistics.
///
/// Only ever built from a response that passed every validation gate, so both
/// counts are non-zero. The cache replaces the whole value on refresh and never
/// mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub subscriber_count: u64,
    pub view_count: u64,
    /// Time bucket (`floor(unix_seconds / 100)`) in which the snapshot was fetched.
    pub bucket: i64,
}

/// A statistic published to its own status channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatDimension {
    Subscribers,
    Views,
}

impl StatDimension {
    /// Prefix of the channel name, e.g. `"Subs: "`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Subscribers => "Subs: ",
            Self::Views => "Views: ",
        }
    }

    pub fn pick(self, snapshot: &MetricSnapshot) -> u64 {
        match self {
            Self::Subscribers => snapshot.subscriber_count,
            Self::Views => snapshot.view_count,
        }
    }
}

impl fmt::Display for StatDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subscribers => write!(f, "sub"),
            Self::Views => write!(f, "view"),
        }
    }
}
