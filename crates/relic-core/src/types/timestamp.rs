use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Timestamp
/// (in seconds)
///
/// Audit timestamps are second-granular; the engine never compares finer
/// than that.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    /// Construct from seconds since the Unix epoch.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Current wall-clock time, clamped to the epoch on a pre-1970 clock.
    #[must_use]
    pub fn now() -> Self {
        let secs = chrono::Utc::now().timestamp();

        Self(u64::try_from(secs).unwrap_or(u64::MIN))
    }

    #[must_use]
    pub const fn as_seconds(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_epoch(self) -> bool {
        self.0 == 0
    }
}
