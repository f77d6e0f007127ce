use chrono::prelude::*;

pub type Timestamp = DateTime<Utc>;

const NANOS_PER_SEC: i64 = 1_000_000_000;

pub trait TimestampTrait: Sized {
    fn from_unix_secs(secs: i64) -> Option<Self>;
    fn unix_epoch() -> Self;
    fn unix_nanos(&self) -> Option<i64>;
    fn to_string_secs(&self) -> String;
}

impl TimestampTrait for Timestamp {
    #[inline]
    fn from_unix_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single()
    }

    #[inline]
    fn unix_epoch() -> Self {
        Self::from(std::time::UNIX_EPOCH)
    }

    // None past the year 2262.
    #[inline]
    fn unix_nanos(&self) -> Option<i64> {
        self.timestamp().checked_mul(NANOS_PER_SEC)
    }

    fn to_string_secs(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}
