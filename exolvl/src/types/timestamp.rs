//! Editor timestamps
//!
//! Stored as a .NET `DateTime` binary value: a signed 64-bit count of
//! 100ns ticks since 0001-01-01, with the top two bits holding the
//! `DateTimeKind`. The raw value is kept so writes are bit-exact.

use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::io::{Read, Write};

const TICKS_PER_SECOND: i64 = 10_000_000;

/// Seconds between 0001-01-01 and 1970-01-01
const UNIX_EPOCH_SECONDS: i64 = 62_135_596_800;

/// Low 62 bits carry the tick count
const TICKS_MASK: i64 = 0x3FFF_FFFF_FFFF_FFFF;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current UTC time
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Convert from a UTC datetime, saturating outside the tick range
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let seconds = datetime.timestamp().saturating_add(UNIX_EPOCH_SECONDS);
        let sub_ticks = i64::from(datetime.timestamp_subsec_nanos() / 100);
        Self(
            seconds
                .saturating_mul(TICKS_PER_SECOND)
                .saturating_add(sub_ticks)
                .clamp(0, TICKS_MASK),
        )
    }

    /// Tick count with the kind bits stripped
    pub fn ticks(self) -> i64 {
        self.0 & TICKS_MASK
    }

    /// `None` only if the ticks fall outside chrono's range
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let ticks = self.ticks();
        let seconds = ticks.div_euclid(TICKS_PER_SECOND) - UNIX_EPOCH_SECONDS;
        let nanos = (ticks.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
        DateTime::from_timestamp(seconds, nanos)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl Decode for Timestamp {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(Self(i64::decode(reader)?))
    }
}

impl Encode for Timestamp {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        self.0.encode(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unix_epoch() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        let stamp = Timestamp::from_datetime(epoch);
        assert_eq!(stamp.0, 621_355_968_000_000_000);
        assert_eq!(stamp.to_datetime(), Some(epoch));
    }

    #[test]
    fn test_sub_second_precision() {
        let datetime = Utc.timestamp_opt(1_700_000_000, 123_456_700).unwrap();
        assert_eq!(Timestamp::from(datetime).to_datetime(), Some(datetime));
    }

    #[test]
    fn test_kind_bits_ignored_but_kept() {
        let utc_kind = 1i64 << 62;
        let stamp = Timestamp(621_355_968_000_000_000 | utc_kind);
        assert_eq!(stamp.ticks(), 621_355_968_000_000_000);
        assert_eq!(stamp.to_datetime().unwrap().timestamp(), 0);
        assert_eq!(stamp.0 & utc_kind, utc_kind);
    }
}
