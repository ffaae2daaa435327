use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Duration measured in nanoseconds, i.e., the same unit as [`crate::domain::BlockTimestamp`]
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Default,
    Hash,
)]
pub struct TimestampDuration(u64);

impl TimestampDuration {
    pub const ZERO: TimestampDuration = TimestampDuration(0);

    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// saturates at `u64::MAX` nanos
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(NANOS_PER_SEC))
    }

    pub fn nanos(&self) -> u64 {
        self.0
    }

    pub fn secs(&self) -> u64 {
        self.0 / NANOS_PER_SEC
    }
}

impl Display for TimestampDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

impl Serialize for TimestampDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for TimestampDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <String as Deserialize>::deserialize(deserializer)?;
        u64::from_str(&value)
            .map(TimestampDuration)
            .map_err(|err| de::Error::custom(format!("invalid duration: {}", err)))
    }
}
