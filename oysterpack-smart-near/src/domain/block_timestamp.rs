use crate::domain::TimestampDuration;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
};
use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Deref},
    str::FromStr,
};

/// Block timestamp, i.e, number of non-leap-nanoseconds since January 1, 1970 0:00:00 UTC.
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
pub struct BlockTimestamp(u64);

impl BlockTimestamp {
    pub fn from_env() -> Self {
        Self(env::block_timestamp())
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockTimestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Deref for BlockTimestamp {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// saturates at `u64::MAX`
impl Add<TimestampDuration> for BlockTimestamp {
    type Output = BlockTimestamp;

    fn add(self, rhs: TimestampDuration) -> Self::Output {
        Self(self.0.saturating_add(rhs.nanos()))
    }
}

impl Display for BlockTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for BlockTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for BlockTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <String as Deserialize>::deserialize(deserializer)?;
        u64::from_str(&value)
            .map(BlockTimestamp)
            .map_err(|err| de::Error::custom(format!("invalid block timestamp: {}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use near_sdk::serde_json;
    use oysterpack_smart_near_test::*;

    #[test]
    fn from_env() {
        let mut ctx = new_context("bob");
        ctx.block_timestamp = 1000;
        testing_env!(ctx);

        assert_eq!(BlockTimestamp::from_env(), BlockTimestamp::from(1000));
        assert_eq!(
            BlockTimestamp::from_env() + TimestampDuration::from_nanos(500),
            BlockTimestamp::from(1500)
        );
        assert_eq!(
            BlockTimestamp::from(u64::MAX) + TimestampDuration::from_secs(1),
            BlockTimestamp::from(u64::MAX)
        );
    }

    #[test]
    fn json() {
        let timestamp = BlockTimestamp::from(u64::MAX);
        let json = serde_json::to_string(&timestamp).unwrap();
        assert_eq!(json, format!("\"{}\"", u64::MAX));
        assert_eq!(
            serde_json::from_str::<BlockTimestamp>(&json).unwrap(),
            timestamp
        );
    }
}
