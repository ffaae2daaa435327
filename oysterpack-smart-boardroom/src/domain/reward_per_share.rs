use near_sdk::{
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
};
use oysterpack_smart_fungible_token::TokenAmount;
use oysterpack_smart_near::{DECIMALS_18, U256};
use std::{
    fmt::{self, Display, Formatter},
    io::{self, Write},
    ops::{Add, Sub},
};

/// Cumulative reward per unit of stake, as fixed point with 18 decimals.
///
/// Divisions round down, which means rewards are never over distributed. Rounding dust stays in
/// boardroom custody.
///
/// Serialized to JSON as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RewardPerShare(U256);

impl RewardPerShare {
    /// `amount * 10^18 / total_staked` rounded down
    ///
    /// ## Panics
    /// if `total_staked` is zero
    pub fn from_allocation(amount: TokenAmount, total_staked: TokenAmount) -> Self {
        Self(U256::from(*amount) * U256::from(DECIMALS_18) / U256::from(*total_staked))
    }

    /// `balance * reward_per_share / 10^18` rounded down
    pub fn earnings(&self, balance: TokenAmount) -> TokenAmount {
        let earnings = U256::from(*balance) * self.0 / U256::from(DECIMALS_18);
        earnings.as_u128().into()
    }

    pub fn value(&self) -> U256 {
        self.0
    }
}

impl From<U256> for RewardPerShare {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for RewardPerShare {
    type Output = RewardPerShare;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// cumulative values never decrease, thus only a later value minus an earlier value is valid
impl Sub for RewardPerShare {
    type Output = RewardPerShare;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Display for RewardPerShare {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// stored as 4 little-endian u64 words
impl BorshSerialize for RewardPerShare {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let words: [u64; 4] = (self.0).0;
        BorshSerialize::serialize(&words, writer)
    }
}

impl BorshDeserialize for RewardPerShare {
    fn deserialize(buf: &mut &[u8]) -> io::Result<Self> {
        let words = <[u64; 4] as BorshDeserialize>::deserialize(buf)?;
        Ok(Self(U256(words)))
    }
}

impl Serialize for RewardPerShare {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for RewardPerShare {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <String as Deserialize>::deserialize(deserializer)?;
        U256::from_dec_str(&value)
            .map(RewardPerShare)
            .map_err(|err| de::Error::custom(format!("invalid reward per share: {:?}", err)))
    }
}
