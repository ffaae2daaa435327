use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};
use oysterpack_smart_near::data::numbers::U128;
use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign},
};

/// Token amounts are serialized to JSON as strings.
///
/// Arithmetic panics on overflow and underflow - contracts are compiled with `overflow-checks`.
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
)]
#[serde(crate = "near_sdk::serde")]
pub struct TokenAmount(pub U128);

impl TokenAmount {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self.0 == 0
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl Deref for TokenAmount {
    type Target = u128;

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl DerefMut for TokenAmount {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.deref_mut()
    }
}

impl Add for TokenAmount {
    type Output = TokenAmount;

    fn add(self, rhs: Self) -> Self::Output {
        (*self + *rhs).into()
    }
}

impl AddAssign for TokenAmount {
    fn add_assign(&mut self, rhs: Self) {
        **self += *rhs;
    }
}

impl Sub for TokenAmount {
    type Output = TokenAmount;

    fn sub(self, rhs: Self) -> Self::Output {
        (*self - *rhs).into()
    }
}

impl SubAssign for TokenAmount {
    fn sub_assign(&mut self, rhs: Self) {
        **self -= *rhs;
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use near_sdk::serde_json;

    #[test]
    fn arithmetic() {
        let mut amount = TokenAmount::from(100);
        amount += 50.into();
        assert_eq!(amount, 150.into());
        amount -= 100.into();
        assert_eq!(amount, 50.into());
        assert_eq!(amount + amount, 100.into());
        assert_eq!(amount - amount, TokenAmount::zero());
        assert!((amount - amount).is_zero());
    }

    #[test]
    #[should_panic]
    fn underflow() {
        let _ = TokenAmount::from(1) - TokenAmount::from(2);
    }

    #[test]
    fn json() {
        let amount = TokenAmount::from(u128::MAX);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, format!("\"{}\"", u128::MAX));
    }
}
