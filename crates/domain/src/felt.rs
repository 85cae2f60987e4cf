use alloy_primitives::U256;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Starknet field prime: 2^251 + 17 * 2^192 + 1.
const FIELD_PRIME: U256 = U256::from_limbs([1, 0, 0, 0x0800_0000_0000_0011]);

/// 2^250 - 1
const MASK_250: U256 = U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, 0x03ff_ffff_ffff_ffff]);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeltError {
    #[error("empty numeral")]
    Empty,

    #[error("invalid numeral: {0}")]
    InvalidNumeral(String),

    #[error("value exceeds the field prime: {0}")]
    OutOfRange(String),
}

/// A Starknet field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Felt(U256);

impl Felt {
    pub const ZERO: Felt = Felt(U256::ZERO);

    pub fn from_u256(value: U256) -> Result<Self, FeltError> {
        if value >= FIELD_PRIME {
            return Err(FeltError::OutOfRange(format!("{:#x}", value)));
        }
        Ok(Self(value))
    }

    /// Parses a `0x`-prefixed hexadecimal or a plain decimal numeral.
    pub fn parse(numeral: &str) -> Result<Self, FeltError> {
        let numeral = numeral.trim();
        if numeral.is_empty() {
            return Err(FeltError::Empty);
        }

        let (digits, radix) = match numeral
            .strip_prefix("0x")
            .or_else(|| numeral.strip_prefix("0X"))
        {
            Some(hex) => (hex, 16),
            None => (numeral, 10),
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix as u32)) {
            return Err(FeltError::InvalidNumeral(numeral.to_string()));
        }

        let value = U256::from_str_radix(digits, radix)
            .map_err(|_| FeltError::OutOfRange(numeral.to_string()))?;
        Self::from_u256(value)
    }

    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, FeltError> {
        let value = U256::try_from_be_slice(bytes)
            .ok_or_else(|| FeltError::OutOfRange(format!("{} bytes", bytes.len())))?;
        Self::from_u256(value)
    }

    /// Keeps the low 250 bits of a big-endian word, which always lands
    /// below the field prime.
    pub fn from_be_bytes_masked(bytes: [u8; 32]) -> Self {
        Self(U256::from_be_bytes(bytes) & MASK_250)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Small values only: lengths and indices read out of calldata.
    pub fn to_usize(&self) -> Option<usize> {
        if self.0 > U256::from(u64::MAX) {
            return None;
        }
        usize::try_from(self.0.as_limbs()[0]).ok()
    }

    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl FromStr for Felt {
    type Err = FeltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for Felt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct FeltVisitor;

impl<'de> Visitor<'de> for FeltVisitor {
    type Value = Felt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a numeral string or a non-negative integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Felt, E> {
        Felt::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Felt, E> {
        Ok(Felt::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Felt, E> {
        u64::try_from(v)
            .map(Felt::from)
            .map_err(|_| E::custom(format!("negative value {v} is not a field element")))
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FeltVisitor)
    }
}
