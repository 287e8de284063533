//! Participant identity.
//!
//! ## Principal
//!
//! Opaque 20-byte identity supplied by the caller. The engine never
//! authenticates it; it only compares principals for equality and orders
//! them for deterministic iteration.
//!
//! The all-zero value is reserved: it is never a valid participant and
//! is rejected at the registry boundary with `GameError::ZeroPrincipal`.
//! Inside the engine "unset" is always modelled as `Option<Principal>`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::error::GameError;

/// Opaque participant identity (account-address sized).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Principal([u8; Principal::LEN]);

impl Principal {
    /// Length of the identity in bytes.
    pub const LEN: usize = 20;

    /// The reserved "unset" sentinel.
    pub const ZERO: Self = Self([0; Self::LEN]);

    /// Create a principal from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Build a principal whose trailing 8 bytes hold `n` (big-endian).
    ///
    /// Handy for tests and tooling that need many distinct identities.
    ///
    /// ```
    /// use gomoku_engine::core::Principal;
    ///
    /// let alice = Principal::from_index(1);
    /// let bob = Principal::from_index(2);
    /// assert_ne!(alice, bob);
    /// assert!(Principal::from_index(0).is_zero());
    /// ```
    #[must_use]
    pub const fn from_index(n: u64) -> Self {
        let tail = n.to_be_bytes();
        let mut bytes = [0u8; Self::LEN];
        let mut i = 0;
        while i < tail.len() {
            bytes[Self::LEN - tail.len() + i] = tail[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Raw bytes of this identity.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Is this the reserved sentinel?
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < Self::LEN {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Reject the sentinel.
    pub fn ensure_valid(self) -> Result<Self, GameError> {
        if self.is_zero() {
            Err(GameError::ZeroPrincipal)
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Failure to parse a principal from its hex form.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error(transparent)]
pub struct ParsePrincipalError(#[from] hex::FromHexError);

impl FromStr for Principal {
    type Err = ParsePrincipalError;

    /// Parse `0x`-prefixed (or bare) 40-digit hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; Self::LEN];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }
}

/// Serialized as the same `0x` hex string `Display` produces.
impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
