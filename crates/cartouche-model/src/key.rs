//! Cart line identity hashing
//!
//! Provides [`LineItemKey`], a strongly-typed 32-byte hash identifying one
//! cart line. Two add-to-cart submissions with the same product, variation,
//! and personalization title hash to the same key, so their quantities merge
//! instead of producing duplicate lines.

use crate::ids::ProductId;
use sha2::{Digest, Sha256};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte line identity hash (SHA-256)
///
/// Immutable and cheap to clone (Copy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineItemKey([u8; 32]);

impl LineItemKey {
    /// Create a new LineItemKey from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create key from byte slice
    ///
    /// # Errors
    /// Returns error if slice length is not exactly 32 bytes
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != 32 {
            return Err(KeyError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Compute SHA-256 hash of arbitrary data
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&digest);
        Self(arr)
    }

    /// Compute the key for one cart line identity
    ///
    /// # Contract
    /// - Deterministic: same (product, variation, title) always yields the same key
    /// - Any component change yields a different key
    ///
    /// Components are length-delimited before hashing so adjacent fields
    /// cannot alias each other.
    #[must_use]
    pub fn for_line(
        product_id: &ProductId,
        variation_id: Option<&ProductId>,
        title: Option<&str>,
    ) -> Self {
        let mut buf = Vec::with_capacity(64);
        push_component(&mut buf, product_id.to_string().as_bytes());
        match variation_id {
            Some(v) => push_component(&mut buf, v.to_string().as_bytes()),
            None => push_component(&mut buf, &[]),
        }
        match title {
            Some(t) => push_component(&mut buf, t.as_bytes()),
            None => push_component(&mut buf, &[]),
        }
        Self::compute(&buf)
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

fn push_component(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
    buf.extend_from_slice(bytes);
}

impl Display for LineItemKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for LineItemKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8; 32]> for LineItemKey {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}

impl serde::Serialize for LineItemKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LineItemKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when working with line item keys
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// Invalid key length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Hex encoding error
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_deterministic() {
        let product = ProductId::new();
        let a = LineItemKey::for_line(&product, None, Some("Gift Message"));
        let b = LineItemKey::for_line(&product, None, Some("Gift Message"));
        assert_eq!(a, b);
    }

    #[test]
    fn title_change_changes_key() {
        let product = ProductId::new();
        let a = LineItemKey::for_line(&product, None, Some("Gift Message"));
        let b = LineItemKey::for_line(&product, None, Some("Other Message"));
        assert_ne!(a, b);
    }

    #[test]
    fn variation_changes_key() {
        let product = ProductId::new();
        let variation = ProductId::new();
        let a = LineItemKey::for_line(&product, None, None);
        let b = LineItemKey::for_line(&product, Some(&variation), None);
        assert_ne!(a, b);
    }

    #[test]
    fn length_delimiting_prevents_component_aliasing() {
        // ("ab", "") must hash differently from ("a", "b").
        let mut buf = Vec::new();
        push_component(&mut buf, b"ab");
        push_component(&mut buf, b"");
        let left = LineItemKey::compute(&buf);
        let mut buf = Vec::new();
        push_component(&mut buf, b"a");
        push_component(&mut buf, b"b");
        let right = LineItemKey::compute(&buf);
        assert_ne!(left, right);
    }

    #[test]
    fn display_roundtrip() {
        let key = LineItemKey::compute(b"roundtrip");
        let parsed: LineItemKey = key.to_string().parse().unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn from_slice_rejects_bad_length() {
        assert!(LineItemKey::from_slice(&[0u8; 31]).is_err());
        assert!(LineItemKey::from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn short_is_prefix_of_display() {
        let key = LineItemKey::compute(b"short");
        assert!(key.to_string().starts_with(&key.short()));
        assert_eq!(key.short().len(), 16);
    }
}
