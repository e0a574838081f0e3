//! Content-id fingerprints for compiled component artifacts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit content id computed using XXH3.
///
/// Used as a stable cross-stage key for a compiled component generation.
/// Two descriptors with the same `ContentId` were produced from the same
/// normalized path (and, in production builds, the same source text).
/// The hash is non-cryptographic; collision resistance is only needed
/// against accidental collisions, not adversaries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId([u8; 16]);

impl ContentId {
    /// Computes a content id from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentId({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}
