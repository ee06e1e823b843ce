// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Storage pool geometry.
//!
//! A [`StorageLayout`] fixes the total capacity of the pool and the size of
//! every block carved out of it. It supports a compact string form for CLI
//! ergonomics.

use crate::AllocatorError;
use std::fmt;

/// Total capacity and block size of a storage pool, in units.
///
/// # Parsing
/// `"<total>/<block size>"`, e.g. `"1000/100"` → ten blocks of 100 units.
///
/// # Examples
/// ```
/// use block_allocator::StorageLayout;
///
/// let l = StorageLayout::default();
/// assert_eq!(l.block_count(), 10);
///
/// let l = StorageLayout::parse("600/200").unwrap();
/// assert_eq!(l.block_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct StorageLayout {
    total_capacity: u32,
    block_size: u32,
}

/// Unvalidated wire form; deserialisation goes through [`StorageLayout::new`].
#[derive(serde::Deserialize)]
struct RawLayout {
    total_capacity: u32,
    block_size: u32,
}

impl TryFrom<RawLayout> for StorageLayout {
    type Error = AllocatorError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Self::new(raw.total_capacity, raw.block_size)
    }
}

impl StorageLayout {
    /// Default pool size.
    pub const DEFAULT_TOTAL_CAPACITY: u32 = 1000;
    /// Default block size.
    pub const DEFAULT_BLOCK_SIZE: u32 = 100;

    /// Creates a layout, rejecting geometries that yield no blocks.
    pub fn new(total_capacity: u32, block_size: u32) -> Result<Self, AllocatorError> {
        if block_size == 0 {
            return Err(AllocatorError::InvalidLayout {
                total_capacity,
                block_size,
                reason: "block size must be positive",
            });
        }
        if block_size > total_capacity {
            return Err(AllocatorError::InvalidLayout {
                total_capacity,
                block_size,
                reason: "block size exceeds total capacity",
            });
        }
        Ok(Self {
            total_capacity,
            block_size,
        })
    }

    /// Total capacity in units, as configured.
    ///
    /// When the capacity is not a multiple of the block size the remainder
    /// is never carved into a block, but it is still reported here.
    pub fn total_capacity(&self) -> u32 {
        self.total_capacity
    }

    /// Size of every block in units.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of blocks the pool is divided into.
    pub fn block_count(&self) -> usize {
        (self.total_capacity / self.block_size) as usize
    }

    /// Parses `"<total>/<block size>"`. Whitespace around either number is ignored.
    pub fn parse(s: &str) -> Result<Self, AllocatorError> {
        let unparsable = || AllocatorError::UnparsableLayout {
            input: s.to_string(),
        };

        let (total, block) = s.split_once('/').ok_or_else(unparsable)?;
        let total: u32 = total.trim().parse().map_err(|_| unparsable())?;
        let block: u32 = block.trim().parse().map_err(|_| unparsable())?;
        Self::new(total, block)
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            total_capacity: Self::DEFAULT_TOTAL_CAPACITY,
            block_size: Self::DEFAULT_BLOCK_SIZE,
        }
    }
}

impl fmt::Display for StorageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} units in {} blocks of {}",
            self.total_capacity,
            self.block_count(),
            self.block_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let l = StorageLayout::default();
        assert_eq!(l.total_capacity(), 1000);
        assert_eq!(l.block_size(), 100);
        assert_eq!(l.block_count(), 10);
    }

    #[test]
    fn test_uneven_capacity() {
        let l = StorageLayout::new(250, 100).unwrap();
        assert_eq!(l.block_count(), 2);
        assert_eq!(l.total_capacity(), 250);
    }

    #[test]
    fn test_rejects_zero_block() {
        assert!(matches!(
            StorageLayout::new(100, 0),
            Err(AllocatorError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_block() {
        assert!(matches!(
            StorageLayout::new(50, 100),
            Err(AllocatorError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!(StorageLayout::parse("1000/100").unwrap(), StorageLayout::default());
        assert_eq!(StorageLayout::parse(" 300 / 50 ").unwrap().block_count(), 6);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            StorageLayout::parse("1000"),
            Err(AllocatorError::UnparsableLayout { .. })
        ));
        assert!(StorageLayout::parse("a/b").is_err());
        assert!(StorageLayout::parse("100/0").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StorageLayout::default().to_string(),
            "1000 units in 10 blocks of 100"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let l = StorageLayout::new(400, 40).unwrap();
        let json = serde_json::to_string(&l).unwrap();
        let back: StorageLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(l, back);
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<StorageLayout, _> =
            serde_json::from_str(r#"{"total_capacity":100,"block_size":0}"#);
        assert!(result.is_err());
    }
}
