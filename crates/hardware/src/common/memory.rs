//! Word-Addressed Memory.
//!
//! This module provides the storage used for both instruction and data memory.
//! It provides:
//! 1. **Bounds Checking:** Every access is checked against a fixed capacity and
//!    reports [`SimError::OutOfBounds`] instead of touching foreign storage.
//! 2. **Lazy Growth:** Backing storage only grows as far as the highest word
//!    written, so per-cycle state snapshots stay cheap to clone.
//! 3. **Zero Fill:** Words inside the capacity that were never written read as 0.

use crate::common::error::{MemoryRegion, SimError};
use crate::isa::instruction::Word;

/// A fixed-capacity, word-addressed memory.
///
/// `loaded` records how many words came from the program image; the
/// diagnostic dump prints exactly that many data words regardless of how
/// far stores have grown the backing vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    region: MemoryRegion,
    words: Vec<Word>,
    capacity: usize,
    loaded: usize,
}

impl Memory {
    /// Creates a memory pre-loaded with `image`.
    ///
    /// # Arguments
    ///
    /// * `region` - Which memory this is, used in error reports.
    /// * `image` - Initial contents starting at address 0.
    /// * `capacity` - Number of addressable words; callers guarantee `image.len() <= capacity`.
    pub fn with_image(region: MemoryRegion, image: &[Word], capacity: usize) -> Self {
        Self {
            region,
            words: image.to_vec(),
            capacity,
            loaded: image.len(),
        }
    }

    /// Number of addressable words.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of words that came from the program image.
    pub const fn loaded_len(&self) -> usize {
        self.loaded
    }

    /// Words that came from the program image, with any later stores applied.
    pub fn loaded_words(&self) -> impl Iterator<Item = Word> + '_ {
        (0..self.loaded).map(|i| self.words.get(i).copied().unwrap_or(0))
    }

    fn index(&self, addr: i32) -> Result<usize, SimError> {
        usize::try_from(addr)
            .ok()
            .filter(|&i| i < self.capacity)
            .ok_or_else(|| SimError::OutOfBounds {
                region: self.region,
                addr: i64::from(addr),
                capacity: self.capacity,
            })
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if `addr` is negative or not below the capacity.
    pub fn read(&self, addr: i32) -> Result<Word, SimError> {
        let idx = self.index(addr)?;
        Ok(self.words.get(idx).copied().unwrap_or(0))
    }

    /// Writes `val` to the word at `addr`, growing the backing storage if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if `addr` is negative or not below the capacity.
    pub fn write(&mut self, addr: i32, val: Word) -> Result<(), SimError> {
        let idx = self.index(addr)?;
        if idx >= self.words.len() {
            self.words.resize(idx + 1, 0);
        }
        self.words[idx] = val;
        Ok(())
    }
}
