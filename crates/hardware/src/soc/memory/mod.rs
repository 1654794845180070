//! System RAM.
//!
//! Word-addressed storage behind the RAM half of the address space. It provides:
//! 1. **Image Loading:** Initial contents from a memory image, zero-padded to capacity.
//! 2. **Masked Writes:** Per-byte-lane write enables as produced by the load/store unit.
//! 3. **Permissive Range:** Reads past the end return 0 and writes past the end are dropped.

use crate::common::error::ImageError;

/// Word-addressed RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    words: Vec<u32>,
}

impl Ram {
    /// Creates RAM holding `image` followed by zeros.
    ///
    /// # Arguments
    ///
    /// * `capacity` - RAM size in words.
    /// * `image`    - Initial contents; word 0 lands at address 0.
    ///
    /// # Returns
    ///
    /// The RAM, or [`ImageError::TooLarge`] if the image does not fit.
    pub fn new(capacity: usize, image: &[u32]) -> Result<Self, ImageError> {
        if image.len() > capacity {
            return Err(ImageError::TooLarge {
                words: image.len(),
                capacity,
            });
        }
        let mut words = vec![0; capacity];
        words[..image.len()].copy_from_slice(image);
        Ok(Self { words })
    }

    /// Returns the capacity in words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if RAM has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads the word at `index`, or 0 past the end.
    pub fn read(&self, index: usize) -> u32 {
        match self.words.get(index) {
            Some(&word) => word,
            None => {
                tracing::debug!(index, "RAM read out of range");
                0
            }
        }
    }

    /// Writes the byte lanes of `data` selected by `mask` into the word at `index`.
    pub fn write(&mut self, index: usize, data: u32, mask: u8) {
        let Some(word) = self.words.get_mut(index) else {
            tracing::debug!(index, "RAM write out of range dropped");
            return;
        };
        let lanes = lane_mask(mask);
        *word = (*word & !lanes) | (data & lanes);
    }

    /// Returns the full contents.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

/// Expands a 4-bit lane mask into a 32-bit bit mask.
fn lane_mask(mask: u8) -> u32 {
    (0..4u32)
        .filter(|lane| mask & (1 << lane) != 0)
        .fold(0, |acc, lane| acc | (0xFF << (lane * 8)))
}
