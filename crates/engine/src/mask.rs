//! Pixel mask: the set of currently selected pixel identifiers.
//!
//! A mask has membership-only semantics (unordered, no duplicates). Set
//! operations are pure and return new masks; the live mask owned by the
//! history is only replaced by playing actions, never mutated in place.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Identifier of a selectable pixel.
pub type Pixel = u32;

/// A set of selected pixels.
///
/// Equality is value equality over the member set, never identity — the
/// saved-snapshot check in the history depends on this.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mask {
    pixels: FxHashSet<Pixel>,
}

impl Mask {
    /// Create an empty mask.
    pub fn new() -> Self {
        Self {
            pixels: FxHashSet::default(),
        }
    }

    /// Whether `pixel` is selected.
    #[inline]
    pub fn contains(&self, pixel: Pixel) -> bool {
        self.pixels.contains(&pixel)
    }

    /// Number of selected pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Add a pixel. Used to build the pixel sets handed to edit actions;
    /// the live mask held by the history is not mutated through this.
    pub fn insert(&mut self, pixel: Pixel) -> bool {
        self.pixels.insert(pixel)
    }

    /// Iterate over selected pixels in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.pixels.iter().copied()
    }

    /// Pixels selected in `self`, `other`, or both.
    pub fn union(&self, other: &Mask) -> Mask {
        Mask {
            pixels: self.pixels.union(&other.pixels).copied().collect(),
        }
    }

    /// Pixels selected in `self` but not in `other`.
    pub fn difference(&self, other: &Mask) -> Mask {
        Mask {
            pixels: self.pixels.difference(&other.pixels).copied().collect(),
        }
    }

    /// Pixels selected in both `self` and `other`.
    pub fn intersection(&self, other: &Mask) -> Mask {
        Mask {
            pixels: self.pixels.intersection(&other.pixels).copied().collect(),
        }
    }

    /// Pixels selected in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Mask) -> Mask {
        Mask {
            pixels: self
                .pixels
                .symmetric_difference(&other.pixels)
                .copied()
                .collect(),
        }
    }
}

impl FromIterator<Pixel> for Mask {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        Self {
            pixels: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Sorted so assertion diffs are stable and readable
        let mut pixels: Vec<Pixel> = self.pixels.iter().copied().collect();
        pixels.sort_unstable();
        f.debug_set().entries(pixels).finish()
    }
}
