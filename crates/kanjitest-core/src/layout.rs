//! Random worksheet layout
//!
//! Draw order on the random source is fixed:
//!
//! ```text
//! 1. sample `cells` distinct indices from the usable prefix
//! 2. shuffle the balanced true/false mask
//! ```
//!
//! Changing this order changes every seeded worksheet.

use crate::config::Grid;
use crate::error::{KanjiError, Result};
use crate::vocab::VocabularyEntry;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

/// Build the random source for a run
///
/// A seed makes the run reproducible; without one the generator is seeded
/// from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Per-cell prompt selector, exactly half `true`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMask(Vec<bool>);

impl LayoutMask {
    /// Shuffle `cells / 2` trues and `cells / 2` falses
    pub fn balanced<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        let half = grid.cells() / 2;
        let mut bits: Vec<bool> = std::iter::repeat(true)
            .take(half)
            .chain(std::iter::repeat(false).take(half))
            .collect();
        bits.shuffle(rng);
        Self(bits)
    }

    #[cfg(test)]
    pub(crate) fn from_bits(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    #[cfg(test)]
    pub(crate) fn count_true(&self) -> usize {
        self.0.iter().filter(|&&bit| bit).count()
    }
}

/// Sampled entries and the mask applied to them, shared by both variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub entries: Vec<VocabularyEntry>,
    pub mask: LayoutMask,
}

impl Layout {
    /// Iterate cells in sampled order with their mask bit
    pub fn cells(&self) -> impl Iterator<Item = (&VocabularyEntry, bool)> {
        self.entries.iter().zip(self.mask.iter())
    }
}

/// Draw the worksheet layout from the usable prefix
///
/// Every entry of `pool` is equally likely to be picked and none is
/// picked twice.
///
/// # Errors
///
/// Returns `InsufficientRows` if `pool` holds fewer entries than the grid
/// has cells. Nothing is drawn from `rng` in that case.
pub fn sample_layout<R: Rng + ?Sized>(
    pool: &[VocabularyEntry],
    grid: &Grid,
    rng: &mut R,
) -> Result<Layout> {
    let cells = grid.cells();
    if pool.len() < cells {
        return Err(KanjiError::InsufficientRows {
            requested: cells,
            usable: pool.len(),
        });
    }

    let entries: Vec<VocabularyEntry> = index::sample(rng, pool.len(), cells)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect();

    let mask = LayoutMask::balanced(grid, rng);

    log::debug!(
        "Sampled {:?}",
        entries.iter().map(|e| e.term.as_str()).collect::<Vec<_>>()
    );
    log::debug!("Mask {:?}", mask.0);

    Ok(Layout { entries, mask })
}
