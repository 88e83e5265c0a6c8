//! Deterministic randomness for catalog color assignment.
//!
//! The catalog never touches a thread-local or OS-seeded generator: it owns a
//! `PlannerRng` that the caller seeds explicitly, so the same seed always
//! yields the same color for the n-th subject created.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::ColorTag;

/// Seedable RNG owned by a catalog.
#[derive(Clone, Debug)]
pub struct PlannerRng(SmallRng);

impl PlannerRng {
    pub fn new(seed: u64) -> Self {
        PlannerRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a color uniformly from [`ColorTag::ALL`].
    pub fn pick_color(&mut self) -> ColorTag {
        // The palette is a non-empty constant array.
        ColorTag::ALL
            .choose(&mut self.0)
            .copied()
            .unwrap_or(ColorTag::Blue)
    }
}
