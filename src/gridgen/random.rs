//! # Random Scrambled States
//!
//! This module generates random grid states for the generator binary.
//! States are produced by driving random toggles from the all-false
//! grid, so everything generated here is reachable and therefore
//! unlockable.

use crate::boxes::{LockBox, SecureBox};
use crate::mat;
use rand::{Rng, SeedableRng};

/// Generates a scrambled `y × x` state.
///
/// # Arguments
/// * `y` - Grid height, must be positive.
/// * `x` - Grid width, must be positive.
/// * `seed` - An optional seed for the random number generator for
///   reproducibility.
///
/// # Returns
/// A row-major boolean grid obtained by applying up to 1000 random
/// toggles to the all-false grid.
pub fn scramble(y: usize, x: usize, seed: Option<u64>) -> Vec<Vec<bool>> {
    assert!(y > 0 && x > 0, "box dimensions must be positive");
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    };
    let mut bx = SecureBox::from_state(mat![false; y; x]).expect("dimensions checked above");
    for _ in 0..rng.random_range(0..1000) {
        bx.toggle(rng.random_range(0..y), rng.random_range(0..x));
    }
    bx.state()
}
