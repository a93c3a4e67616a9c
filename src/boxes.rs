use crate::mat;
use anyhow::{Context, ensure};
use itertools::Itertools;
use proconio::*;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Capability interface to a lockable grid.
///
/// This is the whole surface the solver is allowed to touch: it reads
/// the state through [`LockBox::state`] and mutates only through
/// [`LockBox::toggle`]. Any concrete grid representation can stand
/// behind it.
pub trait LockBox {
    /// Flips every cell in `row` and every cell in `col`, each exactly
    /// once (the target cell included, exactly once).
    fn toggle(&mut self, row: usize, col: usize);
    /// True iff any cell is currently set.
    fn is_locked(&self) -> bool;
    /// A copy of the current state, row-major.
    fn state(&self) -> Vec<Vec<bool>>;
}

/// Serialized form of a grid state, as produced by the generator binary
/// and accepted on stdin by the solver binary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: Vec<Vec<bool>>,
}

/// An owned boolean grid implementing [`LockBox`].
pub struct SecureBox {
    cells: Vec<Vec<bool>>,
    y_size: usize,
    x_size: usize,
}

impl LockBox for SecureBox {
    fn toggle(&mut self, row: usize, col: usize) {
        assert!(row < self.y_size && col < self.x_size);
        for j in 0..self.x_size {
            self.cells[row][j] = !self.cells[row][j];
        }
        for i in 0..self.y_size {
            self.cells[i][col] = !self.cells[i][col];
        }
        // Both sweeps hit the target cell; one more flip leaves it
        // changed exactly once.
        self.cells[row][col] = !self.cells[row][col];
    }

    fn is_locked(&self) -> bool {
        self.cells.iter().flatten().any(|&cell| cell)
    }

    fn state(&self) -> Vec<Vec<bool>> {
        self.cells.clone()
    }
}

impl SecureBox {
    /// Creates a `y × x` box and scrambles it with up to 1000 random
    /// toggles, so the resulting state is always unlockable.
    ///
    /// Pass a seed for a reproducible state; otherwise the RNG is
    /// seeded from OS entropy.
    pub fn new(y: usize, x: usize, seed: Option<u64>) -> Self {
        assert!(y > 0 && x > 0, "box dimensions must be positive");
        let mut rng = match seed {
            Some(s) => rand_chacha::ChaCha20Rng::seed_from_u64(s),
            None => rand_chacha::ChaCha20Rng::from_os_rng(),
        };
        let mut bx = Self {
            cells: mat![false; y; x],
            y_size: y,
            x_size: x,
        };
        for _ in 0..rng.random_range(0..1000) {
            bx.toggle(rng.random_range(0..y), rng.random_range(0..x));
        }
        bx
    }

    /// Wraps an explicit state. Rejects empty and jagged input.
    pub fn from_state(cells: Vec<Vec<bool>>) -> anyhow::Result<Self> {
        let y_size = cells.len();
        ensure!(y_size > 0, "box is empty");
        let Ok(x_size) = cells.iter().map(|row| row.len()).all_equal_value() else {
            anyhow::bail!("box is jagged");
        };
        ensure!(x_size > 0, "zero-width rows");
        Ok(Self {
            cells,
            y_size,
            x_size,
        })
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }
}

/// Parses a box from text input.
///
/// Input starting with `{` is treated as a JSON [`Snapshot`]. Anything
/// else is the token format: `y x` followed by `y` rows of `0`/`1`
/// characters.
pub fn parse_box(input: &str) -> anyhow::Result<SecureBox> {
    let s = input.trim_start();
    if s.starts_with('{') {
        let snapshot: Snapshot = serde_json::from_str(s).context("invalid JSON snapshot")?;
        return SecureBox::from_state(snapshot.cells);
    }

    use proconio::source::once::OnceSource;
    let mut src = OnceSource::from(s);
    input! { from &mut src,
        y: usize,
        x: usize,
        rows: [String; y],
    }
    let mut cells = mat![false; y; x];
    for (i, row) in rows.iter().enumerate() {
        ensure!(
            row.len() == x,
            "row {} has {} cells, expected {}",
            i,
            row.len(),
            x
        );
        for (j, ch) in row.chars().enumerate() {
            cells[i][j] = match ch {
                '0' => false,
                '1' => true,
                other => anyhow::bail!("unexpected cell {:?} in row {}", other, i),
            };
        }
    }
    SecureBox::from_state(cells)
}

/// Reads a box from stdin in either format accepted by [`parse_box`].
pub fn get_box_from_stdin() -> anyhow::Result<SecureBox> {
    use std::io::Read;
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    parse_box(&input)
}
