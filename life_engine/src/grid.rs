// grid.rs - Flat row-major cell grid and the B3/S23 generation step

use serde::{Deserialize, Serialize};

/// Grid dimensions. Cells are stored row-major in a flat slice of
/// `rows * columns` booleans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub columns: usize,
}

impl Default for GridShape {
    fn default() -> Self {
        Self { rows: 36, columns: 64 }
    }
}

impl GridShape {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// First/last row or column. These cells are never touched by [`step`].
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        row == 0 || row + 1 == self.rows || col == 0 || col + 1 == self.columns
    }

    /// Whether a signed tile coordinate lands on the grid.
    pub fn contains(&self, col: i64, row: i64) -> bool {
        (0..self.columns as i64).contains(&col) && (0..self.rows as i64).contains(&row)
    }
}

/// Conway's rule: survival on 2 or 3, birth on exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Live cells among the 8 neighbors of an interior cell.
pub fn live_neighbors(shape: GridShape, cells: &[bool], row: usize, col: usize) -> u8 {
    debug_assert!(!shape.is_boundary(row, col), "neighbors of boundary cell ({row}, {col})");
    let neighbors = [
        (row - 1, col - 1), (row - 1, col), (row - 1, col + 1),
        (row,     col - 1),                 (row,     col + 1),
        (row + 1, col - 1), (row + 1, col), (row + 1, col + 1),
    ];
    neighbors
        .iter()
        .filter(|&&(r, c)| cells[shape.index(r, c)])
        .count() as u8
}

/// One synchronous generation over the interior cells.
///
/// Every interior cell reads only pre-step state from `cells` and writes its
/// next value into `scratch`, which is then copied back wholesale. The
/// boundary ring is read as neighbors but never recomputed.
pub fn step(shape: GridShape, cells: &mut [bool], scratch: &mut [bool]) {
    assert_eq!(cells.len(), shape.len());
    assert_eq!(scratch.len(), shape.len());

    // Seeded from cells so the copy-back leaves the boundary ring as it was.
    scratch.copy_from_slice(cells);
    for row in 1..shape.rows.saturating_sub(1) {
        for col in 1..shape.columns.saturating_sub(1) {
            let index = shape.index(row, col);
            let neighbors = live_neighbors(shape, cells, row, col);
            scratch[index] = next_state(cells[index], neighbors);
        }
    }
    cells.copy_from_slice(scratch);
}

pub fn clear(cells: &mut [bool]) {
    cells.fill(false);
}

pub fn population(cells: &[bool]) -> usize {
    cells.iter().filter(|&&alive| alive).count()
}
