//! Dense row-major DP score matrix.

use std::ops::{Index, IndexMut};

/// A `(rows x cols)` grid of scores stored in one contiguous allocation.
///
/// Built once per alignment call, filled row by row, then only read during
/// traceback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl ScoreMatrix {
    /// Allocate a zero-filled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        log::debug!("allocating {rows}x{cols} score matrix");
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[i32] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Position and value of the maximal cell.
    ///
    /// Ties resolve to the first cell in row-major order. An empty matrix
    /// reports `(0, 0, 0)`.
    pub fn argmax(&self) -> (usize, usize, i32) {
        let mut best = (0, 0, self.cells.first().copied().unwrap_or(0));
        for (k, &v) in self.cells.iter().enumerate() {
            if v > best.2 {
                best = (k / self.cols, k % self.cols, v);
            }
        }
        best
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = i32;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        debug_assert!(i < self.rows && j < self.cols);
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for ScoreMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i32 {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.cells[i * self.cols + j]
    }
}
