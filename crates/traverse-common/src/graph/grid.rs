// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dense row-major grid.
//!
//! A grid has no built-in notion of adjacency. Callers pass an offset table
//! (`&[(d_row, d_col)]`) to [`Grid::neighbors`], which yields the in-bounds
//! cells in table order.

use crate::api::error::{Result, TraversalError};
use crate::core::cell::Cell;
use serde::Serialize;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows. All rows must have the same width.
    ///
    /// An empty outer vector, or rows that are all empty, give an empty grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| !r.is_empty()) {
                return Err(TraversalError::RaggedGrid {
                    row,
                    expected: 0,
                    actual: r.len(),
                });
            }
            return Ok(Self::empty());
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(TraversalError::RaggedGrid {
                    row,
                    expected: width,
                    actual: r.len(),
                });
            }
            cells.extend(r);
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        if self.contains(cell) {
            Some(&self.cells[self.index_of(cell)])
        } else {
            None
        }
    }

    /// Overwrite a cell in place.
    pub fn set_cell(&mut self, cell: Cell, value: T) -> Result<()> {
        let idx = self.checked_index(cell)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Validates a coordinate supplied as a query parameter.
    pub fn check_cell(&self, cell: Cell) -> Result<()> {
        self.checked_index(cell).map(|_| ())
    }

    fn checked_index(&self, cell: Cell) -> Result<usize> {
        if self.contains(cell) {
            Ok(self.index_of(cell))
        } else {
            Err(TraversalError::InvalidCell {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Dense row-major index of an in-bounds cell.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.row * self.cols + cell.col
    }

    /// Inverse of [`Grid::index_of`].
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    /// `cell` shifted by `(d_row, d_col)`, if the result is inside the grid.
    pub fn offset(&self, cell: Cell, d_row: isize, d_col: isize) -> Option<Cell> {
        cell.shifted(d_row, d_col).filter(|&next| self.contains(next))
    }

    /// In-bounds neighbors of `cell` following the order of `offsets`.
    pub fn neighbors<'a>(
        &'a self,
        cell: Cell,
        offsets: &'a [(isize, isize)],
    ) -> impl Iterator<Item = Cell> + 'a {
        offsets
            .iter()
            .filter_map(move |&(d_row, d_col)| self.offset(cell, d_row, d_col))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Cells paired with their values, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        self.cells().zip(self.cells.iter())
    }

    /// Cells on the outer edge of the grid, each yielded once.
    pub fn border(&self) -> impl Iterator<Item = Cell> + '_ {
        let (rows, cols) = (self.rows, self.cols);
        self.cells()
            .filter(move |c| c.row == 0 || c.col == 0 || c.row + 1 == rows || c.col + 1 == cols)
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// A `rows × cols` grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.cols).map(<[T]>::to_vec).collect()
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    /// Panics on an out-of-bounds cell, like slice indexing.
    fn index(&self, cell: Cell) -> &T {
        assert!(
            self.contains(cell),
            "cell {cell} outside {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[self.index_of(cell)]
    }
}

impl<T> IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        assert!(
            self.contains(cell),
            "cell {cell} outside {}x{} grid",
            self.rows,
            self.cols
        );
        let idx = self.index_of(cell);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            TraversalError::RaggedGrid {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_neighbors_are_bounds_checked() {
        let grid = Grid::filled(2, 3, 0u8);
        let corner: Vec<_> = grid.neighbors(Cell::new(0, 0), &ORTHOGONAL).collect();
        assert_eq!(corner, vec![Cell::new(0, 1), Cell::new(1, 0)]);

        let middle: Vec<_> = grid.neighbors(Cell::new(1, 1), &ORTHOGONAL).collect();
        assert_eq!(
            middle,
            vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 2)]
        );
    }

    #[test]
    fn test_set_cell() {
        let mut grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        grid.set_cell(Cell::new(1, 0), 9).unwrap();
        assert_eq!(grid[Cell::new(1, 0)], 9);
        assert!(grid.set_cell(Cell::new(2, 0), 0).is_err());
        assert_eq!(grid.to_rows(), vec![vec![1, 2], vec![9, 4]]);
    }

    #[test]
    fn test_border_visits_each_cell_once() {
        let grid = Grid::filled(3, 3, ());
        let border: Vec<_> = grid.border().collect();
        assert_eq!(border.len(), 8);
        assert!(!border.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_empty_grid() {
        let grid: Grid<u8> = Grid::from_rows(vec![]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.cells().count(), 0);
        assert!(grid.to_rows().is_empty());
        assert!(Grid::<u8>::from_rows(vec![vec![], vec![]]).unwrap().is_empty());
    }

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::filled(4, 5, 0);
        let cell = Cell::new(3, 2);
        assert_eq!(grid.cell_at(grid.index_of(cell)), cell);
    }
}
