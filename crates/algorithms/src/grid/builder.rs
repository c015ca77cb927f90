//! Grid construction over an extent

use gridstat_core::{Error, Extent, Result};

/// Default safety ceiling for `rows * cols`.
///
/// A mistakenly tiny cell size over a large extent would otherwise
/// request an unbounded number of cells.
pub const DEFAULT_MAX_CELLS: usize = 50_000_000;

/// One rectangular unit of the overlay grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub bounds: Extent,
}

/// A regular grid covering an extent.
///
/// Row 0 sits at the extent's `min_y` edge; cells are addressed
/// (row, col) and generated in row-major order. The last row/column may
/// overhang `max_x`/`max_y` — cells are never clipped to the extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    extent: Extent,
    cell_size: f64,
    rows: usize,
    cols: usize,
}

impl GridSpec {
    /// Build a grid over `extent` with square cells of `cell_size`
    /// (already normalized to the extent's linear unit).
    ///
    /// Fails with `InvalidCellSize` for non-positive sizes and with
    /// `GridTooLarge` when the cell count would exceed `max_cells`.
    pub fn build(extent: Extent, cell_size: f64, max_cells: usize) -> Result<Self> {
        if !(cell_size > 0.0) {
            return Err(Error::InvalidCellSize { value: cell_size });
        }

        let rows = (extent.height() / cell_size).ceil() as usize;
        let cols = (extent.width() / cell_size).ceil() as usize;

        let total = (rows as u128) * (cols as u128);
        if total > max_cells as u128 {
            return Err(Error::GridTooLarge {
                rows,
                cols,
                limit: max_cells,
            });
        }

        Ok(Self {
            extent,
            cell_size,
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The cell at (row, col); indices are not bounds-checked against the
    /// grid, matching how callers iterate `0..rows` × `0..cols`.
    pub fn cell(&self, row: usize, col: usize) -> GridCell {
        let s = self.cell_size;
        GridCell {
            row,
            col,
            bounds: Extent::new(
                self.extent.min_x + col as f64 * s,
                self.extent.min_y + row as f64 * s,
                self.extent.min_x + (col + 1) as f64 * s,
                self.extent.min_y + (row + 1) as f64 * s,
            ),
        }
    }

    /// Lazily yield all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| self.cell(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_dimensions() {
        let grid = GridSpec::build(Extent::new(0.0, 0.0, 10.0, 10.0), 5.0, DEFAULT_MAX_CELLS)
            .unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);

        // 10 / 4 rounds up to 3
        let grid = GridSpec::build(Extent::new(0.0, 0.0, 10.0, 10.0), 4.0, DEFAULT_MAX_CELLS)
            .unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn test_exact_cover_cell_bounds() {
        let grid = GridSpec::build(Extent::new(0.0, 0.0, 10.0, 10.0), 5.0, DEFAULT_MAX_CELLS)
            .unwrap();
        let cells: Vec<GridCell> = grid.cells().collect();

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].bounds, Extent::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(cells[1].bounds, Extent::new(5.0, 0.0, 10.0, 5.0));
        assert_eq!(cells[2].bounds, Extent::new(0.0, 5.0, 5.0, 10.0));
        assert_eq!(cells[3].bounds, Extent::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn test_row_major_order() {
        let grid = GridSpec::build(Extent::new(0.0, 0.0, 3.0, 2.0), 1.0, DEFAULT_MAX_CELLS)
            .unwrap();
        let indices: Vec<(usize, usize)> = grid.cells().map(|c| (c.row, c.col)).collect();
        assert_eq!(
            indices,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_last_cells_overhang() {
        let grid = GridSpec::build(Extent::new(0.0, 0.0, 10.0, 10.0), 4.0, DEFAULT_MAX_CELLS)
            .unwrap();
        let last = grid.cell(2, 2);
        assert_eq!(last.bounds, Extent::new(8.0, 8.0, 12.0, 12.0));
    }

    #[test]
    fn test_cells_disjoint_interiors() {
        let grid = GridSpec::build(Extent::new(0.0, 0.0, 4.0, 4.0), 2.0, DEFAULT_MAX_CELLS)
            .unwrap();
        let cells: Vec<GridCell> = grid.cells().collect();

        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                let overlap_w = a.bounds.max_x.min(b.bounds.max_x)
                    - a.bounds.min_x.max(b.bounds.min_x);
                let overlap_h = a.bounds.max_y.min(b.bounds.max_y)
                    - a.bounds.min_y.max(b.bounds.min_y);
                // Neighbors may share an edge but never area
                assert!(overlap_w <= 0.0 || overlap_h <= 0.0);
            }
        }
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let result = GridSpec::build(Extent::new(0.0, 0.0, 10.0, 10.0), 0.0, DEFAULT_MAX_CELLS);
        assert!(matches!(result, Err(Error::InvalidCellSize { value }) if value == 0.0));

        let result = GridSpec::build(Extent::new(0.0, 0.0, 10.0, 10.0), -2.0, DEFAULT_MAX_CELLS);
        assert!(matches!(result, Err(Error::InvalidCellSize { .. })));
    }

    #[test]
    fn test_nan_cell_size_rejected() {
        let result =
            GridSpec::build(Extent::new(0.0, 0.0, 10.0, 10.0), f64::NAN, DEFAULT_MAX_CELLS);
        assert!(matches!(result, Err(Error::InvalidCellSize { .. })));
    }

    #[test]
    fn test_safety_ceiling() {
        // 1e5 x 1e5 cells over a 1e5-unit extent with size 1
        let result = GridSpec::build(
            Extent::new(0.0, 0.0, 100_000.0, 100_000.0),
            1.0,
            DEFAULT_MAX_CELLS,
        );
        assert!(matches!(
            result,
            Err(Error::GridTooLarge { rows: 100_000, cols: 100_000, .. })
        ));
    }
}
