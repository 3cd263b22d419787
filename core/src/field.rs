//! Dense tile grid with fixed dimensions and clipped neighborhood scans.

use crate::{CellCoord, Tile};

/// Two-dimensional dungeon grid holding exactly one [`Tile`] per cell.
///
/// Dimensions are fixed at construction. Coordinates outside the grid are
/// treated as absent rather than as walls: reads return `None` and writes
/// are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    columns: u32,
    rows: u32,
    cells: Vec<Tile>,
}

impl Field {
    /// Creates a field of the given dimensions with every cell set to `tile`.
    #[must_use]
    pub fn filled(columns: u32, rows: u32, tile: Tile) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![tile; capacity],
        }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the tile occupying the provided cell, or `None` out of bounds.
    #[must_use]
    pub fn tile(&self, cell: CellCoord) -> Option<Tile> {
        self.index(cell).and_then(|index| self.cells.get(index).copied())
    }

    /// Writes the tile at the provided cell. Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, cell: CellCoord, tile: Tile) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = tile;
            }
        }
    }

    /// Collects every cell currently holding [`Tile::Floor`].
    ///
    /// Scans the whole grid on every call. Spawning and room anchoring draw
    /// uniformly from this set, so the scan cost is O(columns * rows) per
    /// placement by design.
    #[must_use]
    pub fn floor_cells(&self) -> Vec<CellCoord> {
        let mut floors = Vec::new();
        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = CellCoord::new(column, row);
                if self.tile(cell) == Some(Tile::Floor) {
                    floors.push(cell);
                }
            }
        }
        floors
    }

    /// Enumerates the 3x3 neighborhood around `center`, including the center
    /// itself, clipped at the grid edges.
    pub fn radius(&self, center: CellCoord) -> impl Iterator<Item = (CellCoord, Tile)> + '_ {
        const OFFSETS: [(i64, i64); 9] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (0, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];

        OFFSETS.into_iter().filter_map(move |(column_off, row_off)| {
            let column = u32::try_from(i64::from(center.column()) + column_off).ok()?;
            let row = u32::try_from(i64::from(center.row()) + row_off).ok()?;
            let cell = CellCoord::new(column, row);
            Some((cell, self.tile(cell)?))
        })
    }

    /// Raw row-major tile storage, exposed for rendering and state dumps.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
