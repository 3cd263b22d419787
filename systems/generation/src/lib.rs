#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic dungeon field generator: corridors first, then rooms.

use dungeon_horde_core::{rng, CellCoord, Field, GameConfig, Tile};
use rand::Rng;

/// Carves a fresh dungeon field from solid wall.
///
/// The generator floors a randomized number of full-width horizontal
/// corridors and full-height vertical corridors, then carves rooms anchored
/// on uniformly chosen cells of the current floor set. Because each anchor
/// is drawn from floor that already exists, every room touches the corridor
/// network by construction; no further connectivity pass runs, so isolated
/// floor pockets are an accepted outcome rather than a defect.
///
/// Identical configuration and generator state produce an identical field.
#[must_use]
pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Field {
    let mut field = Field::filled(config.columns, config.rows, Tile::Wall);

    carve_horizontal_corridors(&mut field, config, rng);
    carve_vertical_corridors(&mut field, config, rng);
    carve_rooms(&mut field, config, rng);

    field
}

fn carve_horizontal_corridors<R: Rng + ?Sized>(
    field: &mut Field,
    config: &GameConfig,
    rng: &mut R,
) {
    let count = rng::within(rng, config.corridor_count);
    for _ in 0..count {
        let row = rng::below(rng, field.rows());
        for column in 0..field.columns() {
            field.set_tile(CellCoord::new(column, row), Tile::Floor);
        }
    }
}

fn carve_vertical_corridors<R: Rng + ?Sized>(field: &mut Field, config: &GameConfig, rng: &mut R) {
    let count = rng::within(rng, config.corridor_count);
    for _ in 0..count {
        let column = rng::below(rng, field.columns());
        for row in 0..field.rows() {
            field.set_tile(CellCoord::new(column, row), Tile::Floor);
        }
    }
}

fn carve_rooms<R: Rng + ?Sized>(field: &mut Field, config: &GameConfig, rng: &mut R) {
    let count = rng::within(rng, config.room_count);
    for _ in 0..count {
        let width = rng::within(rng, config.room_size);
        let height = rng::within(rng, config.room_size);

        // Anchors come from the current floor set, so later rooms may grow
        // out of earlier ones. A floorless field leaves nothing to anchor on
        // and the room is skipped.
        let floors = field.floor_cells();
        let Some(anchor) = rng::choose(rng, &floors).copied() else {
            continue;
        };

        let vertical_growth: i64 = if rng::below(rng, 2) == 0 { 1 } else { -1 };
        let horizontal_growth: i64 = if rng::below(rng, 2) == 0 { 1 } else { -1 };

        carve_block(field, anchor, width, height, horizontal_growth, vertical_growth);
    }
}

/// Floors a `width` x `height` block extending from `anchor` in the given
/// growth directions. Cells falling outside the grid are skipped, not
/// clamped or wrapped.
fn carve_block(
    field: &mut Field,
    anchor: CellCoord,
    width: u32,
    height: u32,
    horizontal_growth: i64,
    vertical_growth: i64,
) {
    for row_offset in 0..i64::from(height) {
        for column_offset in 0..i64::from(width) {
            let column = i64::from(anchor.column()) + column_offset * horizontal_growth;
            let row = i64::from(anchor.row()) + row_offset * vertical_growth;
            let (Ok(column), Ok(row)) = (u32::try_from(column), u32::try_from(row)) else {
                continue;
            };
            field.set_tile(CellCoord::new(column, row), Tile::Floor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::carve_block;
    use dungeon_horde_core::{CellCoord, Field, Tile};

    #[test]
    fn block_carving_skips_cells_outside_the_grid() {
        let mut field = Field::filled(4, 4, Tile::Wall);
        carve_block(&mut field, CellCoord::new(0, 0), 3, 3, -1, -1);
        // Only the anchor itself stays in bounds when growing off-grid.
        assert_eq!(
            field
                .cells()
                .iter()
                .filter(|tile| **tile == Tile::Floor)
                .count(),
            1
        );
        assert_eq!(field.tile(CellCoord::new(0, 0)), Some(Tile::Floor));
    }

    #[test]
    fn block_carving_floors_the_full_extent_in_bounds() {
        let mut field = Field::filled(6, 6, Tile::Wall);
        carve_block(&mut field, CellCoord::new(2, 2), 3, 2, 1, 1);
        for row in 2..4 {
            for column in 2..5 {
                assert_eq!(field.tile(CellCoord::new(column, row)), Some(Tile::Floor));
            }
        }
        assert_eq!(
            field
                .cells()
                .iter()
                .filter(|tile| **tile == Tile::Floor)
                .count(),
            6
        );
    }
}
