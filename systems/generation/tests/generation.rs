use dungeon_horde_core::{CellCoord, CountRange, GameConfig, Tile};
use dungeon_horde_system_generation::generate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn generated_fields_contain_only_walls_and_floors() {
    for seed in 0..16 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let field = generate(&GameConfig::default(), &mut rng);
        assert!(field
            .cells()
            .iter()
            .all(|tile| matches!(tile, Tile::Wall | Tile::Floor)));
    }
}

#[test]
fn generation_respects_configured_dimensions() {
    let config = GameConfig {
        columns: 17,
        rows: 9,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let field = generate(&config, &mut rng);
    assert_eq!(field.columns(), 17);
    assert_eq!(field.rows(), 9);
    assert_eq!(field.cells().len(), 17 * 9);
}

#[test]
fn same_seed_carves_the_same_field() {
    let config = GameConfig::default();
    let first = generate(&config, &mut ChaCha8Rng::seed_from_u64(0xd1ce));
    let second = generate(&config, &mut ChaCha8Rng::seed_from_u64(0xd1ce));
    assert_eq!(first, second);
}

#[test]
fn corridors_span_the_full_grid() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let field = generate(&config, &mut rng);

    let full_floor_row = (0..field.rows()).any(|row| {
        (0..field.columns()).all(|column| {
            field.tile(CellCoord::new(column, row)) == Some(Tile::Floor)
        })
    });
    let full_floor_column = (0..field.columns()).any(|column| {
        (0..field.rows()).all(|row| field.tile(CellCoord::new(column, row)) == Some(Tile::Floor))
    });

    assert!(full_floor_row, "expected at least one horizontal corridor");
    assert!(full_floor_column, "expected at least one vertical corridor");
}

#[test]
fn rooms_without_floor_anchors_are_skipped() {
    // No corridors means no floor set for rooms to anchor on.
    let config = GameConfig {
        corridor_count: CountRange::new(0, 0),
        room_count: CountRange::new(5, 5),
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let field = generate(&config, &mut rng);
    assert!(field.cells().iter().all(|tile| *tile == Tile::Wall));
}

#[test]
fn generation_terminates_on_degenerate_grids() {
    let config = GameConfig {
        columns: 1,
        rows: 1,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let field = generate(&config, &mut rng);
    assert_eq!(field.cells().len(), 1);
}
