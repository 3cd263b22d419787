use dungeon_horde_core::{CellCoord, CountRange, GameConfig, Tile};
use dungeon_horde_system_bootstrap::Bootstrap;
use dungeon_horde_world::query;

fn census(world: &dungeon_horde_world::World, tile: Tile) -> usize {
    query::field(world)
        .cells()
        .iter()
        .filter(|cell| **cell == tile)
        .count()
}

#[test]
fn assembled_world_matches_the_configured_scenario() {
    let config = GameConfig::default();
    let world = Bootstrap::default()
        .assemble(config, 0xca11)
        .expect("default scenario fits the dungeon");

    assert_eq!(census(&world, Tile::Heal), config.heal_count as usize);
    assert_eq!(census(&world, Tile::Sword), config.sword_count as usize);
    assert_eq!(census(&world, Tile::Enemy), config.enemy_count as usize);
    assert_eq!(census(&world, Tile::Player), 1);

    let enemies = query::enemy_view(&world);
    assert_eq!(enemies.len(), config.enemy_count as usize);
    for snapshot in enemies.iter() {
        assert_eq!(snapshot.hp, config.enemy_max_hp);
        assert_eq!(
            query::field(&world).tile(snapshot.cell),
            Some(Tile::Enemy)
        );
    }

    let player = query::player(&world);
    assert_eq!(player.hp.current(), config.player_max_hp);
    assert_eq!(player.attack, config.base_attack);
    assert_eq!(query::field(&world).tile(player.cell), Some(Tile::Player));
}

#[test]
fn assembly_is_deterministic_per_seed() {
    let config = GameConfig::default();
    let bootstrap = Bootstrap::default();

    let first = bootstrap.assemble(config, 7).expect("world assembles");
    let second = bootstrap.assemble(config, 7).expect("world assembles");

    assert_eq!(query::field(&first), query::field(&second));
    assert_eq!(
        query::enemy_view(&first).into_vec(),
        query::enemy_view(&second).into_vec()
    );
    assert_eq!(query::player(&first), query::player(&second));
}

#[test]
fn cramped_dungeons_fail_loudly_instead_of_spawning_partially() {
    let config = GameConfig {
        columns: 4,
        rows: 1,
        corridor_count: CountRange::new(1, 1),
        room_count: CountRange::new(0, 0),
        ..GameConfig::default()
    };

    assert!(Bootstrap::default().assemble(config, 3).is_err());
}

#[test]
fn assembled_grid_holds_only_known_tiles() {
    let world = Bootstrap::default()
        .assemble(GameConfig::default(), 99)
        .expect("world assembles");
    let field = query::field(&world);

    for row in 0..field.rows() {
        for column in 0..field.columns() {
            assert!(field.tile(CellCoord::new(column, row)).is_some());
        }
    }
}
