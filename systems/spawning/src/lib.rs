#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Startup system that places pickups, enemies, and the player on the field.

use dungeon_horde_core::{rng, CellCoord, EnemyId, EnemySeed, Field, GameConfig, Tile};
use rand::Rng;
use thiserror::Error;

/// Raised when a placement finds no floor cell left to occupy.
///
/// Callers are expected to keep the floor budget above the entity count;
/// this error marks a misconfigured scenario rather than a runtime
/// condition the engine recovers from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no floor cell left to place {0:?}")]
pub struct FloorExhausted(pub Tile);

/// Entity placements produced by [`populate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Population {
    /// Seeds for every enemy in spawn order.
    pub enemies: Vec<EnemySeed>,
    /// Cell the player starts on.
    pub player: CellCoord,
}

/// Places `tile` on a uniformly random floor cell and returns its coordinate.
///
/// Scans the whole grid for floor on each call. Any side-table bookkeeping
/// for the placed entity is the caller's responsibility.
pub fn spawn_entity<R: Rng + ?Sized>(
    field: &mut Field,
    tile: Tile,
    rng: &mut R,
) -> Result<CellCoord, FloorExhausted> {
    let floors = field.floor_cells();
    let cell = rng::choose(rng, &floors)
        .copied()
        .ok_or(FloorExhausted(tile))?;
    field.set_tile(cell, tile);
    Ok(cell)
}

/// Populates a freshly generated field with the configured scenario.
///
/// Spawn order is fixed: every heal, then every sword, then every enemy
/// (seeded with full health), and finally the player.
pub fn populate<R: Rng + ?Sized>(
    field: &mut Field,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Population, FloorExhausted> {
    for _ in 0..config.heal_count {
        let _ = spawn_entity(field, Tile::Heal, rng)?;
    }
    for _ in 0..config.sword_count {
        let _ = spawn_entity(field, Tile::Sword, rng)?;
    }

    let mut enemies = Vec::with_capacity(config.enemy_count as usize);
    for index in 0..config.enemy_count {
        let cell = spawn_entity(field, Tile::Enemy, rng)?;
        enemies.push(EnemySeed {
            id: EnemyId::new(index),
            cell,
            hp: config.enemy_max_hp,
        });
    }

    let player = spawn_entity(field, Tile::Player, rng)?;

    Ok(Population { enemies, player })
}
