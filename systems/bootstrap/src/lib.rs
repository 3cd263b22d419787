#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! One-shot startup system that assembles a playable Dungeon Horde world.

use dungeon_horde_core::GameConfig;
use dungeon_horde_system_spawning::FloorExhausted;
use dungeon_horde_world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Raised when startup cannot produce a playable world.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The generated dungeon did not hold enough floor for the scenario.
    #[error("dungeon floor budget too small: {0}")]
    Spawn(#[from] FloorExhausted),
}

/// Produces fully assembled worlds from a configuration and a seed.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Generates the field, populates the scenario, and assembles the world.
    ///
    /// Runs exactly once at startup. The same configuration and seed always
    /// assemble the same world, including the generator state that drives
    /// enemy wandering afterwards.
    pub fn assemble(&self, config: GameConfig, seed: u64) -> Result<World, BootstrapError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut field = dungeon_horde_system_generation::generate(&config, &mut rng);
        let population = dungeon_horde_system_spawning::populate(&mut field, &config, &mut rng)?;
        Ok(World::from_parts(
            config,
            field,
            population.player,
            population.enemies,
            rng,
        ))
    }
}
