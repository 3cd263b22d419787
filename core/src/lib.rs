#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Dungeon Horde engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values that adapters
//! and tests can observe. Systems that run at startup consume an injected
//! random number generator and produce the data the world is assembled from.

mod field;
pub mod rng;

use serde::{Deserialize, Serialize};

pub use field::Field;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Dungeon Horde.";

/// Category of content occupying one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Solid rock that blocks movement.
    Wall,
    /// Open ground that entities may occupy or traverse.
    Floor,
    /// Pickup that permanently raises the player's attack power.
    Sword,
    /// Pickup that restores a portion of the player's health.
    Heal,
    /// Cell currently occupied by a living enemy.
    Enemy,
    /// Cell currently occupied by the player.
    Player,
}

impl Tile {
    /// Reports whether a player step onto this tile is rejected outright.
    #[must_use]
    pub const fn blocks_player(self) -> bool {
        matches!(self, Self::Wall | Self::Enemy)
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the neighboring cell one step away in the given direction.
    ///
    /// Returns `None` when the step would leave the coordinate space through
    /// the zero edge. Steps beyond the far edge are representable here and
    /// rejected later by [`Field::tile`], which treats them as absent.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::North => Some(Self::new(self.column, self.row.checked_sub(1)?)),
            Direction::East => Some(Self::new(self.column.checked_add(1)?, self.row)),
            Direction::South => Some(Self::new(self.column, self.row.checked_add(1)?)),
            Direction::West => Some(Self::new(self.column.checked_sub(1)?, self.row)),
        }
    }
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Bounded health pool whose current value never exceeds its maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitPoints {
    current: u32,
    max: u32,
}

impl HitPoints {
    /// Creates a full health pool with the provided maximum.
    #[must_use]
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Health remaining in the pool.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Upper bound the pool is clamped to.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Reports whether the pool has been depleted.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Restores up to `amount` health, clamped to the maximum.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current - before
    }

    /// Removes up to `amount` health, saturating at zero.
    ///
    /// Returns the health remaining after the hit.
    pub fn damage(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }
}

/// Startup record describing one enemy produced by the spawning system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnemySeed {
    /// Identifier allocated to the enemy.
    pub id: EnemyId,
    /// Cell the enemy occupies after spawning.
    pub cell: CellCoord,
    /// Health the enemy starts with.
    pub hp: u32,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Requests that the player advance a single step in the given direction.
    MovePlayer {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Requests a melee strike against every enemy adjacent to the player.
    AttackPlayer,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: CellCoord,
        /// Cell the player occupies after completing the move.
        to: CellCoord,
    },
    /// Confirms that the player consumed a healing pickup.
    HealConsumed {
        /// Cell the pickup occupied.
        cell: CellCoord,
        /// Health actually restored after clamping to the maximum.
        restored: u32,
    },
    /// Confirms that the player collected an attack pickup.
    SwordCollected {
        /// Cell the pickup occupied.
        cell: CellCoord,
        /// Attack power the player wields after the pickup.
        attack: u32,
    },
    /// Reports that a melee strike connected with an enemy.
    EnemyStruck {
        /// Identifier of the enemy that was hit.
        enemy: EnemyId,
        /// Health the enemy retains after the hit.
        remaining_hp: u32,
    },
    /// Reports that an enemy died and was removed from the dungeon.
    EnemySlain {
        /// Identifier of the enemy that died.
        enemy: EnemyId,
        /// Cell the enemy occupied, restored to floor.
        cell: CellCoord,
    },
    /// Confirms that an enemy wandered to a neighboring cell.
    EnemyMoved {
        /// Identifier of the enemy that moved.
        enemy: EnemyId,
        /// Cell the enemy occupied before moving.
        from: CellCoord,
        /// Cell the enemy occupies after the move.
        to: CellCoord,
    },
    /// Reports that an enemy struck the player.
    PlayerStruck {
        /// Identifier of the attacking enemy.
        enemy: EnemyId,
        /// Health the player retains after the hit.
        remaining_hp: u32,
    },
    /// Announces that the simulation reached a terminal outcome.
    GameEnded {
        /// Terminal outcome the world settled on.
        outcome: Outcome,
    },
}

/// Lifecycle state of a running game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still accepting commands.
    Running,
    /// Every enemy has been eliminated.
    Won,
    /// The player's health was depleted.
    Lost,
}

impl Outcome {
    /// Reports whether the game has ended and no further commands apply.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Inclusive integer range used for randomized generation counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountRange {
    /// Smallest value the range may produce.
    pub min: u32,
    /// Largest value the range may produce.
    pub max: u32,
}

impl CountRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Configuration fixed at construction that shapes generation and combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of tile columns laid out in the dungeon grid.
    pub columns: u32,
    /// Number of tile rows laid out in the dungeon grid.
    pub rows: u32,
    /// How many corridors of each orientation the generator carves.
    pub corridor_count: CountRange,
    /// How many rooms the generator carves.
    pub room_count: CountRange,
    /// Edge length range for generated rooms, in cells.
    pub room_size: CountRange,
    /// Number of healing pickups placed at startup.
    pub heal_count: u32,
    /// Number of attack pickups placed at startup.
    pub sword_count: u32,
    /// Number of enemies placed at startup.
    pub enemy_count: u32,
    /// Health the player starts with and is clamped to.
    pub player_max_hp: u32,
    /// Health every enemy spawns with.
    pub enemy_max_hp: u32,
    /// Attack power the player starts with.
    pub base_attack: u32,
    /// Health restored by one healing pickup.
    pub heal_amount: u32,
    /// Attack power granted by one sword pickup.
    pub sword_bonus: u32,
    /// Flat damage an adjacent enemy deals to the player each turn.
    pub enemy_damage: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 24,
            corridor_count: CountRange::new(3, 5),
            room_count: CountRange::new(5, 10),
            room_size: CountRange::new(3, 8),
            heal_count: 10,
            sword_count: 2,
            enemy_count: 10,
            player_max_hp: 10,
            enemy_max_hp: 10,
            base_attack: 2,
            heal_amount: 2,
            sword_bonus: 2,
            enemy_damage: 1,
        }
    }
}
