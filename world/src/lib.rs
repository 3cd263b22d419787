#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state and turn engine for Dungeon Horde.
//!
//! The world owns the dungeon field, the player, and the enemy roster, and
//! is mutated exclusively through [`apply`]. Every resolved player action
//! costs exactly one enemy turn: the horde wanders, then everything adjacent
//! to the player strikes. The simulation is turn-synchronous; a command runs
//! to completion before the next one is accepted.

use dungeon_horde_core::{
    rng, CellCoord, Command, Direction, EnemyId, EnemySeed, Event, Field, GameConfig, HitPoints,
    Outcome, Tile, WELCOME_BANNER,
};
use rand_chacha::ChaCha8Rng;

/// Represents the authoritative Dungeon Horde world state.
///
/// Invariant: the set of grid cells holding [`Tile::Enemy`] maps one-to-one
/// onto the roster, and the single [`Tile::Player`] cell matches the player
/// position. Every spawn, move, and death updates both sides together.
#[derive(Clone, Debug)]
pub struct World {
    banner: &'static str,
    config: GameConfig,
    field: Field,
    player: Player,
    enemies: Vec<Enemy>,
    outcome: Outcome,
    rng: ChaCha8Rng,
}

impl World {
    /// Assembles a world from startup parts.
    ///
    /// The field must already carry the entity tiles the parts describe:
    /// one [`Tile::Player`] at `player_cell` and one [`Tile::Enemy`] per
    /// seed. The provided generator drives all enemy wandering, so a seeded
    /// generator replays a game deterministically.
    #[must_use]
    pub fn from_parts(
        config: GameConfig,
        field: Field,
        player_cell: CellCoord,
        enemies: Vec<EnemySeed>,
        rng: ChaCha8Rng,
    ) -> Self {
        debug_assert_eq!(field.tile(player_cell), Some(Tile::Player));
        debug_assert!(enemies
            .iter()
            .all(|seed| field.tile(seed.cell) == Some(Tile::Enemy)));
        debug_assert_eq!(
            field.cells().iter().filter(|tile| **tile == Tile::Enemy).count(),
            enemies.len(),
        );

        Self {
            banner: WELCOME_BANNER,
            player: Player {
                hp: HitPoints::full(config.player_max_hp),
                attack: config.base_attack,
                position: player_cell,
            },
            enemies: enemies.into_iter().map(Enemy::from_seed).collect(),
            outcome: Outcome::Running,
            field,
            config,
            rng,
        }
    }

    fn enemy_index(&self, id: EnemyId) -> Option<usize> {
        self.enemies.iter().position(|enemy| enemy.id == id)
    }

    fn enemy_id_at(&self, cell: CellCoord) -> Option<EnemyId> {
        self.enemies
            .iter()
            .find(|enemy| enemy.position == cell)
            .map(|enemy| enemy.id)
    }

    fn roster_ids(&self) -> Vec<EnemyId> {
        self.enemies.iter().map(|enemy| enemy.id).collect()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Once the outcome is terminal the world is frozen: any further command
/// returns without touching grid, roster, player, or outcome. Invalid player
/// inputs (steps into walls, enemies, or off the grid) are silent no-ops and
/// consume no turn.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    if world.outcome.is_terminal() {
        return;
    }

    match command {
        Command::MovePlayer { direction } => move_player(world, direction, out_events),
        Command::AttackPlayer => attack_player(world, out_events),
    }
}

fn move_player(world: &mut World, direction: Direction, out_events: &mut Vec<Event>) {
    let from = world.player.position;
    let Some(target) = from.step(direction) else {
        return;
    };
    let Some(tile) = world.field.tile(target) else {
        return;
    };
    if tile.blocks_player() {
        return;
    }

    world.field.set_tile(from, Tile::Floor);
    world.field.set_tile(target, Tile::Player);
    world.player.position = target;
    out_events.push(Event::PlayerMoved { from, to: target });

    match tile {
        Tile::Heal => {
            let restored = world.player.hp.heal(world.config.heal_amount);
            out_events.push(Event::HealConsumed {
                cell: target,
                restored,
            });
        }
        Tile::Sword => {
            world.player.attack = world.player.attack.saturating_add(world.config.sword_bonus);
            out_events.push(Event::SwordCollected {
                cell: target,
                attack: world.player.attack,
            });
        }
        _ => {}
    }

    enemy_turn(world, out_events);
}

fn attack_player(world: &mut World, out_events: &mut Vec<Event>) {
    let struck: Vec<EnemyId> = world
        .field
        .radius(world.player.position)
        .filter(|(_, tile)| *tile == Tile::Enemy)
        .filter_map(|(cell, _)| world.enemy_id_at(cell))
        .collect();

    // A whiff costs nothing, not even the enemies' turn.
    if struck.is_empty() {
        return;
    }

    for id in struck {
        let Some(index) = world.enemy_index(id) else {
            continue;
        };
        let remaining = {
            let enemy = &mut world.enemies[index];
            enemy.hp = enemy.hp.saturating_sub(world.player.attack);
            enemy.hp
        };
        out_events.push(Event::EnemyStruck {
            enemy: id,
            remaining_hp: remaining,
        });

        if remaining == 0 {
            let cell = world.enemies[index].position;
            world.field.set_tile(cell, Tile::Floor);
            let _ = world.enemies.remove(index);
            out_events.push(Event::EnemySlain { enemy: id, cell });
        }
    }

    if world.enemies.is_empty() {
        finish(world, Outcome::Won, out_events);
        return;
    }

    // One follow-up enemy turn per attack action, however many hits landed.
    enemy_turn(world, out_events);
}

/// Runs the combined enemy turn: the wander pass, then the strike pass.
fn enemy_turn(world: &mut World, out_events: &mut Vec<Event>) {
    move_enemies(world, out_events);
    strike_player(world, out_events);
}

fn move_enemies(world: &mut World, out_events: &mut Vec<Event>) {
    // Roster snapshot so mid-pass mutations never perturb iteration.
    for id in world.roster_ids() {
        let Some(index) = world.enemy_index(id) else {
            continue;
        };
        let from = world.enemies[index].position;

        let mut player_adjacent = false;
        let mut candidates: Vec<CellCoord> = Vec::new();
        for (cell, tile) in world.field.radius(from) {
            match tile {
                Tile::Player => player_adjacent = true,
                Tile::Floor => candidates.push(cell),
                _ => {}
            }
        }

        // Hold position to fight instead of wandering away.
        if player_adjacent {
            world.enemies[index].player_nearby = true;
            continue;
        }

        // Forced stay when the neighborhood offers no floor.
        let Some(destination) = rng::choose(&mut world.rng, &candidates).copied() else {
            continue;
        };

        world.field.set_tile(from, Tile::Floor);
        world.field.set_tile(destination, Tile::Enemy);
        world.enemies[index].position = destination;
        out_events.push(Event::EnemyMoved {
            enemy: id,
            from,
            to: destination,
        });
    }
}

fn strike_player(world: &mut World, out_events: &mut Vec<Event>) {
    for id in world.roster_ids() {
        let Some(index) = world.enemy_index(id) else {
            continue;
        };
        let position = world.enemies[index].position;
        let player_adjacent = world
            .field
            .radius(position)
            .any(|(_, tile)| tile == Tile::Player);
        world.enemies[index].player_nearby = player_adjacent;
        if !player_adjacent {
            continue;
        }

        let remaining = world.player.hp.damage(world.config.enemy_damage);
        out_events.push(Event::PlayerStruck {
            enemy: id,
            remaining_hp: remaining,
        });

        if world.player.hp.is_depleted() {
            world.field.set_tile(world.player.position, Tile::Floor);
            finish(world, Outcome::Lost, out_events);
            return;
        }
    }
}

fn finish(world: &mut World, outcome: Outcome, out_events: &mut Vec<Event>) {
    world.outcome = outcome;
    out_events.push(Event::GameEnded { outcome });
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use dungeon_horde_core::{CellCoord, EnemyId, Field, GameConfig, HitPoints, Outcome};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the construction-time configuration.
    #[must_use]
    pub fn config(world: &World) -> &GameConfig {
        &world.config
    }

    /// Provides read-only access to the dungeon field for rendering.
    #[must_use]
    pub fn field(world: &World) -> &Field {
        &world.field
    }

    /// Reports the lifecycle state the world has reached.
    #[must_use]
    pub fn outcome(world: &World) -> Outcome {
        world.outcome
    }

    /// Captures a read-only snapshot of the player.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            cell: world.player.position,
            hp: world.player.hp,
            attack: world.player.attack,
        }
    }

    /// Captures a read-only view of the living enemies.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        let mut snapshots: Vec<EnemySnapshot> = world
            .enemies
            .iter()
            .map(|enemy| EnemySnapshot {
                id: enemy.id,
                cell: enemy.position,
                hp: enemy.hp,
                player_nearby: enemy.player_nearby,
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        EnemyView { snapshots }
    }

    /// Immutable representation of the player's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PlayerSnapshot {
        /// Grid cell currently occupied by the player.
        pub cell: CellCoord,
        /// Health pool, current and maximum.
        pub hp: HitPoints,
        /// Attack power applied to every melee hit.
        pub attack: u32,
    }

    /// Read-only snapshot describing all living enemies.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EnemyView {
        snapshots: Vec<EnemySnapshot>,
    }

    impl EnemyView {
        /// Iterator over the captured enemy snapshots in deterministic order.
        pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
            self.snapshots.iter()
        }

        /// Number of living enemies in the roster.
        #[must_use]
        pub fn len(&self) -> usize {
            self.snapshots.len()
        }

        /// Reports whether the roster is empty.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.snapshots.is_empty()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EnemySnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single enemy's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EnemySnapshot {
        /// Unique identifier assigned to the enemy.
        pub id: EnemyId,
        /// Grid cell currently occupied by the enemy.
        pub cell: CellCoord,
        /// Health the enemy has left.
        pub hp: u32,
        /// Whether the enemy saw the player adjacent during its last turn.
        pub player_nearby: bool,
    }
}

#[derive(Clone, Copy, Debug)]
struct Player {
    hp: HitPoints,
    attack: u32,
    position: CellCoord,
}

#[derive(Clone, Copy, Debug)]
struct Enemy {
    id: EnemyId,
    position: CellCoord,
    hp: u32,
    player_nearby: bool,
}

impl Enemy {
    fn from_seed(seed: EnemySeed) -> Self {
        Self {
            id: seed.id,
            position: seed.cell,
            hp: seed.hp,
            player_nearby: false,
        }
    }
}
