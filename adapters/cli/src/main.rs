#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots and drives the Dungeon Horde experience.
//!
//! The adapter owns everything the engine deliberately excludes: key-to-
//! command mapping, viewport scrolling, and rendering. It forwards discrete
//! commands to the world one at a time and stops forwarding once the
//! outcome is terminal.

mod render;
mod viewport;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use dungeon_horde_core::{
    CellCoord, Command, Direction, EnemyId, GameConfig, HitPoints, Outcome, Tile,
};
use dungeon_horde_system_bootstrap::Bootstrap;
use dungeon_horde_world::{apply, query, World};
use serde::Serialize;

use crate::viewport::Viewport;

const MAX_VIEW_COLUMNS: u32 = 30;
const MAX_VIEW_ROWS: u32 = 16;

/// Command-line interface for the Dungeon Horde roguelike.
#[derive(Debug, Parser)]
struct Args {
    /// Seed for dungeon generation and enemy movement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of dungeon columns.
    #[arg(long)]
    columns: Option<u32>,

    /// Override the number of dungeon rows.
    #[arg(long)]
    rows: Option<u32>,

    /// Print the assembled world as JSON and exit without playing.
    #[arg(long)]
    inspect: bool,
}

/// Entry point for the Dungeon Horde command-line interface.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = GameConfig::default();
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let world = Bootstrap::default()
        .assemble(config, seed)
        .context("failed to assemble the dungeon")?;

    if args.inspect {
        let dump = WorldDump::capture(&world);
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).context("failed to encode world dump")?
        );
        return Ok(());
    }

    println!("{}", query::welcome_banner(&world));
    let scenario = query::config(&world);
    println!(
        "seed {seed}: {}x{} dungeon, {} enemies",
        scenario.columns, scenario.rows, scenario.enemy_count
    );
    println!("move: w/a/s/d   attack: f   scroll: h/j/k/l   quit: q");
    run(world)
}

fn run(mut world: World) -> anyhow::Result<()> {
    let field = query::field(&world);
    let mut viewport = Viewport::fitted(
        field.columns(),
        field.rows(),
        MAX_VIEW_COLUMNS,
        MAX_VIEW_ROWS,
    );

    print!("{}", render::frame(&world, &viewport));
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let Some(key) = line.trim().chars().next() else {
            continue;
        };

        if key == 'q' {
            break;
        }

        // Viewport scrolling never touches the world.
        match key {
            'h' => viewport.scroll(-1, 0),
            'l' => viewport.scroll(1, 0),
            'k' => viewport.scroll(0, -1),
            'j' => viewport.scroll(0, 1),
            _ => {
                // The dispatch layer gates on the terminal outcome before
                // forwarding any command to the engine.
                if query::outcome(&world).is_terminal() {
                    break;
                }
                let Some(command) = command_for(key) else {
                    continue;
                };
                let mut events = Vec::new();
                apply(&mut world, command, &mut events);
                for event in &events {
                    if let Some(log_line) = render::describe(event) {
                        println!("{log_line}");
                    }
                }
            }
        }

        print!("{}", render::frame(&world, &viewport));
        let _ = io::stdout().flush();

        if let Some(message) = render::end_message(query::outcome(&world)) {
            println!("{message}");
            break;
        }
    }

    Ok(())
}

const fn command_for(key: char) -> Option<Command> {
    match key {
        'w' => Some(Command::MovePlayer {
            direction: Direction::North,
        }),
        's' => Some(Command::MovePlayer {
            direction: Direction::South,
        }),
        'a' => Some(Command::MovePlayer {
            direction: Direction::West,
        }),
        'd' => Some(Command::MovePlayer {
            direction: Direction::East,
        }),
        'f' => Some(Command::AttackPlayer),
        _ => None,
    }
}

/// Serializable snapshot of an assembled world, used by `--inspect`.
#[derive(Debug, Serialize)]
struct WorldDump {
    columns: u32,
    rows: u32,
    tiles: Vec<Tile>,
    player: PlayerDump,
    enemies: Vec<EnemyDump>,
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
struct PlayerDump {
    cell: CellCoord,
    hp: HitPoints,
    attack: u32,
}

#[derive(Debug, Serialize)]
struct EnemyDump {
    id: EnemyId,
    cell: CellCoord,
    hp: u32,
}

impl WorldDump {
    fn capture(world: &World) -> Self {
        let field = query::field(world);
        let player = query::player(world);
        Self {
            columns: field.columns(),
            rows: field.rows(),
            tiles: field.cells().to_vec(),
            player: PlayerDump {
                cell: player.cell,
                hp: player.hp,
                attack: player.attack,
            },
            enemies: query::enemy_view(world)
                .iter()
                .map(|snapshot| EnemyDump {
                    id: snapshot.id,
                    cell: snapshot.cell,
                    hp: snapshot.hp,
                })
                .collect(),
            outcome: query::outcome(world),
        }
    }
}
