//! Text rendering of the world state for the terminal.

use dungeon_horde_core::{CellCoord, Event, Outcome, Tile};
use dungeon_horde_world::{query, World};

use crate::viewport::Viewport;

const fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Wall => '#',
        Tile::Floor => '.',
        Tile::Sword => '/',
        Tile::Heal => '+',
        Tile::Enemy => 'e',
        Tile::Player => '@',
    }
}

/// Renders the visible window plus a status line.
pub(crate) fn frame(world: &World, viewport: &Viewport) -> String {
    let field = query::field(world);
    let (origin_column, origin_row) = viewport.origin();
    let (view_columns, view_rows) = viewport.size();

    let mut out = String::new();
    for row in origin_row..origin_row + view_rows {
        for column in origin_column..origin_column + view_columns {
            let tile = field
                .tile(CellCoord::new(column, row))
                .expect("viewport cell lies within the field");
            out.push(glyph(tile));
        }
        out.push('\n');
    }

    let player = query::player(world);
    let enemies = query::enemy_view(world);
    out.push_str(&format!(
        "HP {}/{}  ATK {}  enemies {}\n",
        player.hp.current(),
        player.hp.max(),
        player.attack,
        enemies.len(),
    ));
    out
}

/// Translates combat events into log lines; movement stays silent.
pub(crate) fn describe(event: &Event) -> Option<String> {
    match event {
        Event::HealConsumed { restored, .. } => {
            Some(format!("You drink a potion and recover {restored} HP."))
        }
        Event::SwordCollected { attack, .. } => {
            Some(format!("You pick up a sword. Attack is now {attack}."))
        }
        Event::EnemyStruck {
            enemy,
            remaining_hp,
        } => Some(format!(
            "You hit enemy {} ({remaining_hp} HP left).",
            enemy.get()
        )),
        Event::EnemySlain { enemy, .. } => Some(format!("Enemy {} falls.", enemy.get())),
        Event::PlayerStruck { remaining_hp, .. } => {
            Some(format!("An enemy hits you ({remaining_hp} HP left)."))
        }
        Event::PlayerMoved { .. } | Event::EnemyMoved { .. } | Event::GameEnded { .. } => None,
    }
}

/// Terminal message shown once the game has ended.
pub(crate) const fn end_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Running => None,
        Outcome::Won => Some("You won. Every enemy has fallen."),
        Outcome::Lost => Some("You lost. The horde prevailed."),
    }
}

#[cfg(test)]
mod tests {
    use super::{describe, end_message, glyph};
    use dungeon_horde_core::{CellCoord, EnemyId, Event, Outcome, Tile};

    #[test]
    fn every_tile_has_a_distinct_glyph() {
        let tiles = [
            Tile::Wall,
            Tile::Floor,
            Tile::Sword,
            Tile::Heal,
            Tile::Enemy,
            Tile::Player,
        ];
        let mut glyphs: Vec<char> = tiles.iter().map(|tile| glyph(*tile)).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), tiles.len());
    }

    #[test]
    fn only_terminal_outcomes_have_messages() {
        assert!(end_message(Outcome::Running).is_none());
        assert!(end_message(Outcome::Won).is_some());
        assert!(end_message(Outcome::Lost).is_some());
    }

    #[test]
    fn movement_events_stay_out_of_the_log() {
        let silent = Event::PlayerMoved {
            from: CellCoord::new(0, 0),
            to: CellCoord::new(1, 0),
        };
        assert!(describe(&silent).is_none());

        let loud = Event::EnemySlain {
            enemy: EnemyId::new(3),
            cell: CellCoord::new(1, 1),
        };
        assert!(describe(&loud).is_some());
    }
}
