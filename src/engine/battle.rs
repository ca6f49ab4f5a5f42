use rand::Rng;

use crate::engine::output::Output;
use crate::world::{Direction, GridCell, Player};

/// Hand-off point for combat. Called when the player arrives on a cell that
/// holds an enemy. Implementations may kill the player (`alive = false`) or
/// clear `cell.enemy` on victory.
pub trait Battle {
    fn engage(&mut self, heading: Direction, player: &mut Player, cell: &mut GridCell, out: &mut Output);
}

/// Auto-resolving exchange of blows, player first.
pub struct SkirmishBattle<R: Rng> {
    rng: R,
}

impl<R: Rng> SkirmishBattle<R> {
    pub fn new(rng: R) -> Self {
        SkirmishBattle { rng }
    }
}

impl<R: Rng> Battle for SkirmishBattle<R> {
    fn engage(&mut self, heading: Direction, player: &mut Player, cell: &mut GridCell, out: &mut Output) {
        let Some(enemy) = cell.enemy.as_mut() else {
            return;
        };

        out.event(format!(
            "Heading {} you bumped into a {}! PREPARE TO FIGHT!",
            heading, enemy.name
        ));
        if !enemy.description.is_empty() {
            out.event(enemy.description.clone());
        }

        let attack = player.effective_attack();
        let defend = player.effective_defend();

        while player.alive && enemy.is_alive() {
            let hit = (self.rng.gen_range(1..=6) + attack - enemy.defend).max(1);
            enemy.health -= hit;
            out.event(format!("You strike the {} for {} damage.", enemy.name, hit));
            if !enemy.is_alive() {
                break;
            }

            let hit = (self.rng.gen_range(0..=2) + enemy.attack - defend).max(1);
            player.health -= hit;
            out.event(format!("The {} hits you for {} damage.", enemy.name, hit));
            if player.health <= 0 {
                player.health = 0;
                player.alive = false;
            }
        }

        if player.alive {
            out.event(format!(
                "The {} is defeated! You have {} health points left.",
                enemy.name, player.health
            ));
            player.score += enemy.points;
            tracing::debug!(enemy = %enemy.name, points = enemy.points, "enemy defeated");
            cell.enemy = None;
        } else {
            out.event(format!("The {} has slain you.", enemy.name));
        }
    }
}
