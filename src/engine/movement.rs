use crate::engine::battle::Battle;
use crate::engine::level::Level;
use crate::engine::output::Output;
use crate::world::{Direction, OutOfBounds};

/// Step through an open wall. Returns the direction the player came from
/// when the move happened; an enemy on the destination starts a battle
/// before the turn ends.
pub fn try_handle_movement(
    out: &mut Output,
    level: &mut Level,
    battle: &mut dyn Battle,
    dir: Direction,
) -> Result<Option<Direction>, OutOfBounds> {
    let from = level.player.position;
    let open = level.current_cell()?.is_open(dir);
    let Some(to) = level.maze.neighbor(from, dir).filter(|_| open) else {
        out.say(format!("You can't go in that direction: {}", dir));
        return Ok(None);
    };

    out.say("You go further in the maze!");
    level.player.move_to(dir);
    debug_assert_eq!(level.player.position, to);

    let cell = level.maze.get_cell_mut(to)?;
    if cell.has_enemy() {
        battle.engage(dir, &mut level.player, cell, out);
    }

    Ok(Some(dir.opposite()))
}

pub fn handle_bad_direction(out: &mut Output, raw: &str) {
    out.say(format!("You can't go in that direction: {}", raw));
}
