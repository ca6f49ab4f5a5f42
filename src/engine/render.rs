use crate::engine::level::Level;
use crate::engine::output::Output;
use crate::world::{Direction, OutOfBounds};

pub const LANTERN: &str = "lantern";

/// Describe the player's cell. Exits and item details are only visible with
/// the lantern in the pouch.
pub fn render_cell(
    out: &mut Output,
    level: &Level,
    came_from: Option<Direction>,
) -> Result<(), OutOfBounds> {
    let cell = level.current_cell()?;

    if let Some(dir) = came_from {
        out.say(format!("You came from the {}.", dir));
    }

    if level.player.is_in_pouch(LANTERN) {
        out.say("You've got the lantern. It lights up your surroundings.");
        if let Some(item) = &cell.item {
            out.say(format!("There is a {} here.", item.description));
        }

        let exits = cell.open_directions();
        if exits.is_empty() {
            out.set_exits("You can go: nowhere");
        } else {
            let list = exits
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<&str>>()
                .join(", ");
            out.set_exits(format!("You can go: {}", list));
        }
    } else {
        out.say("The area is very dark!");
        if cell.has_item() {
            out.say("There is something in this room, maybe check it out?");
        }
    }

    Ok(())
}
