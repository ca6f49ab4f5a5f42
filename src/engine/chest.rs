use crate::engine::command::Command;
use crate::engine::level::Level;
use crate::engine::output::Output;
use crate::world::{Coord, OutOfBounds, PickUp};

/// Mark the chest in `at` open and list what it holds.
pub fn open_chest(out: &mut Output, level: &mut Level, at: Coord) -> Result<(), OutOfBounds> {
    let cell = level.maze.get_cell_mut(at)?;
    let Some(chest) = cell.item.as_mut() else {
        return Ok(());
    };

    chest.open = true;
    out.say(format!(
        "The {} is open and contains the following:",
        chest.description
    ));
    if chest.contains.is_empty() {
        out.say("* nothing at all");
    }
    for inner in &chest.contains {
        out.say(format!("* {}", inner.description));
    }
    Ok(())
}

/// One turn while a chest is open. Returns `true` once the chest is closed.
/// Only `get` and `close` are understood; nothing else touches the level.
pub fn handle_chest_command(
    out: &mut Output,
    level: &mut Level,
    at: Coord,
    command: &Command,
    raw: &str,
) -> Result<bool, OutOfBounds> {
    match command {
        Command::Get(label) => {
            let cell = level.maze.get_cell_mut(at)?;
            match level.player.pick_up_item(label, cell, true) {
                PickUp::Taken { label } => {
                    out.say(format!("You take the {} from the chest.", label))
                }
                PickUp::NotAllowed { label } => {
                    out.say(format!("The {} won't come out of the chest.", label))
                }
                PickUp::NotHere => out.say(format!("There is no {} in the chest", label)),
            }
            Ok(false)
        }
        Command::Close(None) => close_chest(out, level, at),
        Command::Close(Some(target)) if target == "chest" => close_chest(out, level, at),
        _ => {
            out.say(format!("I don't understand {}...", raw.trim()));
            Ok(false)
        }
    }
}

fn close_chest(out: &mut Output, level: &mut Level, at: Coord) -> Result<bool, OutOfBounds> {
    let cell = level.maze.get_cell_mut(at)?;
    if let Some(chest) = cell.item.as_mut() {
        chest.open = false;
        out.say(format!("You close the {}", chest.description));
    }
    Ok(true)
}
