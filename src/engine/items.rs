use crate::engine::level::Level;
use crate::engine::output::Output;
use crate::world::{DropOutcome, ItemAction, OutOfBounds, PickUp};

/// Result of `open <label>` when it changes the interpreter's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opened {
    Chest,
    Door,
    Nothing,
}

pub fn handle_inventory(out: &mut Output, level: &Level) {
    let pouch = &level.player.pouch;
    if pouch.is_empty() {
        out.say("Your pouch is empty.");
        return;
    }

    out.say("Your pouch contains:");
    for item in pouch.items() {
        out.say(format!("* {}", item.label));
    }
}

pub fn handle_take(out: &mut Output, level: &mut Level, label: &str) -> Result<(), OutOfBounds> {
    let cell = level.maze.get_cell_mut(level.player.position)?;
    match level.player.pick_up_item(label, cell, false) {
        PickUp::Taken { label } => out.say(format!("You put the {} in your pouch.", label)),
        PickUp::NotAllowed { label } => out.say(format!("You can't pick up the {}.", label)),
        PickUp::NotHere => out.say(format!("There is no {} here", label)),
    }
    Ok(())
}

pub fn handle_drop(out: &mut Output, level: &mut Level, label: &str) -> Result<(), OutOfBounds> {
    let cell = level.maze.get_cell_mut(level.player.position)?;
    match level.player.drop_item(label, cell) {
        DropOutcome::Dropped { label } => out.say(format!("You drop the {}", label)),
        DropOutcome::CellOccupied => out.say(format!(
            "This space isn't empty! You can't drop the {}",
            label
        )),
        DropOutcome::NotDroppable { .. } | DropOutcome::NotCarried => out.say(format!(
            "You can't drop the {}, you should have thought of this earlier",
            label
        )),
    }
    Ok(())
}

/// `check` looks at whatever lies in the cell, provided it allows it.
pub fn handle_check(out: &mut Output, level: &Level, label: &str) -> Result<(), OutOfBounds> {
    match &level.current_cell()?.item {
        Some(item) if item.allows(ItemAction::Check) => {
            out.say(format!("You look at the {}", label));
            out.say(format!("It's a {}", item.description));
        }
        _ => out.say("You can't check that out."),
    }
    Ok(())
}

/// Resolution order: empty cell, item that cannot be investigated, matching
/// label, anything else.
pub fn investigate_item(level: &Level, label: &str) -> Result<String, OutOfBounds> {
    let Some(item) = &level.current_cell()?.item else {
        return Ok("There is nothing to investigate here!".to_string());
    };

    let text = if !item.allows(ItemAction::Investigate) {
        format!("Can't investigate {} further!", item.description)
    } else if item.is_labeled(label) {
        item.bonus.clone()
    } else {
        format!("There is no {} here, but something else!", label)
    };
    Ok(text)
}

pub fn handle_investigate(out: &mut Output, level: &Level, label: &str) -> Result<(), OutOfBounds> {
    out.say(investigate_item(level, label)?);
    Ok(())
}

/// Opening needs a matching label and, if the item names a requirement, that
/// item in the pouch. Only chests and doors can actually be opened.
pub fn handle_open(out: &mut Output, level: &Level, label: &str) -> Result<Opened, OutOfBounds> {
    let item = match &level.current_cell()?.item {
        Some(item) if item.is_labeled(label) => item,
        _ => {
            out.say("There is nothing to open here!");
            return Ok(Opened::Nothing);
        }
    };

    if !level.player.meets_requirement(item.requirement.as_deref()) {
        out.say(format!(
            "The {} is locked, you need something to unlock it with!",
            label
        ));
        return Ok(Opened::Nothing);
    }

    let opened = match item.label.as_str() {
        "chest" => Opened::Chest,
        "door" => {
            out.say("You open the door and move further!");
            Opened::Door
        }
        _ => {
            out.say(format!("I can't understand \"open {}\"", label));
            Opened::Nothing
        }
    };
    Ok(opened)
}
