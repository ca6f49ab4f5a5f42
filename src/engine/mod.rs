mod battle;
mod chest;
mod command;
mod interpreter;
mod items;
mod level;
mod movement;
mod output;
mod render;

pub use battle::{Battle, SkirmishBattle};
pub use command::{Command, parse_command};
pub use interpreter::{Interpreter, State, TurnOutcome};
pub use items::investigate_item;
pub use level::Level;
pub use output::{Output, OutputBlock};
pub use render::{LANTERN, render_cell};
