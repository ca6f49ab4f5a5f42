use crate::engine::battle::Battle;
use crate::engine::chest::{handle_chest_command, open_chest};
use crate::engine::command::{Command, parse_command};
use crate::engine::items::{
    Opened, handle_check, handle_drop, handle_inventory, handle_investigate, handle_open,
    handle_take,
};
use crate::engine::level::Level;
use crate::engine::movement::{handle_bad_direction, try_handle_movement};
use crate::engine::output::Output;
use crate::engine::render::render_cell;
use crate::world::{Coord, Direction, OutOfBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    LevelComplete,
    PlayerDead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Exploring,
    /// A chest in the given cell is open; only chest commands apply.
    ChestOpen { at: Coord },
    LevelComplete,
    PlayerDead,
}

const HELP: &str = "Commands: go <north|south|east|west>, get <item>, drop <item>, \
check <item>, investigate <item>, open <item>, inventory, look, quit";

/// Turn-by-turn state machine over one level.
pub struct Interpreter {
    level: Level,
    battle: Box<dyn Battle>,
    state: State,
    came_from: Option<Direction>,
}

impl Interpreter {
    pub fn new(level: Level, battle: Box<dyn Battle>) -> Self {
        Interpreter {
            level,
            battle,
            state: State::Exploring,
            came_from: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    /// Start over on a fresh level, keeping the battle collaborator.
    pub fn replace_level(&mut self, level: Level) -> Level {
        self.state = State::Exploring;
        self.came_from = None;
        std::mem::replace(&mut self.level, level)
    }

    pub fn outcome(&self) -> TurnOutcome {
        match self.state {
            State::Exploring | State::ChestOpen { .. } => TurnOutcome::Continue,
            State::LevelComplete => TurnOutcome::LevelComplete,
            State::PlayerDead => TurnOutcome::PlayerDead,
        }
    }

    pub fn render(&self) -> Result<Output, OutOfBounds> {
        let mut out = Output::new();
        render_cell(&mut out, &self.level, self.came_from)?;
        Ok(out)
    }

    pub fn render_text(&self) -> Result<String, OutOfBounds> {
        Ok(self.render()?.to_text())
    }

    /// Read one line, apply it, and report where the level stands. Once the
    /// level is over further input is ignored.
    pub fn process_turn(&mut self, input: &str) -> Result<(Output, TurnOutcome), OutOfBounds> {
        let mut out = Output::new();
        let command = parse_command(input);

        match self.state {
            State::LevelComplete | State::PlayerDead => return Ok((out, self.outcome())),
            State::Exploring => {
                self.came_from = None;
                self.explore(&mut out, &command, input)?;
            }
            State::ChestOpen { at } => {
                if handle_chest_command(&mut out, &mut self.level, at, &command, input)? {
                    self.state = State::Exploring;
                }
            }
        }

        if !self.level.player.alive && self.state != State::PlayerDead {
            tracing::info!(
                level = self.level.number,
                score = self.level.player.score,
                "player died"
            );
            self.state = State::PlayerDead;
        }

        if self.state == State::Exploring {
            render_cell(&mut out, &self.level, self.came_from)?;
        }

        Ok((out, self.outcome()))
    }

    fn explore(&mut self, out: &mut Output, command: &Command, raw: &str) -> Result<(), OutOfBounds> {
        match command {
            Command::Go(dir) => {
                self.came_from =
                    try_handle_movement(out, &mut self.level, self.battle.as_mut(), *dir)?;
            }
            Command::GoNowhere(raw_dir) => handle_bad_direction(out, raw_dir),
            Command::Get(label) => handle_take(out, &mut self.level, label)?,
            Command::Drop(label) => handle_drop(out, &mut self.level, label)?,
            Command::Check(label) => handle_check(out, &self.level, label)?,
            Command::Investigate(label) => handle_investigate(out, &self.level, label)?,
            Command::Open(label) => match handle_open(out, &self.level, label)? {
                Opened::Chest => {
                    let at = self.level.player.position;
                    open_chest(out, &mut self.level, at)?;
                    self.state = State::ChestOpen { at };
                    tracing::debug!(%at, "chest opened");
                }
                Opened::Door => {
                    self.level.complete = true;
                    self.state = State::LevelComplete;
                    tracing::info!(level = self.level.number, "level complete");
                }
                Opened::Nothing => {}
            },
            Command::Inventory => handle_inventory(out, &self.level),
            Command::Look => {}
            Command::Help => out.say(HELP),
            Command::Quit => {
                out.say("You give up and sit down in the dark.");
                self.level.player.alive = false;
            }
            Command::Close(_) | Command::Unrecognized(_) => {
                out.say(format!("I don't understand {}...", raw.trim()));
            }
        }
        Ok(())
    }
}
