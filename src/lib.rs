pub mod engine;
pub mod world;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use engine::{Interpreter, Level, Output, SkirmishBattle, TurnOutcome};
use world::{Catalog, ConfigError, Coord, OutOfBounds, Player};

pub use world::{load_catalog_from_file, load_catalog_from_str};

/// Mixed into the session seed so battle rolls draw from their own stream.
const BATTLE_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bounds(#[from] OutOfBounds),
}

/// A run through successive levels until the player dies or quits.
pub struct Game {
    catalog: Catalog,
    rng: ChaCha8Rng,
    seed: u64,
    interpreter: Interpreter,
    over: bool,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        game: Game,
        initialized: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML catalog string. Call `init()` to get the initial render.
        #[wasm_bindgen(constructor)]
        pub fn new(catalog_toml: &str, seed: u64) -> Result<WasmGame, JsValue> {
            let catalog =
                load_catalog_from_str(catalog_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            let game = Game::new(catalog, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                game,
                initialized: false,
            })
        }

        /// Initialize the game and return the initial render output.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            self.initialized = true;
            match self.game.initialize() {
                Ok(out) => to_value(&WasmStepResult {
                    blocks: out.blocks,
                    quit: false,
                })
                .unwrap_or(JsValue::NULL),
                Err(_) => JsValue::NULL,
            }
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            if !self.initialized {
                let _ = self.init();
            }
            match self.game.step(input) {
                Ok((out, quit)) => to_value(&WasmStepResult {
                    blocks: out.blocks,
                    quit,
                })
                .unwrap_or(JsValue::NULL),
                Err(e) => JsValue::from_str(&e.to_string()),
            }
        }
    }
}

impl Game {
    pub fn new(catalog: Catalog, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let battle = SkirmishBattle::new(ChaCha8Rng::seed_from_u64(seed ^ BATTLE_STREAM));

        let (sx, sy) = catalog.settings.start;
        let player = Player::new(catalog.player, Coord::new(sx, sy));
        let level = Level::generate(1, &catalog, player, &mut rng)?;

        Ok(Game {
            catalog,
            rng,
            seed,
            interpreter: Interpreter::new(level, Box::new(battle)),
            over: false,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn level_number(&self) -> u32 {
        self.interpreter.level().number
    }

    pub fn player(&self) -> &Player {
        &self.interpreter.level().player
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn initialize(&self) -> Result<Output, GameError> {
        let mut out = Output::new();
        out.title(format!("Welcome to {}!", self.catalog.settings.name));
        out.say(self.catalog.settings.intro.clone());
        out.say("Type 'help' for a list of commands.");
        out.append(self.interpreter.render()?);
        Ok(out)
    }

    /// Process a single player input; returns (output, game over?)
    pub fn step(&mut self, input: &str) -> Result<(Output, bool), GameError> {
        if self.over {
            let mut out = Output::new();
            out.say("The game is over.");
            return Ok((out, true));
        }

        let (mut out, outcome) = self.interpreter.process_turn(input)?;
        match outcome {
            TurnOutcome::Continue => Ok((out, false)),
            TurnOutcome::LevelComplete => {
                self.advance(&mut out)?;
                Ok((out, false))
            }
            TurnOutcome::PlayerDead => {
                out.event(format!(
                    "Your journey ends on level {} with a score of {}.",
                    self.level_number(),
                    self.player().score
                ));
                self.over = true;
                Ok((out, true))
            }
        }
    }

    /// Carry the player into the next maze. The pouch is emptied; health and
    /// score get the per-level bonuses.
    fn advance(&mut self, out: &mut Output) -> Result<(), GameError> {
        let settings = &self.catalog.settings;
        let cleared = self.level_number();
        let mut player = self.player().clone();
        player.score += settings.level_score_bonus * cleared;
        player.health += settings.level_health_bonus;
        player.pouch.clear();

        out.event(format!(
            "You enter a new maze. Your current score is {}, well done!",
            player.score
        ));
        out.event(format!(
            "Your pouch loses its belongings, but you gain {} extra health points for the journey. Good luck!",
            settings.level_health_bonus
        ));

        let level = Level::generate(cleared + 1, &self.catalog, player, &mut self.rng)?;
        self.interpreter.replace_level(level);
        tracing::info!(level = cleared + 1, "entered next level");

        out.title(format!("Level {}", cleared + 1));
        out.append(self.interpreter.render()?);
        Ok(())
    }
}
