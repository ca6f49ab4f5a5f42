#![allow(dead_code)]

use maze_crawl::engine::{Battle, Interpreter, Level, Output, SkirmishBattle};
use maze_crawl::world::{
    Coord, Direction, Enemy, GenerationConfig, GridCell, Item, ItemAction, KeyItem, Maze,
    MazeGenerator, Player, PlayerStats,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn maze(width: usize, height: usize, seed: u64, key_items: Vec<KeyItem>, enemies: Vec<Enemy>) -> Maze {
    let generator = MazeGenerator::new(GenerationConfig::new(width, height)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generator
        .generate(&mut rng, Vec::new(), key_items, enemies)
        .unwrap()
}

pub fn interpreter(maze: Maze) -> Interpreter {
    let player = Player::new(PlayerStats::default(), Coord::new(0, 0));
    let level = Level::new(1, maze, player).unwrap();
    Interpreter::new(level, Box::new(SkirmishBattle::new(ChaCha8Rng::seed_from_u64(0))))
}

pub fn key_item(item: Item, x: i64, y: i64) -> KeyItem {
    KeyItem { item, x, y }
}

pub fn door() -> Item {
    Item::new("door", "heavy door").with_actions(&[ItemAction::Open, ItemAction::Check])
}

pub fn lantern() -> Item {
    Item::new("lantern", "burning lantern")
        .with_actions(&[
            ItemAction::Get,
            ItemAction::Drop,
            ItemAction::Check,
            ItemAction::Investigate,
        ])
        .with_bonus("The lantern lights up the dark corridor!")
}

pub fn sword() -> Item {
    Item::new("sword", "sharp sword").with_actions(&[ItemAction::Get, ItemAction::Drop])
}

pub fn rat() -> Enemy {
    Enemy {
        name: "rat".into(),
        description: String::new(),
        attack: 1,
        defend: 0,
        health: 1,
        points: 1,
    }
}

/// Kills whoever walks in and remembers which way they were heading.
#[derive(Default)]
pub struct Ambush {
    pub headings: std::rc::Rc<std::cell::RefCell<Vec<Direction>>>,
}

impl Battle for Ambush {
    fn engage(&mut self, heading: Direction, player: &mut Player, _cell: &mut GridCell, out: &mut Output) {
        self.headings.borrow_mut().push(heading);
        player.alive = false;
        out.event("Ambushed!");
    }
}
