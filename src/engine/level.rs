use rand::Rng;
use rand::seq::SliceRandom;

use crate::world::{
    Catalog, ConfigError, Coord, Enemy, GenerationConfig, GridCell, Maze, MazeGenerator,
    OutOfBounds, Player,
};

/// One maze traversal: the maze, the player inside it, and the roster size
/// the maze was populated with.
#[derive(Debug, Clone)]
pub struct Level {
    pub number: u32,
    pub maze: Maze,
    pub player: Player,
    pub complete: bool,
    roster_size: usize,
}

impl Level {
    /// Wrap an existing maze. The player must stand inside it.
    pub fn new(number: u32, maze: Maze, player: Player) -> Result<Self, OutOfBounds> {
        maze.get_cell(player.position)?;
        let roster_size = maze.cells().filter(|c| c.has_enemy()).count();
        Ok(Level {
            number,
            maze,
            player,
            complete: false,
            roster_size,
        })
    }

    /// Build level `number` from the catalog. The roster holds one enemy per
    /// maze column, drawn with replacement from the catalog's records.
    pub fn generate<R: Rng + ?Sized>(
        number: u32,
        catalog: &Catalog,
        mut player: Player,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let settings = &catalog.settings;
        let start = Coord::new(settings.start.0, settings.start.1);
        let generator = MazeGenerator::new(
            GenerationConfig::new(settings.width, settings.height).with_start(start),
        )?;

        let roster: Vec<Enemy> = (0..settings.width)
            .filter_map(|_| catalog.enemies.choose(&mut *rng))
            .map(|record| Enemy::spawn(record, number))
            .collect();
        let roster_size = roster.len();

        let usable = catalog
            .usable_items
            .choose_multiple(rng, settings.usable_items_per_level)
            .cloned()
            .collect();

        let maze = generator.generate(rng, usable, catalog.key_items.clone(), roster)?;
        player.position = start;

        tracing::debug!(level = number, roster = roster_size, "level built");

        Ok(Level {
            number,
            maze,
            player,
            complete: false,
            roster_size,
        })
    }

    pub fn current_cell(&self) -> Result<&GridCell, OutOfBounds> {
        self.maze.get_cell(self.player.position)
    }

    pub fn current_cell_mut(&mut self) -> Result<&mut GridCell, OutOfBounds> {
        self.maze.get_cell_mut(self.player.position)
    }

    pub fn roster_size(&self) -> usize {
        self.roster_size
    }

    pub fn enemies_remaining(&self) -> usize {
        self.maze.cells().filter(|c| c.has_enemy()).count()
    }
}
