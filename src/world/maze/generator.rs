use rand::Rng;
use rand::seq::SliceRandom;

use super::{Coord, Direction, Maze};
use crate::world::error::ConfigError;
use crate::world::model::{Enemy, Item, KeyItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    pub start: Coord,
}

impl GenerationConfig {
    pub fn new(width: usize, height: usize) -> Self {
        GenerationConfig {
            width,
            height,
            start: Coord::new(0, 0),
        }
    }

    pub fn with_start(mut self, start: Coord) -> Self {
        self.start = start;
        self
    }
}

/// Builds a carved, populated maze. Randomness comes only from the `Rng`
/// passed to [`MazeGenerator::generate`].
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    config: GenerationConfig,
}

impl MazeGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        let GenerationConfig {
            width,
            height,
            start,
        } = config;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if start.x >= width || start.y >= height {
            return Err(ConfigError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width,
                height,
            });
        }
        Ok(MazeGenerator { config })
    }

    pub fn config(&self) -> GenerationConfig {
        self.config
    }

    /// Carve a spanning tree and scatter content.
    ///
    /// Every key item lands on its fixed cell; `usable` items each get a
    /// distinct random cell free of key items; enemies get one random cell
    /// each, never the start cell. Enemies beyond the free cell count are
    /// left out.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        usable: Vec<Item>,
        key_items: Vec<KeyItem>,
        enemies: Vec<Enemy>,
    ) -> Result<Maze, ConfigError> {
        let placements = self.resolve_key_positions(&key_items)?;

        let mut maze = Maze::walled(self.config.width, self.config.height);
        self.carve(&mut maze, rng);

        for (key, at) in key_items.into_iter().zip(placements) {
            if let Ok(cell) = maze.get_cell_mut(at) {
                cell.item = Some(key.item);
            }
        }

        let mut free: Vec<Coord> = maze
            .cells()
            .filter(|c| !c.has_item())
            .map(|c| c.coord())
            .collect();
        free.shuffle(rng);
        let usable_count = usable.len().min(free.len());
        for (item, at) in usable.into_iter().zip(free.into_iter()) {
            if let Ok(cell) = maze.get_cell_mut(at) {
                cell.item = Some(item);
            }
        }

        let start = self.config.start;
        let mut lairs: Vec<Coord> = maze
            .cells()
            .map(|c| c.coord())
            .filter(|c| *c != start)
            .collect();
        lairs.shuffle(rng);
        if enemies.len() > lairs.len() {
            tracing::warn!(
                enemies = enemies.len(),
                cells = lairs.len(),
                "more enemies than free cells; extra enemies are not placed"
            );
        }
        let enemy_count = enemies.len().min(lairs.len());
        for (enemy, at) in enemies.into_iter().zip(lairs) {
            if let Ok(cell) = maze.get_cell_mut(at) {
                cell.enemy = Some(enemy);
            }
        }

        tracing::debug!(
            width = maze.width(),
            height = maze.height(),
            passages = maze.open_edge_count(),
            usable = usable_count,
            enemies = enemy_count,
            "maze generated"
        );

        Ok(maze)
    }

    /// Bounds-check every fixed coordinate before any carving happens.
    fn resolve_key_positions(&self, key_items: &[KeyItem]) -> Result<Vec<Coord>, ConfigError> {
        let GenerationConfig { width, height, .. } = self.config;
        let mut claimed: Vec<(Coord, &str)> = Vec::with_capacity(key_items.len());

        for key in key_items {
            let in_bounds = key.x >= 0
                && key.y >= 0
                && (key.x as u64) < width as u64
                && (key.y as u64) < height as u64;
            if !in_bounds {
                return Err(ConfigError::KeyItemOutOfBounds {
                    label: key.item.label.clone(),
                    x: key.x,
                    y: key.y,
                    width,
                    height,
                });
            }

            let at = Coord::new(key.x as usize, key.y as usize);
            if let Some((_, other)) = claimed.iter().find(|(c, _)| *c == at) {
                return Err(ConfigError::KeyItemsOverlap {
                    first: other.to_string(),
                    second: key.item.label.clone(),
                    x: at.x,
                    y: at.y,
                });
            }
            claimed.push((at, key.item.label.as_str()));
        }

        Ok(claimed.into_iter().map(|(c, _)| c).collect())
    }

    /// Randomized depth-first backtracker from the start cell.
    fn carve<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R) {
        let width = maze.width();
        let mut visited = vec![false; width * maze.height()];
        let mut stack: Vec<Coord> = Vec::new();
        let mut current = self.config.start;
        visited[current.y * width + current.x] = true;

        loop {
            let unvisited: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|d| {
                    maze.neighbor(current, *d)
                        .is_some_and(|n| !visited[n.y * width + n.x])
                })
                .collect();

            if unvisited.is_empty() {
                match stack.pop() {
                    Some(prev) => current = prev,
                    None => break,
                }
                continue;
            }

            let dir = unvisited[rng.gen_range(0..unvisited.len())];
            // The neighbor was just found in bounds, so this cannot fail.
            let Ok(next) = maze.remove_wall(current, dir) else {
                break;
            };
            stack.push(current);
            visited[next.y * width + next.x] = true;
            current = next;
        }
    }
}
