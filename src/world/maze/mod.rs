mod generator;

pub use generator::{GenerationConfig, MazeGenerator};

use std::fmt;

use super::error::OutOfBounds;
use super::model::{Enemy, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Fixed iteration order; generation depends on it for reproducibility.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit vector. North decreases y, east increases x.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    coord: Coord,
    walls: [bool; 4],
    pub item: Option<Item>,
    pub enemy: Option<Enemy>,
}

impl GridCell {
    fn new(coord: Coord) -> Self {
        GridCell {
            coord,
            walls: [true; 4],
            item: None,
            enemy: None,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        !self.has_wall(dir)
    }

    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_open(*d))
            .collect()
    }

    pub fn surrounded_by_walls(&self) -> bool {
        self.walls.iter().all(|w| *w)
    }

    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }

    pub fn has_enemy(&self) -> bool {
        self.enemy.is_some()
    }
}

/// Owns every cell of a level; the only place items on the floor live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<GridCell>,
}

impl Maze {
    /// A fully walled grid. Dimensions are checked by the generator.
    fn walled(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(GridCell::new(Coord::new(x, y)));
            }
        }
        Maze {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn index_of(&self, coord: Coord) -> Result<usize, OutOfBounds> {
        if self.contains(coord) {
            Ok(coord.y * self.width + coord.x)
        } else {
            Err(OutOfBounds {
                x: coord.x,
                y: coord.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get_cell(&self, coord: Coord) -> Result<&GridCell, OutOfBounds> {
        let idx = self.index_of(coord)?;
        Ok(&self.cells[idx])
    }

    /// Mutable access for item/enemy changes. Walls stay private to this
    /// module tree, so play code cannot re-close a passage.
    pub fn get_cell_mut(&mut self, coord: Coord) -> Result<&mut GridCell, OutOfBounds> {
        let idx = self.index_of(coord)?;
        Ok(&mut self.cells[idx])
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// The in-bounds cell one step from `coord`, ignoring walls.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let (dx, dy) = dir.delta();
        let x = coord.x as i64 + dx;
        let y = coord.y as i64 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        let next = Coord::new(x as usize, y as usize);
        self.contains(next).then_some(next)
    }

    /// Cells reachable from `coord` in one step through an open wall.
    pub fn passable_neighbors(&self, coord: Coord) -> Vec<(Direction, Coord)> {
        let Ok(cell) = self.get_cell(coord) else {
            return Vec::new();
        };
        Direction::ALL
            .into_iter()
            .filter(|d| cell.is_open(*d))
            .filter_map(|d| self.neighbor(coord, d).map(|n| (d, n)))
            .collect()
    }

    /// Opens the wall between `from` and its neighbor in `dir`, on both sides.
    fn remove_wall(&mut self, from: Coord, dir: Direction) -> Result<Coord, OutOfBounds> {
        let to = self.neighbor(from, dir).ok_or_else(|| {
            let (dx, dy) = dir.delta();
            OutOfBounds {
                x: (from.x as i64 + dx).max(0) as usize,
                y: (from.y as i64 + dy).max(0) as usize,
                width: self.width,
                height: self.height,
            }
        })?;
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        self.cells[a].walls[dir.index()] = false;
        self.cells[b].walls[dir.opposite().index()] = false;
        Ok(to)
    }

    /// Number of open passages between adjacent cells.
    pub fn open_edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|d| c.is_open(*d) && self.neighbor(c.coord, *d).is_some())
                    .count()
            })
            .sum()
    }

    /// Breadth-first count of cells reachable from `start`.
    pub fn reachable_from(&self, start: Coord) -> usize {
        use std::collections::VecDeque;

        if !self.contains(start) {
            return 0;
        }
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        seen[start.y * self.width + start.x] = true;
        queue.push_back(start);
        let mut count = 0;
        while let Some(at) = queue.pop_front() {
            count += 1;
            for (_, next) in self.passable_neighbors(at) {
                let idx = next.y * self.width + next.x;
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }
}
