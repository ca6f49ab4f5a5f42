mod error;
mod loader;
pub mod maze;
mod model;
mod player;
mod validator;

pub use error::{CatalogError, ConfigError, OutOfBounds};
pub use loader::{load_catalog_from_file, load_catalog_from_str};
pub use maze::{Coord, Direction, GenerationConfig, GridCell, Maze, MazeGenerator};
pub use model::{
    Catalog, Enemy, EnemyRecord, GameSettings, Item, ItemAction, KeyItem, PlayerStats,
};
pub use player::{DropOutcome, PickUp, Player, Pouch};
pub use validator::{ValidationError, validate_catalog};
