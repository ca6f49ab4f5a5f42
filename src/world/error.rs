use std::io;

use thiserror::Error;

use super::validator::ValidationError;

/// Fatal problems with the level configuration. Raised before a maze exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("start cell ({x}, {y}) lies outside the {width}x{height} maze")]
    StartOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("key item '{label}' is placed at ({x}, {y}), outside the {width}x{height} maze")]
    KeyItemOutOfBounds {
        label: String,
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("key items '{first}' and '{second}' both claim cell ({x}, {y})")]
    KeyItemsOverlap {
        first: String,
        second: String,
        x: usize,
        y: usize,
    },
}

/// A cell lookup outside the grid. Valid play never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell ({x}, {y}) is outside the {width}x{height} maze")]
pub struct OutOfBounds {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),

    #[error("catalog failed validation: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
