use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::CatalogError;
use super::model::{
    Catalog, EnemyRecord, GameSettings, Item, ItemAction, KeyItem, PlayerStats,
};
use super::validator::validate_catalog;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct CatalogFile {
    game: GameHeader,
    #[serde(default)]
    player: Option<PlayerConfig>,
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
    #[serde(default)]
    enemy: Vec<EnemyConfig>, // [[enemy]] blocks
}

#[derive(Deserialize)]
struct GameHeader {
    name: String,
    #[serde(default)]
    intro: String,
    width: usize,
    height: usize,
    #[serde(default)]
    start: Option<[usize; 2]>,
    #[serde(default = "default_usable_per_level")]
    usable_items_per_level: usize,
    #[serde(default = "default_health_bonus")]
    level_health_bonus: i32,
    #[serde(default = "default_score_bonus")]
    level_score_bonus: u32,
}

#[derive(Deserialize)]
struct PlayerConfig {
    #[serde(default)]
    attack: Option<i32>,
    #[serde(default)]
    defend: Option<i32>,
    #[serde(default)]
    health: Option<i32>,
}

#[derive(Deserialize)]
struct ItemConfig {
    label: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    actions: Vec<String>,

    /// Label of the item that unlocks this one.
    #[serde(default)]
    requires: Option<String>,

    #[serde(default)]
    bonus: String,

    /// "usable" (random placement) or "key" (fixed `position`).
    #[serde(default)]
    kind: Option<String>,

    #[serde(default)]
    position: Option<[i64; 2]>,

    #[serde(default)]
    attack_bonus: i32,

    #[serde(default)]
    defend_bonus: i32,

    #[serde(default)]
    contains: Vec<ItemConfig>, // [[item.contains]]
}

#[derive(Deserialize)]
struct EnemyConfig {
    name: String,
    #[serde(default)]
    description: String,
    attack: i32,
    #[serde(default)]
    defend: i32,
    health: i32,
    #[serde(default)]
    points: u32,
}

// Helpers for serde defaults
fn default_usable_per_level() -> usize {
    3
}

fn default_health_bonus() -> i32 {
    10
}

fn default_score_bonus() -> u32 {
    10
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a content catalog from a .toml file on disk.
pub fn load_catalog_from_file(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path)?;
    load_catalog_from_str(&contents)
}

/// Parse and validate a content catalog from TOML text.
pub fn load_catalog_from_str(contents: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(contents)?;

    if file.game.name.trim().is_empty() {
        return Err(CatalogError::Invalid("game.name may not be empty".into()));
    }

    let (sx, sy) = file.game.start.map(|[x, y]| (x, y)).unwrap_or((0, 0));
    let settings = GameSettings {
        name: file.game.name.trim().to_string(),
        intro: normalize_multiline_desc(&file.game.intro),
        width: file.game.width,
        height: file.game.height,
        start: (sx, sy),
        usable_items_per_level: file.game.usable_items_per_level,
        level_health_bonus: file.game.level_health_bonus,
        level_score_bonus: file.game.level_score_bonus,
    };

    let defaults = PlayerStats::default();
    let player = match file.player {
        Some(pc) => PlayerStats {
            attack: pc.attack.unwrap_or(defaults.attack),
            defend: pc.defend.unwrap_or(defaults.defend),
            health: pc.health.unwrap_or(defaults.health),
        },
        None => defaults,
    };

    let mut usable_items = Vec::new();
    let mut key_items = Vec::new();

    for ic in file.item {
        let kind = ic
            .kind
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|| "usable".to_string());
        let position = ic.position;
        let label = ic.label.clone();
        let item = build_item(ic)?;

        match kind.as_str() {
            "usable" => usable_items.push(item),
            "key" => {
                let [x, y] = position.ok_or_else(|| {
                    CatalogError::Invalid(format!("key item '{}' has no position", label))
                })?;
                key_items.push(KeyItem { item, x, y });
            }
            other => {
                return Err(CatalogError::Invalid(format!(
                    "item '{}' has unknown kind '{}': expected 'usable' or 'key'",
                    label, other
                )));
            }
        }
    }

    let enemies = file
        .enemy
        .into_iter()
        .map(|ec| EnemyRecord {
            name: ec.name.trim().to_string(),
            description: normalize_multiline_desc(&ec.description),
            attack: ec.attack,
            defend: ec.defend,
            health: ec.health,
            points: ec.points,
        })
        .collect();

    let catalog = Catalog {
        settings,
        player,
        usable_items,
        key_items,
        enemies,
    };

    let errors = validate_catalog(&catalog);
    if !errors.is_empty() {
        return Err(CatalogError::Validation(errors));
    }

    tracing::debug!(
        name = %catalog.settings.name,
        usable = catalog.usable_items.len(),
        key = catalog.key_items.len(),
        enemies = catalog.enemies.len(),
        "catalog loaded"
    );

    Ok(catalog)
}

fn build_item(ic: ItemConfig) -> Result<Item, CatalogError> {
    let label = ic.label.trim().to_lowercase();
    if label.is_empty() {
        return Err(CatalogError::Invalid("item with an empty label".into()));
    }

    let mut actions = Vec::with_capacity(ic.actions.len());
    for raw in &ic.actions {
        let action = ItemAction::parse(raw).ok_or_else(|| {
            CatalogError::Invalid(format!("item '{}' has unknown action '{}'", label, raw))
        })?;
        if !actions.contains(&action) {
            actions.push(action);
        }
    }

    let contains = ic
        .contains
        .into_iter()
        .map(build_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Item {
        label,
        description: normalize_multiline_desc(&ic.description),
        actions,
        requirement: ic
            .requires
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty()),
        bonus: normalize_multiline_desc(&ic.bonus),
        contains,
        open: false,
        attack_bonus: ic.attack_bonus,
        defend_bonus: ic.defend_bonus,
    })
}

/// Wrapped lines join with a space, one blank line keeps a newline, two or
/// more make a paragraph break. Indentation is dropped.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}
