use std::collections::HashSet;

use super::model::{Catalog, Item};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Every item, including chest contents, in catalog order
    let mut all_items: Vec<&Item> = Vec::new();
    for item in &catalog.usable_items {
        collect_items(item, &mut all_items);
    }
    for key in &catalog.key_items {
        collect_items(&key.item, &mut all_items);
    }

    // Labels must be unique so commands resolve to one item
    let mut seen: HashSet<&str> = HashSet::new();
    for item in &all_items {
        if !seen.insert(item.label.as_str()) {
            errors.push(ValidationError::new(format!(
                "item label '{}' is used more than once",
                item.label
            )));
        }
    }

    // Requirements must name a real item
    for item in &all_items {
        if let Some(req) = &item.requirement {
            if req == &item.label {
                errors.push(ValidationError::new(format!(
                    "item '{}' requires itself",
                    item.label
                )));
            } else if !seen.contains(req.as_str()) {
                errors.push(ValidationError::new(format!(
                    "item '{}' requires missing item '{}'",
                    item.label, req
                )));
            }
        }
    }

    let mut enemy_names: HashSet<&str> = HashSet::new();
    for enemy in &catalog.enemies {
        if enemy.name.is_empty() {
            errors.push(ValidationError::new("enemy with an empty name"));
        }
        if !enemy_names.insert(enemy.name.as_str()) {
            errors.push(ValidationError::new(format!(
                "enemy '{}' is defined more than once",
                enemy.name
            )));
        }
        if enemy.health <= 0 {
            errors.push(ValidationError::new(format!(
                "enemy '{}' must have positive health",
                enemy.name
            )));
        }
    }

    if catalog.player.health <= 0 {
        errors.push(ValidationError::new("player must start with positive health"));
    }

    errors
}

fn collect_items<'a>(item: &'a Item, out: &mut Vec<&'a Item>) {
    out.push(item);
    for inner in &item.contains {
        collect_items(inner, out);
    }
}
