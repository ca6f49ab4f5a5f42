//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Verbs an item may be the target of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemAction {
    Get,
    Drop,
    Check,
    Investigate,
    Open,
}

impl ItemAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "get" => Some(ItemAction::Get),
            "drop" => Some(ItemAction::Drop),
            "check" => Some(ItemAction::Check),
            "investigate" => Some(ItemAction::Investigate),
            "open" => Some(ItemAction::Open),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemAction::Get => "get",
            ItemAction::Drop => "drop",
            ItemAction::Check => "check",
            ItemAction::Investigate => "investigate",
            ItemAction::Open => "open",
        }
    }
}

/// A single item instance. Lives in exactly one place at a time: a cell,
/// a chest's contents, or the player's pouch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub label: String,
    pub description: String,
    pub actions: Vec<ItemAction>,
    /// Label of the item needed in the pouch to open this one.
    pub requirement: Option<String>,
    /// Flavor text revealed by `investigate`.
    pub bonus: String,
    pub contains: Vec<Item>,
    pub open: bool,
    pub attack_bonus: i32,
    pub defend_bonus: i32,
}

impl Item {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Item {
            label: label.into(),
            description: description.into(),
            actions: Vec::new(),
            requirement: None,
            bonus: String::new(),
            contains: Vec::new(),
            open: false,
            attack_bonus: 0,
            defend_bonus: 0,
        }
    }

    pub fn with_actions(mut self, actions: &[ItemAction]) -> Self {
        self.actions = actions.to_vec();
        self
    }

    pub fn with_requirement(mut self, label: impl Into<String>) -> Self {
        self.requirement = Some(label.into());
        self
    }

    pub fn with_bonus(mut self, bonus: impl Into<String>) -> Self {
        self.bonus = bonus.into();
        self
    }

    pub fn with_contents(mut self, contains: Vec<Item>) -> Self {
        self.contains = contains;
        self
    }

    pub fn allows(&self, action: ItemAction) -> bool {
        self.actions.contains(&action)
    }

    pub fn is_labeled(&self, label: &str) -> bool {
        self.label.eq_ignore_ascii_case(label.trim())
    }
}

/// An item with a catalog-fixed placement. Coordinates stay signed so that a
/// negative position reaches the generator and is rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyItem {
    pub item: Item,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyRecord {
    pub name: String,
    pub description: String,
    pub attack: i32,
    pub defend: i32,
    pub health: i32,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub description: String,
    pub attack: i32,
    pub defend: i32,
    pub health: i32,
    pub points: u32,
}

impl Enemy {
    /// Instantiate a catalog record for the given level (1-based).
    pub fn spawn(record: &EnemyRecord, level: u32) -> Self {
        let extra = level.saturating_sub(1) as i32;
        Enemy {
            name: record.name.clone(),
            description: record.description.clone(),
            attack: record.attack + extra,
            defend: record.defend,
            health: record.health + extra * 2,
            points: record.points,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub attack: i32,
    pub defend: i32,
    pub health: i32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        PlayerStats {
            attack: 2,
            defend: 1,
            health: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub name: String,
    pub intro: String,
    pub width: usize,
    pub height: usize,
    pub start: (usize, usize),
    pub usable_items_per_level: usize,
    pub level_health_bonus: i32,
    pub level_score_bonus: u32,
}

/// Read-only content handed to level construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub settings: GameSettings,
    pub player: PlayerStats,
    pub usable_items: Vec<Item>,
    pub key_items: Vec<KeyItem>,
    pub enemies: Vec<EnemyRecord>,
}
