use super::maze::{Coord, Direction, GridCell};
use super::model::{Item, ItemAction, PlayerStats};

/// What happened to a `get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickUp {
    Taken { label: String },
    NotAllowed { label: String },
    NotHere,
}

/// What happened to a `drop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped { label: String },
    CellOccupied,
    NotDroppable { label: String },
    NotCarried,
}

/// Items carried by the player, held by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pouch {
    items: Vec<Item>,
}

impl Pouch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|i| i.is_labeled(label))
    }

    pub fn get(&self, label: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.is_labeled(label))
    }

    pub fn insert(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn take(&mut self, label: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.is_labeled(label))?;
        Some(self.items.remove(idx))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub position: Coord,
    pub alive: bool,
    pub attack: i32,
    pub defend: i32,
    pub health: i32,
    pub score: u32,
    pub pouch: Pouch,
}

impl Player {
    pub fn new(stats: PlayerStats, position: Coord) -> Self {
        Player {
            position,
            alive: true,
            attack: stats.attack,
            defend: stats.defend,
            health: stats.health,
            score: 0,
            pouch: Pouch::new(),
        }
    }

    /// Step one cell. Callers check walls first; a step off the grid's
    /// low edge leaves the position unchanged.
    pub fn move_to(&mut self, dir: Direction) {
        let (dx, dy) = dir.delta();
        let x = self.position.x as i64 + dx;
        let y = self.position.y as i64 + dy;
        if x >= 0 && y >= 0 {
            self.position = Coord::new(x as usize, y as usize);
        }
    }

    pub fn is_in_pouch(&self, label: &str) -> bool {
        self.pouch.contains(label)
    }

    /// Whether the player holds whatever `requirement` names. No requirement
    /// is always satisfied.
    pub fn meets_requirement(&self, requirement: Option<&str>) -> bool {
        requirement.is_none_or(|label| self.is_in_pouch(label))
    }

    /// Pick `label` up from the cell floor, or from the open chest lying in
    /// the cell when `from_chest` is set.
    pub fn pick_up_item(&mut self, label: &str, cell: &mut GridCell, from_chest: bool) -> PickUp {
        if from_chest {
            let Some(chest) = cell.item.as_mut() else {
                return PickUp::NotHere;
            };
            let Some(idx) = chest.contains.iter().position(|i| i.is_labeled(label)) else {
                return PickUp::NotHere;
            };
            if !chest.contains[idx].allows(ItemAction::Get) {
                return PickUp::NotAllowed {
                    label: chest.contains[idx].label.clone(),
                };
            }
            let item = chest.contains.remove(idx);
            let label = item.label.clone();
            self.pouch.insert(item);
            return PickUp::Taken { label };
        }

        match cell.item.as_ref() {
            Some(item) if item.is_labeled(label) => {
                if !item.allows(ItemAction::Get) {
                    return PickUp::NotAllowed {
                        label: item.label.clone(),
                    };
                }
            }
            _ => return PickUp::NotHere,
        }

        match cell.item.take() {
            Some(item) => {
                let label = item.label.clone();
                self.pouch.insert(item);
                PickUp::Taken { label }
            }
            None => PickUp::NotHere,
        }
    }

    /// Move `label` from the pouch onto the cell floor. An occupied cell
    /// refuses the drop before the pouch is even searched.
    pub fn drop_item(&mut self, label: &str, cell: &mut GridCell) -> DropOutcome {
        if cell.has_item() {
            return DropOutcome::CellOccupied;
        }
        let Some(item) = self.pouch.get(label) else {
            return DropOutcome::NotCarried;
        };
        if !item.allows(ItemAction::Drop) {
            return DropOutcome::NotDroppable {
                label: item.label.clone(),
            };
        }
        match self.pouch.take(label) {
            Some(item) => {
                let label = item.label.clone();
                cell.item = Some(item);
                DropOutcome::Dropped { label }
            }
            None => DropOutcome::NotCarried,
        }
    }

    pub fn effective_attack(&self) -> i32 {
        self.attack + self.pouch.items().iter().map(|i| i.attack_bonus).sum::<i32>()
    }

    pub fn effective_defend(&self) -> i32 {
        self.defend + self.pouch.items().iter().map(|i| i.defend_bonus).sum::<i32>()
    }
}
