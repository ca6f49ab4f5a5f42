use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(String),
    Exits(String),
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // only one Exits block, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    pub fn append(&mut self, other: Output) {
        for block in other.blocks {
            match block {
                OutputBlock::Exits(s) => self.set_exits(s),
                b => self.blocks.push(b),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Plain text, one block per line.
    pub fn to_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Title(s)
                | OutputBlock::Text(s)
                | OutputBlock::Event(s)
                | OutputBlock::Exits(s) => s.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn mentions(&self, needle: &str) -> bool {
        self.to_text().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_blocks_are_dropped() {
        let mut out = Output::new();
        out.say("   ");
        out.title("");
        out.event("\n");
        assert!(out.is_empty());
    }

    #[test]
    fn exits_stay_last_and_unique() {
        let mut out = Output::new();
        out.set_exits("You can go: north");
        out.say("A draft.");
        out.set_exits("You can go: south");
        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Text("A draft.".into()),
                OutputBlock::Exits("You can go: south".into()),
            ]
        );
        assert_eq!(out.to_text(), "A draft.\nYou can go: south");
    }
}
