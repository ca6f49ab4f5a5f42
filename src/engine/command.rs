use crate::world::Direction;

/// One parsed line of player input. Every line maps to exactly one variant;
/// anything unmatched is `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    /// `go` followed by something that is not a compass direction.
    GoNowhere(String),
    Get(String),
    Drop(String),
    Check(String),
    Investigate(String),
    Open(String),
    Close(Option<String>),
    Inventory,
    Look,
    Help,
    Quit,
    Unrecognized(String),
}

/// Lower-case, split on whitespace, then match on the token shape. Labels
/// may span several words (`get golden key`).
pub fn parse_command(input: &str) -> Command {
    let lower = input.trim().to_lowercase();
    let tokens: Vec<&str> = lower.split_whitespace().collect();

    match tokens.as_slice() {
        ["go", dir] => match Direction::parse(dir) {
            Some(d) => Command::Go(d),
            None => Command::GoNowhere(dir.to_string()),
        },
        ["go", rest @ ..] => Command::GoNowhere(rest.join(" ")),
        ["get", rest @ ..] if !rest.is_empty() => Command::Get(rest.join(" ")),
        ["drop", rest @ ..] if !rest.is_empty() => Command::Drop(rest.join(" ")),
        ["check", rest @ ..] if !rest.is_empty() => Command::Check(rest.join(" ")),
        ["investigate", rest @ ..] if !rest.is_empty() => Command::Investigate(rest.join(" ")),
        ["open", rest @ ..] if !rest.is_empty() => Command::Open(rest.join(" ")),
        ["close"] => Command::Close(None),
        ["close", rest @ ..] => Command::Close(Some(rest.join(" "))),
        ["inventory"] | ["i"] => Command::Inventory,
        ["look"] | ["l"] => Command::Look,
        ["help"] => Command::Help,
        ["quit"] => Command::Quit,
        _ => Command::Unrecognized(input.trim().to_string()),
    }
}
