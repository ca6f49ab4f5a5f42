mod common;

use common::{Ambush, door, interpreter, key_item, lantern, maze, rat, sword};
use maze_crawl::engine::{Interpreter, Level, SkirmishBattle, State, TurnOutcome};
use maze_crawl::world::{Coord, Direction, Item, ItemAction, Player, PlayerStats};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn single_cell_rejects_every_direction() {
    let mut game = interpreter(maze(1, 1, 0, Vec::new(), Vec::new()));
    assert!(game.level().current_cell().unwrap().surrounded_by_walls());

    for dir in ["north", "south", "east", "west"] {
        let (out, outcome) = game.process_turn(&format!("go {dir}")).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue);
        assert!(out.mentions("You can't go in that direction"));
        assert_eq!(game.level().player.position, Coord::new(0, 0));
    }
}

#[test]
fn go_with_unknown_direction_is_refused() {
    let mut game = interpreter(maze(3, 3, 1, Vec::new(), Vec::new()));
    let (out, outcome) = game.process_turn("go upstairs").unwrap();
    assert_eq!(outcome, TurnOutcome::Continue);
    assert!(out.mentions("You can't go in that direction: upstairs"));
    assert_eq!(game.level().player.position, Coord::new(0, 0));
}

#[test]
fn movement_follows_open_walls() {
    let mut game = interpreter(maze(4, 4, 11, Vec::new(), Vec::new()));
    let cell = game.level().current_cell().unwrap().clone();

    // Blocked directions first: they must not move the player.
    for dir in Direction::ALL.into_iter().filter(|d| cell.has_wall(*d)) {
        game.process_turn(&format!("go {dir}")).unwrap();
        assert_eq!(game.level().player.position, Coord::new(0, 0));
    }

    let open = cell.open_directions();
    assert!(!open.is_empty(), "the start of a 4x4 maze has an exit");
    let dir = open[0];
    let (out, _) = game.process_turn(&format!("go {dir}")).unwrap();
    let (dx, dy) = dir.delta();
    assert_eq!(
        game.level().player.position,
        Coord::new(dx as usize, dy as usize)
    );
    assert!(out.mentions(&format!("You came from the {}", dir.opposite())));
}

#[test]
fn open_door_completes_the_level() {
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(door(), 0, 0)], Vec::new()));

    let (out, outcome) = game.process_turn("open door").unwrap();
    assert_eq!(outcome, TurnOutcome::LevelComplete);
    assert_eq!(game.state(), State::LevelComplete);
    assert!(game.level().complete);
    assert!(out.mentions("You open the door"));

    // Terminal: further input is ignored.
    let (out, outcome) = game.process_turn("go north").unwrap();
    assert_eq!(outcome, TurnOutcome::LevelComplete);
    assert!(out.is_empty());
}

#[test]
fn locked_chest_stays_shut_without_its_key() {
    let chest = Item::new("chest", "old chest")
        .with_actions(&[ItemAction::Open])
        .with_requirement("key")
        .with_contents(vec![sword()]);
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(chest, 0, 0)], Vec::new()));

    let (out, outcome) = game.process_turn("open chest").unwrap();
    assert_eq!(outcome, TurnOutcome::Continue);
    assert_eq!(game.state(), State::Exploring);
    assert!(out.mentions("The chest is locked"));
    let chest = game.level().current_cell().unwrap().item.as_ref().unwrap();
    assert!(!chest.open);
}

#[test]
fn open_requires_a_matching_item() {
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(door(), 0, 0)], Vec::new()));
    let (out, _) = game.process_turn("open chest").unwrap();
    assert!(out.mentions("There is nothing to open here!"));

    let mut game = interpreter(maze(1, 1, 0, vec![key_item(lantern(), 0, 0)], Vec::new()));
    let (out, outcome) = game.process_turn("open lantern").unwrap();
    assert_eq!(outcome, TurnOutcome::Continue);
    assert!(out.mentions("I can't understand \"open lantern\""));
}

#[test]
fn locked_door_opens_once_key_is_carried() {
    let locked = door().with_requirement("golden key");
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(locked, 0, 0)], Vec::new()));

    let (out, _) = game.process_turn("open door").unwrap();
    assert!(out.mentions("locked"));

    game.level_mut()
        .player
        .pouch
        .insert(Item::new("golden key", "golden key"));
    let (_, outcome) = game.process_turn("open door").unwrap();
    assert_eq!(outcome, TurnOutcome::LevelComplete);
}

#[test]
fn investigate_resolution_order() {
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(lantern(), 0, 0)], Vec::new()));

    let (out, _) = game.process_turn("investigate lantern").unwrap();
    assert!(out.mentions("The lantern lights up the dark corridor!"));

    let (out, _) = game.process_turn("investigate sword").unwrap();
    assert!(out.mentions("There is no sword here, but something else!"));

    let mut game = interpreter(maze(1, 1, 0, vec![key_item(sword(), 0, 0)], Vec::new()));
    let (out, _) = game.process_turn("investigate sword").unwrap();
    assert!(out.mentions("Can't investigate sharp sword further!"));

    let mut game = interpreter(maze(1, 1, 0, Vec::new(), Vec::new()));
    let (out, _) = game.process_turn("investigate sword").unwrap();
    assert!(out.mentions("There is nothing to investigate here!"));
}

#[test]
fn check_prints_the_description() {
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(door(), 0, 0)], Vec::new()));
    let (out, _) = game.process_turn("check door").unwrap();
    assert!(out.mentions("It's a heavy door"));

    let mut game = interpreter(maze(1, 1, 0, vec![key_item(sword(), 0, 0)], Vec::new()));
    let (out, _) = game.process_turn("check sword").unwrap();
    assert!(out.mentions("You can't check that out."));
}

#[test]
fn get_and_drop_move_items_between_cell_and_pouch() {
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(sword(), 0, 0)], Vec::new()));

    let (out, _) = game.process_turn("get sword").unwrap();
    assert!(out.mentions("You put the sword in your pouch."));
    assert!(!game.level().current_cell().unwrap().has_item());
    assert!(game.level().player.is_in_pouch("sword"));

    let (out, _) = game.process_turn("inventory").unwrap();
    assert!(out.mentions("* sword"));

    let (out, _) = game.process_turn("drop sword").unwrap();
    assert!(out.mentions("You drop the sword"));
    assert!(game.level().current_cell().unwrap().has_item());
    assert!(game.level().player.pouch.is_empty());
}

#[test]
fn drop_on_an_occupied_cell_changes_nothing() {
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(door(), 0, 0)], Vec::new()));
    game.level_mut().player.pouch.insert(sword());

    let (out, outcome) = game.process_turn("drop sword").unwrap();
    assert_eq!(outcome, TurnOutcome::Continue);
    assert!(out.mentions("This space isn't empty!"));
    let cell = game.level().current_cell().unwrap();
    assert_eq!(cell.item.as_ref().map(|i| i.label.as_str()), Some("door"));
    assert!(game.level().player.is_in_pouch("sword"));
    assert_eq!(game.level().player.pouch.len(), 1);
}

#[test]
fn chest_submode_only_understands_get_and_close() {
    let potion = Item::new("potion", "red potion").with_actions(&[ItemAction::Get]);
    let chest = Item::new("chest", "old chest")
        .with_actions(&[ItemAction::Open])
        .with_contents(vec![Item::new("golden key", "golden key").with_actions(&[ItemAction::Get]), potion]);
    let mut game = interpreter(maze(2, 2, 5, vec![key_item(chest, 0, 0)], Vec::new()));

    let (out, outcome) = game.process_turn("open chest").unwrap();
    assert_eq!(outcome, TurnOutcome::Continue);
    assert_eq!(
        game.state(),
        State::ChestOpen {
            at: Coord::new(0, 0)
        }
    );
    assert!(out.mentions("The old chest is open and contains the following:"));
    assert!(out.mentions("* red potion"));
    assert!(game.level().current_cell().unwrap().item.as_ref().unwrap().open);

    let exit = game.level().current_cell().unwrap().open_directions()[0];
    for line in [format!("go {exit}"), "quit".to_string(), "open door".to_string(), "close box".to_string()] {
        let (out, outcome) = game.process_turn(&line).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue);
        assert!(out.mentions("I don't understand"));
        assert_eq!(game.level().player.position, Coord::new(0, 0));
        assert!(game.level().player.alive);
        assert!(matches!(game.state(), State::ChestOpen { .. }));
    }

    let (out, _) = game.process_turn("get golden key").unwrap();
    assert!(out.mentions("You take the golden key from the chest."));
    assert!(game.level().player.is_in_pouch("golden key"));

    let (out, _) = game.process_turn("get crown").unwrap();
    assert!(out.mentions("There is no crown in the chest"));

    let (out, _) = game.process_turn("close chest").unwrap();
    assert!(out.mentions("You close the old chest"));
    assert_eq!(game.state(), State::Exploring);
    let chest = game.level().current_cell().unwrap().item.as_ref().unwrap();
    assert!(!chest.open);
    assert_eq!(chest.contains.len(), 1);
}

#[test]
fn bare_close_also_leaves_the_chest() {
    let chest = Item::new("chest", "old chest").with_actions(&[ItemAction::Open]);
    let mut game = interpreter(maze(1, 1, 0, vec![key_item(chest, 0, 0)], Vec::new()));
    game.process_turn("open chest").unwrap();
    game.process_turn("close").unwrap();
    assert_eq!(game.state(), State::Exploring);
}

#[test]
fn close_outside_a_chest_is_not_understood() {
    let mut game = interpreter(maze(1, 1, 0, Vec::new(), Vec::new()));
    let (out, _) = game.process_turn("close chest").unwrap();
    assert!(out.mentions("I don't understand close chest..."));
}

#[test]
fn quit_ends_the_level_as_dead() {
    let mut game = interpreter(maze(2, 2, 0, Vec::new(), Vec::new()));
    let (_, outcome) = game.process_turn("quit").unwrap();
    assert_eq!(outcome, TurnOutcome::PlayerDead);
    assert_eq!(game.state(), State::PlayerDead);
}

#[test]
fn unknown_input_is_reported_without_changes() {
    let mut game = interpreter(maze(2, 2, 0, Vec::new(), Vec::new()));
    let before = game.level().player.clone();
    let (out, outcome) = game.process_turn("dance").unwrap();
    assert_eq!(outcome, TurnOutcome::Continue);
    assert!(out.mentions("I don't understand dance..."));
    assert_eq!(game.level().player, before);
}

#[test]
fn arriving_on_an_enemy_hands_off_to_battle() {
    // 2x1: the only other cell holds the enemy and is always east of start.
    let maze = maze(2, 1, 0, Vec::new(), vec![rat()]);
    let ambush = Ambush::default();
    let headings = ambush.headings.clone();
    let player = Player::new(PlayerStats::default(), Coord::new(0, 0));
    let mut game = Interpreter::new(Level::new(1, maze, player).unwrap(), Box::new(ambush));

    let (out, outcome) = game.process_turn("go east").unwrap();
    assert_eq!(outcome, TurnOutcome::PlayerDead);
    assert_eq!(*headings.borrow(), vec![Direction::East]);
    assert!(out.mentions("Ambushed!"));

    let (_, outcome) = game.process_turn("go west").unwrap();
    assert_eq!(outcome, TurnOutcome::PlayerDead);
    assert_eq!(game.level().player.position, Coord::new(1, 0));
}

#[test]
fn winning_a_battle_clears_the_enemy() {
    let maze = maze(2, 1, 0, Vec::new(), vec![rat()]);
    let player = Player::new(PlayerStats::default(), Coord::new(0, 0));
    let level = Level::new(1, maze, player).unwrap();
    assert_eq!(level.roster_size(), 1);
    let mut game = Interpreter::new(
        level,
        Box::new(SkirmishBattle::new(ChaCha8Rng::seed_from_u64(9))),
    );

    let (_, outcome) = game.process_turn("go east").unwrap();
    assert_eq!(outcome, TurnOutcome::Continue);
    assert_eq!(game.level().enemies_remaining(), 0);
    assert_eq!(game.level().player.score, 1);
}

#[test]
fn render_depends_on_the_lantern() {
    let mut game = interpreter(maze(2, 2, 3, vec![key_item(lantern(), 0, 0)], Vec::new()));
    let dark = game.render_text().unwrap();
    assert!(dark.contains("The area is very dark!"));
    assert!(dark.contains("There is something in this room"));

    game.process_turn("get lantern").unwrap();
    let lit = game.render_text().unwrap();
    assert!(lit.contains("It lights up your surroundings."));
    assert!(lit.contains("You can go: "));
    assert!(!lit.contains("dark"));
}
