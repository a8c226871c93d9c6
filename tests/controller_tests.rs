use std::time::Duration;

use battleship_core::{
    GameConfig, GameController, GameMode, Phase, PlayerId, ShipClass, ShipQuantity,
};

/// 1x5 board with a single carrier: every game script on it is fully
/// deterministic because each board has exactly one possible placement.
fn carrier_lane() -> GameConfig {
    GameConfig::new(1, 5, vec![ShipQuantity::new(ShipClass::Carrier, 5, 1)])
}

fn patrol_lane() -> GameConfig {
    GameConfig::new(1, 2, vec![ShipQuantity::new(ShipClass::PatrolShip, 2, 1)])
}

fn start_pvp(config: &GameConfig) -> GameController {
    let mut game = GameController::with_seed(config.clone(), 99);
    game.game_mode_selected(GameMode::PlayerVsPlayer).unwrap();
    game
}

/// Confirm the hand-off: leave the switch screen, pass the black screen.
fn cycle_turn(game: &mut GameController) {
    game.switch_current_player();
    game.exit_black_screen_phase();
}

fn drain_prompts(game: &mut GameController) -> Vec<String> {
    std::iter::from_fn(|| game.fetch_prompt()).collect()
}

#[test]
fn test_new_controller_waits_on_the_start_screen() {
    let mut game = GameController::with_seed(GameConfig::standard(), 1);
    assert_eq!(game.phase(), Phase::StartScreen);
    assert_eq!(game.game_mode(), None);
    assert_eq!(game.winner(), None);
    assert_eq!(game.winner_name(), None);
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.game_play_time(), Duration::ZERO);
    assert_eq!(game.current_player_id(), PlayerId::One);
    assert_eq!(game.attacked_player_id(), PlayerId::Two);
    assert!(game.is_running());
    assert_eq!(game.fetch_prompt(), None);
}

#[test]
fn test_commands_before_mode_selection_are_ignored() {
    let mut game = GameController::with_seed(carrier_lane(), 1);
    game.players_cells_selected(0, 0, 0, 4);
    game.enemys_board_mouse_pressed(0, 0);
    game.switch_current_player();
    game.exit_black_screen_phase();

    assert_eq!(game.phase(), Phase::StartScreen);
    assert_eq!(game.current_player_id(), PlayerId::One);
    assert!(game.player1().fleet().is_empty());
    assert_eq!(game.player1().ships_to_place().len(), 1);
    assert_eq!(drain_prompts(&mut game), Vec::<String>::new());
}

#[test]
fn test_mode_selection_only_answers_the_start_screen() {
    let mut game = start_pvp(&carrier_lane());
    game.game_mode_selected(GameMode::PlayerVsComputer).unwrap();
    assert_eq!(game.game_mode(), Some(GameMode::PlayerVsPlayer));
    assert!(game.bot().is_none());
    assert_eq!(game.phase(), Phase::Positioning);
}

#[test]
fn test_pvp_positioning_hands_over_after_the_first_fleet() {
    let mut game = start_pvp(&carrier_lane());
    game.players_cells_selected(0, 0, 0, 4);

    assert!(game.player1().has_placed_fleet());
    assert_eq!(game.phase(), Phase::ReadyToSwitch);
    assert_eq!(drain_prompts(&mut game), vec!["All ships positioned"]);

    game.switch_current_player();
    assert_eq!(game.phase(), Phase::Blackscreen);
    assert_eq!(game.current_player_id(), PlayerId::Two);
    game.exit_black_screen_phase();
    assert_eq!(game.phase(), Phase::Positioning);
}

#[test]
fn test_placement_failures_prompt_without_a_phase_change() {
    let mut game = start_pvp(&carrier_lane());
    // no ship of that length in the pool
    game.players_cells_selected(0, 0, 0, 3);
    // right length, but the span runs off the board
    game.players_cells_selected(0, 2, 0, 6);

    assert_eq!(game.phase(), Phase::Positioning);
    assert!(game.player1().fleet().is_empty());
    assert_eq!(game.player1().ships_to_place().len(), 1);
    assert_eq!(
        drain_prompts(&mut game),
        vec![
            "No ship of length 4 left to place",
            "Ship cannot be placed there"
        ]
    );
}

#[test]
fn test_pvp_full_game_runs_the_phase_script() {
    let mut game = start_pvp(&carrier_lane());
    game.players_cells_selected(0, 0, 0, 4);
    assert_eq!(game.phase(), Phase::ReadyToSwitch);
    cycle_turn(&mut game);
    assert_eq!(game.current_player_id(), PlayerId::Two);
    assert_eq!(game.phase(), Phase::Positioning);

    // the second fleet completes positioning; no hand-off, player two
    // keeps the device and fires first
    game.players_cells_selected(0, 0, 0, 4);
    assert_eq!(game.phase(), Phase::Game);
    assert_eq!(game.current_player_id(), PlayerId::Two);

    for shot in 0..5 {
        game.enemys_board_mouse_pressed(0, shot);
        if game.phase() == Phase::GameResult {
            break;
        }
        assert_eq!(game.phase(), Phase::ReadyToSwitch);
        cycle_turn(&mut game);
        assert_eq!(game.current_player_id(), PlayerId::One);
        game.enemys_board_mouse_pressed(0, shot);
        assert_eq!(game.phase(), Phase::ReadyToSwitch);
        cycle_turn(&mut game);
        assert_eq!(game.current_player_id(), PlayerId::Two);
    }

    assert_eq!(game.phase(), Phase::GameResult);
    assert_eq!(game.winner(), Some(PlayerId::Two));
    assert_eq!(game.winner_name(), Some("Player 2"));
    assert_eq!(game.rounds_played(), 9);
    assert_eq!(game.fleet_state_percent(PlayerId::One), 0);
    assert_eq!(game.fleet_state_percent(PlayerId::Two), 20);

    // the winning shot ends the game without a hit prompt
    let prompts = drain_prompts(&mut game);
    assert_eq!(prompts.len(), 9);
    assert_eq!(prompts[0], "All ships positioned");
    assert!(prompts[1..].iter().all(|prompt| prompt == "You hit!"));

    // the result screen ignores further clicks
    game.enemys_board_mouse_pressed(0, 0);
    assert_eq!(game.rounds_played(), 9);
    assert_eq!(game.phase(), Phase::GameResult);
}

#[test]
fn test_repeated_shot_keeps_the_turn() {
    let mut game = start_pvp(&carrier_lane());
    game.players_cells_selected(0, 0, 0, 4);
    cycle_turn(&mut game);
    game.players_cells_selected(0, 0, 0, 4);

    game.enemys_board_mouse_pressed(0, 0);
    cycle_turn(&mut game);
    game.enemys_board_mouse_pressed(0, 0);
    cycle_turn(&mut game);
    assert_eq!(game.current_player_id(), PlayerId::Two);
    assert_eq!(game.rounds_played(), 2);
    drain_prompts(&mut game);

    // player two already tried (0, 0); the shot is rejected and the
    // turn does not pass
    game.enemys_board_mouse_pressed(0, 0);
    assert_eq!(game.phase(), Phase::Game);
    assert_eq!(game.current_player_id(), PlayerId::Two);
    assert_eq!(game.rounds_played(), 2);
    assert_eq!(
        drain_prompts(&mut game),
        vec!["Already shot here, try elsewhere"]
    );

    game.enemys_board_mouse_pressed(0, 1);
    assert_eq!(game.rounds_played(), 3);
    assert_eq!(game.phase(), Phase::ReadyToSwitch);
}

#[test]
fn test_out_of_board_click_prompts_and_keeps_the_phase() {
    let mut game = start_pvp(&carrier_lane());
    game.players_cells_selected(0, 0, 0, 4);
    cycle_turn(&mut game);
    game.players_cells_selected(0, 0, 0, 4);
    drain_prompts(&mut game);

    game.enemys_board_mouse_pressed(7, 0);
    assert_eq!(game.phase(), Phase::Game);
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(
        drain_prompts(&mut game),
        vec!["coordinate (7, 0) is outside the board"]
    );
}

#[test]
fn test_pvc_round_trip_with_counter_attacks() {
    let mut game = GameController::with_seed(carrier_lane(), 42);
    game.game_mode_selected(GameMode::PlayerVsComputer).unwrap();

    // the bot fleet is placed during mode selection
    let bot = game.bot().unwrap();
    assert!(bot.player().has_placed_fleet());
    assert_eq!(game.phase(), Phase::Positioning);

    // the human fleet completes positioning straight into the game
    game.players_cells_selected(0, 0, 0, 4);
    assert_eq!(game.phase(), Phase::Game);
    assert_eq!(game.current_player_id(), PlayerId::One);

    // every cell on both boards is a carrier segment, so four shots hit
    // and draw a counter-attack each, and the fifth ends the game
    for shot in 0..4 {
        game.enemys_board_mouse_pressed(0, shot);
        assert_eq!(game.phase(), Phase::Game);
        assert_eq!(game.current_player_id(), PlayerId::One);
    }
    game.enemys_board_mouse_pressed(0, 4);

    assert_eq!(game.phase(), Phase::GameResult);
    assert_eq!(game.winner(), Some(PlayerId::One));
    assert_eq!(game.rounds_played(), 9);
    assert_eq!(game.fleet_state_percent(PlayerId::One), 20);
    assert_eq!(game.fleet_state_percent(PlayerId::Two), 0);

    let prompts = drain_prompts(&mut game);
    let expected: Vec<&str> = std::iter::repeat(["You hit!", "Enemy hit your ship!"])
        .take(4)
        .flatten()
        .collect();
    assert_eq!(prompts, expected);
}

#[test]
fn test_fleet_state_percent_tracks_damage() {
    let mut game = start_pvp(&patrol_lane());
    game.players_cells_selected(0, 0, 0, 1);
    cycle_turn(&mut game);
    game.players_cells_selected(0, 0, 0, 1);
    assert_eq!(game.fleet_state_percent(PlayerId::One), 100);
    assert_eq!(game.fleet_state_percent(PlayerId::Two), 100);

    game.enemys_board_mouse_pressed(0, 0);
    assert_eq!(game.fleet_state_percent(PlayerId::One), 50);

    cycle_turn(&mut game);
    game.enemys_board_mouse_pressed(0, 0);
    assert_eq!(game.fleet_state_percent(PlayerId::Two), 50);

    cycle_turn(&mut game);
    game.enemys_board_mouse_pressed(0, 1);
    assert_eq!(game.phase(), Phase::GameResult);
    assert_eq!(game.fleet_state_percent(PlayerId::One), 0);
    assert_eq!(game.winner(), Some(PlayerId::Two));
}

#[test]
fn test_fleet_state_percent_of_an_empty_fleet_table() {
    let game = GameController::with_seed(GameConfig::new(3, 3, Vec::new()), 1);
    assert_eq!(game.fleet_state_percent(PlayerId::One), 0);
    assert_eq!(game.fleet_state_percent(PlayerId::Two), 0);
}

#[test]
fn test_game_play_time_freezes_at_the_result() {
    let mut game = start_pvp(&patrol_lane());
    game.players_cells_selected(0, 0, 0, 1);
    cycle_turn(&mut game);
    game.players_cells_selected(0, 0, 0, 1);
    game.enemys_board_mouse_pressed(0, 0);
    cycle_turn(&mut game);
    game.enemys_board_mouse_pressed(0, 0);
    cycle_turn(&mut game);
    game.enemys_board_mouse_pressed(0, 1);
    assert_eq!(game.phase(), Phase::GameResult);

    let first = game.game_play_time();
    let second = game.game_play_time();
    assert_eq!(first, second);
}

#[test]
fn test_switch_is_only_answered_while_waiting() {
    let mut game = start_pvp(&carrier_lane());
    game.switch_current_player();
    assert_eq!(game.current_player_id(), PlayerId::One);
    game.exit_black_screen_phase();
    assert_eq!(game.phase(), Phase::Positioning);
}

#[test]
fn test_exit_game_stops_the_loop() {
    let mut game = GameController::with_seed(GameConfig::standard(), 1);
    assert!(game.is_running());
    game.exit_game();
    assert!(!game.is_running());
}
