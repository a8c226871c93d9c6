//! Turn and phase orchestration for one game.
//!
//! The controller owns both players, dispatches UI gestures to them, and
//! reports back through read-only getters and a prompt queue. Every
//! mutating entry point is gated on the current phase and is a silent
//! no-op when called out of turn, so a renderer can forward raw input
//! without pre-validating it.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::bot::BotPlayer;
use crate::common::{AttackOutcome, GameError};
use crate::config::GameConfig;
use crate::player::Player;
use crate::ship::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stage of the overall game.
///
/// `Blackscreen` is the hand-the-device-over confirmation shown between
/// PvP turns; it always returns to the remembered phase (positioning
/// until both fleets are placed, active play after).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    StartScreen,
    Positioning,
    Game,
    ReadyToSwitch,
    Blackscreen,
    GameResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

/// Index of one of the two player slots. `current` and `attacked` are
/// always `id` and `id.opponent()`, so they can never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }

    fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A seat at the table: a human (drives placement and shots through the
/// controller) or the bot (places and shoots by itself).
#[derive(Debug, Clone)]
enum Combatant {
    Human(Player),
    Bot(BotPlayer),
}

impl Combatant {
    fn player(&self) -> &Player {
        match self {
            Combatant::Human(player) => player,
            Combatant::Bot(bot) => bot.player(),
        }
    }

    fn player_mut(&mut self) -> &mut Player {
        match self {
            Combatant::Human(player) => player,
            Combatant::Bot(bot) => bot.player_mut(),
        }
    }
}

/// Orchestrates one game from mode selection to the result screen.
pub struct GameController {
    config: GameConfig,
    mode: Option<GameMode>,
    players: [Combatant; 2],
    current: PlayerId,
    phase: Phase,
    phase_to_return: Phase,
    prompts: VecDeque<String>,
    rounds: u32,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    winner: Option<PlayerId>,
    running: bool,
    rng: SmallRng,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(config, SmallRng::from_rng(&mut seed_rng))
    }

    /// Controller with a fixed RNG seed, for reproducible games.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: SmallRng) -> Self {
        let players = [
            Combatant::Human(Player::new(&config)),
            Combatant::Human(Player::new(&config)),
        ];
        Self {
            config,
            mode: None,
            players,
            current: PlayerId::One,
            phase: Phase::StartScreen,
            phase_to_return: Phase::Positioning,
            prompts: VecDeque::new(),
            rounds: 0,
            started_at: None,
            finished_at: None,
            winner: None,
            running: true,
            rng,
        }
    }

    // ------------------------------------------------------------------
    // command surface

    /// Start a game in `mode`: allocate fresh players, auto-place the
    /// bot's fleet in PvC, and enter the positioning phase. Only valid on
    /// the start screen. Fails only when the bot cannot fit its fleet on
    /// the configured board.
    pub fn game_mode_selected(&mut self, mode: GameMode) -> Result<(), GameError> {
        if self.phase != Phase::StartScreen {
            return Ok(());
        }
        let second = match mode {
            GameMode::PlayerVsPlayer => Combatant::Human(Player::new(&self.config)),
            GameMode::PlayerVsComputer => {
                let mut bot = BotPlayer::new(&self.config);
                bot.place_fleet(&mut self.rng)?;
                Combatant::Bot(bot)
            }
        };
        self.players = [Combatant::Human(Player::new(&self.config)), second];
        self.mode = Some(mode);
        self.current = PlayerId::One;
        self.phase = Phase::Positioning;
        self.phase_to_return = Phase::Positioning;
        self.started_at = Some(Instant::now());
        debug!("game started in {:?} mode", mode);
        Ok(())
    }

    /// Place a ship for the current player from a drag gesture spanning
    /// `(start_row, start_col)` to `(end_row, end_col)`. A same-row drag
    /// is horizontal, anything else vertical; the span length is the
    /// coordinate delta plus one. Placement failures become prompts,
    /// never errors.
    pub fn players_cells_selected(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    ) {
        if self.phase != Phase::Positioning {
            return;
        }
        let orientation = if start_row == end_row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let delta =
            (end_row as isize - start_row as isize) + (end_col as isize - start_col as isize);
        let length = delta.unsigned_abs() + 1;
        let x = start_col.min(end_col);
        let y = start_row.min(end_row);
        match self.player_mut(self.current).add_ship(length, orientation, x, y) {
            Ok(()) => self.position_ships_phase(),
            Err(GameError::NotSuchShipToPlace { length }) => {
                self.push_prompt(format!("No ship of length {length} left to place"));
            }
            Err(_) => {
                self.push_prompt("Ship cannot be placed there".to_string());
            }
        }
    }

    /// Shoot at `(row, col)` on the attacked player's board. A rejected
    /// shot (already tried, or off the board) becomes a prompt and does
    /// not consume the turn.
    pub fn enemys_board_mouse_pressed(&mut self, row: usize, col: usize) {
        if self.phase != Phase::Game {
            return;
        }
        if row >= self.config.height || col >= self.config.width {
            let err = GameError::OutOfBoard { row, col };
            self.push_prompt(err.to_string());
            return;
        }
        self.play_game_phase(row, col);
    }

    /// Hand the turn to the other player. Only answered while the
    /// controller is waiting for a switch.
    pub fn switch_current_player(&mut self) {
        if self.phase != Phase::ReadyToSwitch {
            return;
        }
        self.current = self.current.opponent();
        self.phase = Phase::Blackscreen;
        debug!("turn passes to {:?}", self.current);
    }

    /// Leave the hand-off screen, back to positioning or active play.
    pub fn exit_black_screen_phase(&mut self) {
        if self.phase != Phase::Blackscreen {
            return;
        }
        self.phase = self.phase_to_return;
    }

    /// Stop the game loop; the embedding shell polls [`Self::is_running`].
    pub fn exit_game(&mut self) {
        self.running = false;
    }

    // ------------------------------------------------------------------
    // query surface

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    pub fn attacked_player_id(&self) -> PlayerId {
        self.current.opponent()
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        self.players[id.index()].player()
    }

    pub fn player1(&self) -> &Player {
        self.player(PlayerId::One)
    }

    pub fn player2(&self) -> &Player {
        self.player(PlayerId::Two)
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn attacked_player(&self) -> &Player {
        self.player(self.current.opponent())
    }

    /// The computer opponent, when playing PvC.
    pub fn bot(&self) -> Option<&BotPlayer> {
        match &self.players[PlayerId::Two.index()] {
            Combatant::Bot(bot) => Some(bot),
            Combatant::Human(_) => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn winner_name(&self) -> Option<&'static str> {
        self.winner.map(|id| id.name())
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed play time: a running delta mid-game, frozen once the game
    /// ends, zero before a mode is selected.
    pub fn game_play_time(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Percentage of a player's configured fleet segments still afloat,
    /// rounded down. Zero for an empty configuration.
    pub fn fleet_state_percent(&self, id: PlayerId) -> u32 {
        let total = self.config.total_segments();
        if total == 0 {
            return 0;
        }
        (self.player(id).alive_segments() * 100 / total) as u32
    }

    /// Pop one queued user-facing message.
    pub fn fetch_prompt(&mut self) -> Option<String> {
        self.prompts.pop_front()
    }

    // ------------------------------------------------------------------
    // internals

    /// Phase bookkeeping after a successful placement.
    fn position_ships_phase(&mut self) {
        let both_done = self
            .players
            .iter()
            .all(|combatant| combatant.player().has_placed_fleet());
        if both_done {
            self.phase = Phase::Game;
            self.phase_to_return = Phase::Game;
            info!("all fleets positioned, {:?} moves first", self.current);
            return;
        }
        let current_done = self.player(self.current).has_placed_fleet();
        if current_done && self.mode == Some(GameMode::PlayerVsPlayer) {
            self.push_prompt("All ships positioned".to_string());
            self.phase = Phase::ReadyToSwitch;
        }
    }

    fn play_game_phase(&mut self, row: usize, col: usize) {
        let attacked = self.current.opponent();
        let outcome = {
            let (attacker, defender) = self.pair_mut(self.current);
            attacker.perform_attack(defender, col, row)
        };
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(GameError::AlreadyShot) => {
                self.push_prompt("Already shot here, try elsewhere".to_string());
                return;
            }
            Err(err) => {
                self.push_prompt(err.to_string());
                return;
            }
        };
        self.rounds += 1;
        if self.player(attacked).is_defeated() {
            self.finish_game(self.current);
            return;
        }
        self.push_prompt(attack_prompt(outcome).to_string());
        match self.mode {
            Some(GameMode::PlayerVsPlayer) => {
                self.phase = Phase::ReadyToSwitch;
            }
            Some(GameMode::PlayerVsComputer) => self.bot_counter_attack(),
            None => {}
        }
    }

    /// The bot's reply fired inside the same call that resolved the
    /// human's shot. In PvC the bot always attacks player one, so a loss
    /// here makes player two the winner.
    fn bot_counter_attack(&mut self) {
        let outcome = {
            let [first, second] = &mut self.players;
            let Combatant::Bot(bot) = second else {
                return;
            };
            bot.perform_attack(&mut self.rng, first.player_mut())
        };
        match outcome {
            Ok(Some(outcome)) => {
                self.rounds += 1;
                if self.player(PlayerId::One).is_defeated() {
                    self.finish_game(PlayerId::Two);
                    return;
                }
                self.push_prompt(counter_attack_prompt(outcome).to_string());
            }
            Ok(None) => {}
            Err(err) => self.push_prompt(err.to_string()),
        }
    }

    fn finish_game(&mut self, winner: PlayerId) {
        self.winner = Some(winner);
        self.phase = Phase::GameResult;
        self.finished_at = Some(Instant::now());
        info!("{} wins after {} rounds", winner.name(), self.rounds);
    }

    fn pair_mut(&mut self, attacker: PlayerId) -> (&mut Player, &mut Player) {
        let [first, second] = &mut self.players;
        match attacker {
            PlayerId::One => (first.player_mut(), second.player_mut()),
            PlayerId::Two => (second.player_mut(), first.player_mut()),
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        self.players[id.index()].player_mut()
    }

    fn push_prompt(&mut self, prompt: String) {
        self.prompts.push_back(prompt);
    }
}

fn attack_prompt(outcome: AttackOutcome) -> &'static str {
    match outcome {
        AttackOutcome::Miss => "You missed!",
        AttackOutcome::Hit => "You hit!",
        AttackOutcome::Sunk => "You sunk enemys ship!",
    }
}

fn counter_attack_prompt(outcome: AttackOutcome) -> &'static str {
    match outcome {
        AttackOutcome::Miss => "Enemy missed!",
        AttackOutcome::Hit => "Enemy hit your ship!",
        AttackOutcome::Sunk => "Enemy sunk your ship!",
    }
}
