use anyhow::Result;
use battleship_core::{
    init_logging, render_boards, GameConfig, GameController, GameMode, Phase, PlayerId,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Headless player-vs-computer games for smoke tests and demos: a random
/// shooter stands in for the human side and drives the same command
/// surface a UI would.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix the RNG seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Print every prompt the core emits and enable library logging.
    #[arg(long)]
    verbose: bool,
    /// Print both boards when a game ends.
    #[arg(long)]
    boards: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Summary lines on stdout stay machine readable unless logs are asked for.
    if cli.verbose {
        init_logging();
    }
    for game in 0..cli.games {
        let seed = cli.seed.map(|base| base.wrapping_add(game as u64));
        run_game(game + 1, seed, cli.verbose, cli.boards)?;
    }
    Ok(())
}

fn run_game(number: u32, seed: Option<u64>, verbose: bool, boards: bool) -> Result<()> {
    let mut controller = match seed {
        Some(s) => GameController::with_seed(GameConfig::standard(), s),
        None => GameController::new(GameConfig::standard()),
    };
    let mut shooter = match seed {
        Some(s) => SmallRng::seed_from_u64(s ^ 0x5bd1_e995),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    controller.game_mode_selected(GameMode::PlayerVsComputer)?;
    place_fleet(&mut controller, &mut shooter, verbose)?;
    anyhow::ensure!(
        controller.phase() == Phase::Game,
        "expected the game phase after positioning"
    );

    let mut guard = 0;
    while controller.phase() == Phase::Game {
        guard += 1;
        anyhow::ensure!(guard <= 10_000, "game did not terminate");
        let Some(&(row, col)) = controller
            .player2()
            .potential_targets()
            .choose(&mut shooter)
        else {
            break;
        };
        controller.enemys_board_mouse_pressed(row, col);
        drain_prompts(&mut controller, verbose);
    }

    let winner = controller
        .winner_name()
        .ok_or_else(|| anyhow::anyhow!("game ended without a winner"))?;
    println!(
        "game {}: {} wins after {} rounds in {:?} (fleets {}% / {}%)",
        number,
        winner,
        controller.rounds_played(),
        controller.game_play_time(),
        controller.fleet_state_percent(PlayerId::One),
        controller.fleet_state_percent(PlayerId::Two),
    );
    if boards {
        print!(
            "{}",
            render_boards(controller.player1(), controller.player2())
        );
    }
    Ok(())
}

/// Drive the positioning phase through the same gesture command a UI
/// would send, drawing random spans until the fleet is down.
fn place_fleet(controller: &mut GameController, rng: &mut SmallRng, verbose: bool) -> Result<()> {
    let height = controller.config().height;
    let width = controller.config().width;
    let mut guard = 0;
    while !controller.player1().has_placed_fleet() {
        guard += 1;
        anyhow::ensure!(guard <= 100_000, "could not place the player fleet");
        let Some(&next) = controller.player1().ships_to_place().first() else {
            break;
        };
        let length = controller.player1().ships()[next.index()].length();
        if rng.random() {
            if width < length {
                continue;
            }
            let row = rng.random_range(0..height);
            let col = rng.random_range(0..=width - length);
            controller.players_cells_selected(row, col, row, col + length - 1);
        } else {
            if height < length {
                continue;
            }
            let row = rng.random_range(0..=height - length);
            let col = rng.random_range(0..width);
            controller.players_cells_selected(row, col, row + length - 1, col);
        }
        drain_prompts(controller, verbose);
    }
    Ok(())
}

fn drain_prompts(controller: &mut GameController, verbose: bool) {
    while let Some(prompt) = controller.fetch_prompt() {
        if verbose {
            println!("  {prompt}");
        }
    }
}
