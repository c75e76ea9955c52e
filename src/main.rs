// Self-play driver: runs a game through the same snapshot interface an
// external session would use, with a clock per side.

use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};

use negamax_ponder::agent::{EngineConfig, GameResult, NegamaxPlayer, Player, RandomPlayer};
use negamax_ponder::agent::ai::MaterialHeuristic;
use negamax_ponder::game_repr::{Color, Position};
use negamax_ponder::EngineResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Another engine with the same settings
    Engine,
    /// Uniformly random legal moves
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Play the negamax engine against itself or a random mover")]
struct Args {
    /// Maximum iterative-deepening depth
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Fixed depth searched when a clock drops below five seconds
    #[arg(long, default_value_t = 2)]
    pressure_depth: u32,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    plies: u32,

    /// Initial clock per side, in seconds
    #[arg(long, default_value_t = 300)]
    clock: u64,

    /// Let the engine think on the opponent's time
    #[arg(long)]
    ponder: bool,

    /// Who plays Black
    #[arg(long, value_enum, default_value_t = Opponent::Engine)]
    opponent: Opponent,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> EngineResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = EngineConfig {
        max_depth: args.depth,
        pressure_depth: args.pressure_depth,
        ponder: args.ponder,
    };

    let mut game = match &args.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::default(),
    };

    let white: Box<dyn Player> = Box::new(NegamaxPlayer::new(
        config,
        Arc::new(MaterialHeuristic),
        "White".to_string(),
    ));
    let black: Box<dyn Player> = match args.opponent {
        Opponent::Engine => Box::new(NegamaxPlayer::new(
            config,
            Arc::new(MaterialHeuristic),
            "Black".to_string(),
        )),
        Opponent::Random => Box::new(match args.seed {
            Some(seed) => RandomPlayer::seeded(seed),
            None => RandomPlayer::new(),
        }),
    };
    let mut players = [white, black];
    let mut clocks = [Duration::from_secs(args.clock); 2];

    let result = play_game(&mut game, &mut players, &mut clocks, args.plies)?;

    if let Some(result) = result {
        for player in players.iter_mut() {
            player.game_ended(result);
        }
    }

    match result {
        Some(result) => log::info!("game over: {:?}", result),
        None => log::info!("stopped after {} plies", args.plies),
    }
    println!("{}", game.to_fen());

    Ok(())
}

fn play_game(
    game: &mut Position,
    players: &mut [Box<dyn Player>; 2],
    clocks: &mut [Duration; 2],
    plies: u32,
) -> EngineResult<Option<GameResult>> {
    for ply in 0..plies {
        if game.is_draw_by_rule() {
            return Ok(Some(GameResult::Draw));
        }

        let side = game.side_to_move();
        let snapshot = game.snapshot(*clocks);
        let player = &mut players[side.index()];

        let started = Instant::now();
        let chosen = player.choose_move(&snapshot)?;
        clocks[side.index()] = clocks[side.index()].saturating_sub(started.elapsed());

        let Some(chosen) = chosen else {
            return Ok(Some(if game.is_in_check(side) {
                GameResult::from_winner(side.opposite())
            } else {
                GameResult::Stalemate
            }));
        };

        if clocks[side.index()].is_zero() {
            log::info!("{} lost on time", player.name());
            return Ok(Some(GameResult::from_winner(side.opposite())));
        }

        game.play_move(chosen)?;
        log::info!(
            "{:>3}. {} {} ({:.1}s left)",
            ply / 2 + 1,
            if side == Color::White { "white" } else { "black" },
            chosen,
            clocks[side.index()].as_secs_f32()
        );
    }

    Ok(None)
}
