//! Pawn-Drop command line.
//!
//! ## Usage
//!
//! - `pawn-drop` - Run a self-play demo
//! - `pawn-drop demo` - Run a self-play demo
//! - `pawn-drop suggest <FILE> --player x` - Decide a drop for a saved board
//! - `pawn-drop protocol` - Start the text protocol on stdin/stdout

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use fastrand::Rng;
use log::info;

use pawn_drop::board::{Board, Player};
use pawn_drop::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, N};
use pawn_drop::pairs::scan_player_pairs;
use pawn_drop::protocol::ProtocolEngine;
use pawn_drop::shapes::drop_shapes;

/// Pawn-Drop: placement engine for a pawn-dropping board game
#[derive(Parser)]
#[command(name = "pawn-drop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the random generator (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the engine play both sides until the board is full
    Demo {
        /// Board size
        #[arg(long, default_value_t = N)]
        size: usize,
    },
    /// Decide the next drop for a board read from a file
    Suggest {
        /// Board file: one row per line, '.' empty, 'X' first player, 'O' second player
        file: PathBuf,
        /// Acting player (x or o)
        #[arg(long, default_value = "x")]
        player: String,
        /// Also list harpoon/needle options for the player's pairs
        #[arg(long)]
        analyze: bool,
    },
    /// Start the text protocol on stdin/stdout
    Protocol {
        /// Board size
        #[arg(long, default_value_t = N)]
        size: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };

    match cli.command {
        Some(Commands::Suggest {
            file,
            player,
            analyze,
        }) => run_suggest(&file, &player, analyze, rng),
        Some(Commands::Protocol { size }) => {
            check_size(size)?;
            let mut engine = ProtocolEngine::with_size(size, rng);
            engine.run().context("protocol loop failed")
        }
        Some(Commands::Demo { size }) => run_demo(size, rng),
        None => run_demo(N, rng),
    }
}

fn check_size(size: usize) -> anyhow::Result<()> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        bail!("board size must be within {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {size}");
    }
    Ok(())
}

fn run_suggest(file: &Path, player: &str, analyze: bool, mut rng: Rng) -> anyhow::Result<()> {
    let text =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let board: Board = text
        .parse()
        .with_context(|| format!("failed to parse board in {}", file.display()))?;
    let Some(player) = Player::parse(player) else {
        bail!("unknown player '{player}', expected x or o");
    };

    let decision = drop_shapes(&board, player, &mut rng).context("no drop available")?;
    let (row, col) = (decision.position.row, decision.position.col);
    match decision.value {
        Some(value) => println!("{row} {col} (value {value})"),
        None => println!("{row} {col}"),
    }

    if analyze {
        for found in scan_player_pairs(player, &board) {
            let [a, b] = found.pair.pawns();
            let options: Vec<String> = found.options.iter().map(ToString::to_string).collect();
            println!(
                "{} {} {:?}: {}",
                a.position,
                b.position,
                found.separation,
                options.join(" ")
            );
        }
    }
    Ok(())
}

fn run_demo(size: usize, mut rng: Rng) -> anyhow::Result<()> {
    check_size(size)?;
    println!("Pawn-Drop: self-play on a {size}x{size} board\n");

    let mut board = Board::new(size);
    let mut player = Player::First;
    let mut turn = 0;

    while !board.is_full() {
        let decision = drop_shapes(&board, player, &mut rng)
            .with_context(|| format!("turn {turn}: no drop for {player:?}"))?;
        board
            .place(decision.position, player)
            .with_context(|| format!("turn {turn}: engine chose an illegal cell"))?;
        info!("turn {turn}: {player:?} -> {}", decision.position);
        println!("{:>3}. {} drops at {}", turn + 1, player.glyph(), decision.position);

        player = player.opponent();
        turn += 1;
    }

    println!("\n{board}");
    Ok(())
}
