//! Line-oriented text protocol for driving the engine from another program.
//!
//! Modelled on GTP: each command may carry a numeric id, and each response
//! starts with `=` (success) or `?` (failure), followed by the id and a
//! blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `boardsize <size>` - Resize and clear the board
//! - `clear_board` - Reset the board to empty
//! - `play <x|o> <row> <col>` - Drop a pawn
//! - `genmove <x|o>` - Let the engine choose and drop a pawn
//! - `showboard` - Print the board
//! - `analyze <x|o>` - List harpoon/needle options for the player's pairs
//!
//! ## Example
//!
//! ```ignore
//! use pawn_drop::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new(fastrand::Rng::new());
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use fastrand::Rng;
use log::{debug, info};

use crate::board::{Board, Coord, Player};
use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, N};
use crate::pairs::scan_player_pairs;
use crate::shapes::drop_shapes;

/// The list of known protocol commands.
const KNOWN_COMMANDS: &[&str] = &[
    "analyze",
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    board: Board,
    rng: Rng,
}

impl ProtocolEngine {
    /// Create an engine with an empty board of the default size.
    pub fn new(rng: Rng) -> Self {
        Self::with_size(N, rng)
    }

    pub fn with_size(size: usize, rng: Rng) -> Self {
        Self {
            board: Board::new(size),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("command {command} {args:?}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(stdout, "{prefix}{id_str} {message}\n")?;
            stdout.flush()?;

            if command == "quit" {
                info!("quit received");
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) => {
                        self.board = Board::new(size);
                        (true, String::new())
                    }
                    Ok(size) => (
                        false,
                        format!(
                            "unacceptable size {size}, expected {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
                        ),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.board = Board::new(self.board.size);
                (true, String::new())
            }

            "play" => {
                let [player, row, col] = args else {
                    return (false, "expected: play <x|o> <row> <col>".to_string());
                };
                let Some(player) = Player::parse(player) else {
                    return (false, format!("invalid player: {player}"));
                };
                let (Ok(row), Ok(col)) = (row.parse::<isize>(), col.parse::<isize>()) else {
                    return (false, "invalid coordinate".to_string());
                };
                match self.board.place(Coord::new(row, col), player) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(player) = args.first().and_then(|p| Player::parse(p)) else {
                    return (false, "expected: genmove <x|o>".to_string());
                };
                let decision = match drop_shapes(&self.board, player, &mut self.rng) {
                    Ok(d) => d,
                    Err(e) => return (false, e.to_string()),
                };
                match self.board.place(decision.position, player) {
                    Ok(()) => (
                        true,
                        format!("{} {}", decision.position.row, decision.position.col),
                    ),
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.board)),

            "analyze" => {
                let Some(player) = args.first().and_then(|p| Player::parse(p)) else {
                    return (false, "expected: analyze <x|o>".to_string());
                };
                let lines: Vec<String> = scan_player_pairs(player, &self.board)
                    .into_iter()
                    .map(|found| {
                        let [a, b] = found.pair.pawns();
                        let options: Vec<String> =
                            found.options.iter().map(ToString::to_string).collect();
                        format!(
                            "{} {} {:?}: {}",
                            a.position,
                            b.position,
                            found.separation,
                            options.join(" ")
                        )
                    })
                    .collect();
                (true, lines.join("\n"))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
