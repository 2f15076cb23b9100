//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts::{Mode, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-mode tic-tac-toe with a persisted match history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game
    Play {
        /// Who to play against
        #[arg(short, long, value_enum, default_value = "bot")]
        opponent: OpponentArg,

        /// Force the starting player instead of flipping a coin
        #[arg(long, value_enum)]
        first: Option<FirstArg>,

        /// Path to the history file
        #[arg(long, default_value = "noughts_history.json")]
        history_file: PathBuf,
    },

    /// Show the stored result history for both modes
    History {
        /// Path to the history file
        #[arg(long, default_value = "noughts_history.json")]
        history_file: PathBuf,
    },
}

/// Opponent selection for the `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentArg {
    /// Two humans sharing the terminal.
    Pvp,
    /// The random bot (plays O).
    Bot,
}

impl OpponentArg {
    /// Maps the flag to the session mode.
    pub fn mode(self) -> Mode {
        match self {
            OpponentArg::Pvp => Mode::PlayerVsPlayer,
            OpponentArg::Bot => Mode::PlayerVsBot,
        }
    }
}

/// Starting-player override for the `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstArg {
    /// X moves first.
    X,
    /// O moves first.
    O,
}

impl FirstArg {
    /// Maps the flag to a player.
    pub fn player(self) -> Player {
        match self {
            FirstArg::X => Player::X,
            FirstArg::O => Player::O,
        }
    }
}
