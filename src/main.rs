//! Noughts - terminal front-end
//!
//! Plays tic-tac-toe in the terminal against another human or the random
//! bot, with results logged to a history file.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, FirstArg};
use noughts::{FileStore, HistoryLog, MatchSession, Mode, Player, Renderer};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            opponent,
            first,
            history_file,
        } => run_game(opponent.mode(), first.map(FirstArg::player), history_file).await,
        Command::History { history_file } => show_history(history_file),
    }
}

/// Runs one interactive game to completion.
async fn run_game(mode: Mode, first: Option<Player>, history_file: PathBuf) -> Result<()> {
    println!("Noughts - {}", mode.label());

    let store = Box::new(FileStore::new(&history_file));
    let renderer = Box::new(TerminalRenderer::new());
    let session = match first {
        Some(player) => MatchSession::start_with_first_player(mode, player, renderer, store),
        None => MatchSession::start(mode, renderer, store),
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if session.is_finished() {
            break;
        }
        if session.awaiting_bot() {
            // The bot fires from its own timer task; just wait it out.
            tokio::time::sleep(Duration::from_millis(50)).await;
            continue;
        }

        println!("{} to move - enter a square (1-9):", session.current_player());
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => {
                if let Err(err) = session.submit_move(n - 1) {
                    println!("{err}");
                }
            }
            _ => println!("Enter a number from 1 to 9"),
        }
    }

    Ok(())
}

/// Prints the stored result history for both modes.
fn show_history(history_file: PathBuf) -> Result<()> {
    let log = HistoryLog::new(Box::new(FileStore::new(&history_file)));

    for mode in Mode::iter() {
        println!("{}", mode.label());
        let entries = log.load(mode);
        if entries.is_empty() {
            println!("  (no games recorded)");
        }
        for entry in &entries {
            println!("  {entry}");
        }
    }

    Ok(())
}

/// Draws the board and messages to stdout.
struct TerminalRenderer {
    cells: [Option<Player>; 9],
}

impl TerminalRenderer {
    fn new() -> Self {
        let renderer = Self { cells: [None; 9] };
        renderer.draw_board();
        renderer
    }

    fn draw_board(&self) {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Some(player) => out.push_str(&player.to_string()),
                    None => out.push_str(&(pos + 1).to_string()),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        println!("\n{out}\n");
    }
}

impl Renderer for TerminalRenderer {
    fn on_cell_marked(&mut self, pos: usize, player: Player) {
        self.cells[pos] = Some(player);
        self.draw_board();
    }

    fn on_win_line_determined(&mut self, first: usize, last: usize) {
        println!("Winning line: {} through {}", first + 1, last + 1);
    }

    fn on_status_changed(&mut self, text: &str) {
        println!("{text}");
    }

    fn on_history_changed(&mut self, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        println!("Recent results:");
        for entry in entries {
            println!("  {entry}");
        }
    }
}
