//! Match session: one game, one renderer, one history log.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::bot::RandomBot;
use crate::game::{Game, GameStatus, Mode, MoveError, Outcome, Player};
use crate::history::{HistoryEntry, HistoryLog, KeyValueStore};
use crate::render::Renderer;

/// The side the bot plays in [`Mode::PlayerVsBot`].
const BOT_MARK: Player = Player::O;

/// Pause before a scheduled bot move, for pacing only.
const BOT_DELAY: Duration = Duration::from_millis(400);

/// Turn controller for a single game session.
///
/// Owns the game state, drives the injected [`Renderer`], appends finished
/// games to the history log, and schedules the bot's deferred moves. Clones
/// share the same session.
///
/// Requires a running tokio runtime: bot moves fire from a spawned timer
/// task after a fixed pacing delay.
#[derive(Clone)]
pub struct MatchSession {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    game: Game,
    bot: RandomBot,
    history: HistoryLog,
    renderer: Box<dyn Renderer>,
}

impl MatchSession {
    /// Starts a session with a randomly chosen starting player.
    #[instrument(skip(renderer, store))]
    pub fn start(mode: Mode, renderer: Box<dyn Renderer>, store: Box<dyn KeyValueStore>) -> Self {
        Self::start_session(Game::new(mode), renderer, store)
    }

    /// Starts a session with an explicit starting player.
    #[instrument(skip(renderer, store))]
    pub fn start_with_first_player(
        mode: Mode,
        first_player: Player,
        renderer: Box<dyn Renderer>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        Self::start_session(Game::with_first_player(mode, first_player), renderer, store)
    }

    fn start_session(
        game: Game,
        renderer: Box<dyn Renderer>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let mut inner = Inner {
            game,
            bot: RandomBot::new(),
            history: HistoryLog::new(store),
            renderer,
        };

        info!(
            mode = inner.game.state().mode().label(),
            first = %inner.game.state().current_player(),
            "session started"
        );

        inner.announce_turn();
        let entries = inner.history.load(inner.game.state().mode());
        inner.renderer.on_history_changed(&entries);

        let bot_starts = inner.awaiting_bot();
        let session = Self {
            inner: Arc::new(Mutex::new(inner)),
        };
        if bot_starts {
            session.schedule_bot_move();
        }
        session
    }

    /// Submits a move at the given index (0-8) for the current player.
    ///
    /// On acceptance the renderer is notified and, in bot mode, a bot move
    /// is scheduled when the turn passes to the bot.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] for an occupied square, an off-board index, or
    /// a finished game; nothing changes and no callbacks fire.
    #[instrument(skip(self))]
    pub fn submit_move(&self, pos: usize) -> Result<(), MoveError> {
        let needs_bot = {
            let mut inner = self.inner.lock().unwrap();
            match inner.play(pos) {
                Ok(needs_bot) => needs_bot,
                Err(err) => {
                    debug!(pos, error = %err, "move rejected");
                    return Err(err);
                }
            }
        };

        if needs_bot {
            self.schedule_bot_move();
        }
        Ok(())
    }

    /// Returns the session's mode.
    pub fn mode(&self) -> Mode {
        self.inner.lock().unwrap().game.state().mode()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.inner.lock().unwrap().game.state().current_player()
    }

    /// Returns true once the game reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.inner.lock().unwrap().game.is_over()
    }

    /// Returns true while a bot move is pending or due.
    pub fn awaiting_bot(&self) -> bool {
        self.inner.lock().unwrap().awaiting_bot()
    }

    fn schedule_bot_move(&self) {
        debug!(delay_ms = BOT_DELAY.as_millis() as u64, "bot move scheduled");
        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(BOT_DELAY).await;
            session.bot_move();
        });
    }

    /// Runs the deferred bot move.
    ///
    /// Re-checks the session first: the timer is not cancellable, so a
    /// wakeup after the game finished (or after the turn moved on) must be
    /// a no-op.
    fn bot_move(&self) {
        let needs_bot = {
            let mut inner = self.inner.lock().unwrap();
            if !inner.awaiting_bot() {
                debug!("stale bot wakeup ignored");
                return;
            }

            let Some(pos) = inner.bot.choose_move(inner.game.state().board()) else {
                debug_assert!(false, "bot invoked with no empty squares");
                warn!("bot invoked with no empty squares");
                return;
            };

            match inner.play(pos) {
                Ok(needs_bot) => needs_bot,
                Err(err) => {
                    warn!(pos, error = %err, "bot move rejected");
                    false
                }
            }
        };

        if needs_bot {
            self.schedule_bot_move();
        }
    }
}

impl Inner {
    /// Applies one move and drives the renderer; returns whether a bot move
    /// should be scheduled.
    fn play(&mut self, pos: usize) -> Result<bool, MoveError> {
        let mover = self.game.state().current_player();
        self.game.make_move(pos)?;
        self.renderer.on_cell_marked(pos, mover);

        match *self.game.state().status() {
            GameStatus::InProgress => {
                self.announce_turn();
                Ok(self.awaiting_bot())
            }
            GameStatus::Won { winner, line } => {
                self.renderer.on_win_line_determined(line.first, line.last);
                self.finish(Outcome::Win(winner));
                Ok(false)
            }
            GameStatus::Draw => {
                self.finish(Outcome::Draw);
                Ok(false)
            }
        }
    }

    fn announce_turn(&mut self) {
        let text = format!("Turn: {}", self.game.state().current_player());
        self.renderer.on_status_changed(&text);
    }

    fn finish(&mut self, outcome: Outcome) {
        let text = outcome.to_string();
        self.renderer.on_status_changed(&text);

        info!(
            result = %text,
            moves = self.game.state().moves().len(),
            board = %self.game.state().board().display(),
            "match finished"
        );

        let mode = self.game.state().mode();
        match self.history.append(mode, HistoryEntry::now(outcome)) {
            Ok(entries) => self.renderer.on_history_changed(&entries),
            Err(err) => warn!(error = %err, "failed to record result"),
        }
    }

    fn awaiting_bot(&self) -> bool {
        self.game.state().mode() == Mode::PlayerVsBot
            && !self.game.is_over()
            && self.game.state().current_player() == BOT_MARK
    }
}
