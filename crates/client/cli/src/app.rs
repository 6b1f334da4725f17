//! Application orchestration: engine, deferred clears, input, rendering.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent};
use pairs_core::{Action, ActionOutcome, Effect, GameEngine, GameEnv, GameState, PcgRng, compute_seed};
use tokio::time::{self, Duration, Instant};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::messages::MessageLog;
use crate::presentation::{terminal, terminal::Tui, ui};
use crate::state::AppState;

const FRAME_INTERVAL_MS: u64 = 16;

/// A scheduled mismatch clear: when to fire and for which round.
#[derive(Clone, Copy, Debug)]
struct PendingClear {
    fire_at: Instant,
    round: u32,
}

/// Owns the game state and coordinates input, timers, and rendering.
pub struct App {
    game: GameState,
    rng: PcgRng,
    input: InputHandler,
    app_state: AppState,
    messages: MessageLog,
    /// Armed while a mismatched pair is waiting to flip back down.
    /// Dropped on reset; the round token in the action guards the rest.
    pending_clear: Option<PendingClear>,
    /// Seed for the next reshuffle; advanced after every use.
    next_seed: u64,
}

impl App {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let deck = pairs_content::starter_deck()?;
        let session_seed = config.seed.unwrap_or_else(entropy_seed);
        tracing::info!(session_seed, "starting session");

        let mut app = Self {
            game: GameState::new(deck),
            rng: PcgRng,
            input: InputHandler,
            app_state: AppState::new(),
            messages: MessageLog::new(),
            pending_clear: None,
            next_seed: session_seed,
        };

        // Mount is a reset: the first shuffle takes the same path as
        // every later one.
        let seed = app.take_seed();
        app.execute(Action::reset(seed))?;
        Ok(app)
    }

    pub async fn run(mut self) -> Result<()> {
        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = self.event_loop(&mut terminal).await;

        terminal::restore()?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            let clear_at = self.pending_clear.map(|pending| pending.fire_at);
            tokio::select! {
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                _ = async { time::sleep_until(clear_at.unwrap()).await }, if clear_at.is_some() => {
                    self.fire_pending_clear(terminal)?;
                }
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    /// Drains ready terminal events without blocking the frame tick.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut dirty = false;

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                TermEvent::Key(key) => match self.input.handle_key(key) {
                    KeyAction::Quit => return Ok(true),
                    KeyAction::MoveCursor(direction) => {
                        self.app_state.move_cursor(direction, self.game.deck.len());
                        dirty = true;
                    }
                    KeyAction::FlipCard => {
                        self.execute(Action::select(self.app_state.cursor))?;
                        dirty = true;
                    }
                    KeyAction::Reset => {
                        let seed = self.take_seed();
                        self.execute(Action::reset(seed))?;
                        dirty = true;
                    }
                    KeyAction::None => {}
                },
                TermEvent::Resize(..) => dirty = true,
                _ => {}
            }
        }

        if dirty {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Delivers the scheduled clear back into the engine.
    fn fire_pending_clear(&mut self, terminal: &mut Tui) -> Result<()> {
        let Some(pending) = self.pending_clear.take() else {
            return Ok(());
        };
        self.execute(Action::resolve_mismatch(pending.round))?;
        self.render(terminal)
    }

    /// Runs an action through the engine, records its message, and arms
    /// any follow-up effect.
    fn execute(&mut self, action: Action) -> Result<()> {
        let env = GameEnv::new(&self.rng);
        let result = GameEngine::new(&mut self.game).execute(&env, &action)?;

        match result.outcome {
            ActionOutcome::Flipped { index } => {
                tracing::debug!(index, "card flipped");
            }
            ActionOutcome::Matched { face, won, .. } => {
                self.messages.push(format!("Matched the {face} pair"));
                if won {
                    self.messages
                        .push(format!("Board cleared in {} moves!", self.game.moves));
                    tracing::info!(moves = self.game.moves, "round won");
                }
            }
            ActionOutcome::Mismatched { pair } => {
                tracing::debug!(?pair, "mismatch");
                self.messages.push("No match, flipping back".to_string());
            }
            ActionOutcome::Cleared { .. } => {
                tracing::debug!("mismatch cleared");
            }
            ActionOutcome::Reshuffled => {
                self.pending_clear = None;
                self.messages.push("New round".to_string());
                tracing::info!(round = self.game.round, "reshuffled");
            }
            ActionOutcome::Ignored(reason) => {
                tracing::debug!(?reason, "input ignored");
            }
        }

        if let Some(Effect::ScheduleMismatchClear { round, delay_ms }) = result.effect {
            self.pending_clear = Some(PendingClear {
                fire_at: Instant::now() + Duration::from_millis(delay_ms),
                round,
            });
        }

        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(terminal, &self.game, &self.app_state, &self.messages)
    }

    fn take_seed(&mut self) -> u64 {
        let seed = self.next_seed;
        self.next_seed = compute_seed(seed, 1);
        seed
    }
}

/// Seeds from the wall clock when no fixed seed is configured.
fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
