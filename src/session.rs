//! Event-loop shell around [`Game`].
//!
//! The host owns the clock: it forwards clicks through [`Session::submit`] and
//! calls [`Session::tick`] periodically. At most one task is pending at a time,
//! so exactly one board mutation is ever in flight and a human move's flips
//! are always presented before the computer answers.

use serde::Serialize;
use tracing::{debug, info, warn};
use web_time::Instant;

use crate::ai::{FirstLegalMoveSelector, MoveSelector, RandomMoveSelector};
use crate::config::SessionConfig;
use crate::game::Game;
use crate::types::{GameResult, GameState, TurnPhase};

/// Receives every state change and the final result.
pub trait Presenter {
    fn on_state(&mut self, state: &GameState);
    fn on_game_over(&mut self, result: &GameResult);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    State(GameState),
    GameOver(GameResult),
}

/// Presenter that buffers events until the host drains them.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SessionEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Presenter for EventQueue {
    fn on_state(&mut self, state: &GameState) {
        self.events.push(SessionEvent::State(state.clone()));
    }

    fn on_game_over(&mut self, result: &GameResult) {
        self.events.push(SessionEvent::GameOver(*result));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// First render after start-up or reset.
    Start,
    AiMove,
    ShowResult,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    task: ScheduledTask,
    due: Instant,
}

pub struct Session<P, S = RandomMoveSelector> {
    game: Game,
    selector: S,
    presenter: P,
    config: SessionConfig,
    pending: Option<Pending>,
}

impl<P: Presenter> Session<P> {
    /// Standard game against the random computer player.
    pub fn new(config: SessionConfig, presenter: P, now: Instant) -> Self {
        Self::with_game(Game::new(), config, RandomMoveSelector, presenter, now)
    }
}

impl<P: Presenter, S: MoveSelector> Session<P, S> {
    pub fn with_game(
        game: Game,
        config: SessionConfig,
        selector: S,
        presenter: P,
        now: Instant,
    ) -> Self {
        let mut session = Self {
            game,
            selector,
            presenter,
            config,
            pending: None,
        };
        session.schedule(ScheduledTask::Start, now + config.ai_delay());
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn pending_task(&self) -> Option<(ScheduledTask, Instant)> {
        self.pending.map(|p| (p.task, p.due))
    }

    /// Forwards a click. Returns whether the move was applied; anything that
    /// is not a legal move on the human's turn is ignored.
    pub fn submit(&mut self, index: usize, now: Instant) -> bool {
        if let Err(err) = self.game.play_human(index) {
            debug!(index, %err, "move request ignored");
            return false;
        }

        self.present_state();
        match self.game.phase() {
            TurnPhase::AiTurn => self.schedule(ScheduledTask::AiMove, now + self.config.ai_delay()),
            TurnPhase::GameOver => {
                self.schedule(ScheduledTask::ShowResult, now + self.config.result_delay())
            }
            // the computer had to pass
            TurnPhase::HumanTurn => self.pending = None,
        }
        true
    }

    /// Runs the pending task if it is due. Returns whether one ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now < pending.due {
            return false;
        }
        self.pending = None;

        match pending.task {
            ScheduledTask::Start => {
                self.present_state();
                match self.game.phase() {
                    TurnPhase::GameOver => self.present_result(),
                    TurnPhase::AiTurn => self.run_ai(now),
                    TurnPhase::HumanTurn => {}
                }
            }
            ScheduledTask::AiMove => self.run_ai(now),
            ScheduledTask::ShowResult => self.present_result(),
        }
        true
    }

    /// Starts over from the opening position. Drops any pending task.
    pub fn reset(&mut self, now: Instant) {
        info!("new game");
        self.game.reset();
        self.pending = None;
        self.schedule(ScheduledTask::Start, now + self.config.ai_delay());
    }

    fn run_ai(&mut self, now: Instant) {
        let played = match self.game.play_ai(&self.selector) {
            Ok(played) => played,
            Err(err) => {
                warn!(%err, "computer move failed, falling back to first legal move");
                match self.game.play_ai(&FirstLegalMoveSelector) {
                    Ok(played) => played,
                    Err(err) => {
                        warn!(%err, "fallback computer move failed");
                        None
                    }
                }
            }
        };
        debug!(?played, "computer turn finished");

        self.present_state();
        self.continue_turn(now);
    }

    /// Follow-up after the computer's move has been presented.
    fn continue_turn(&mut self, now: Instant) {
        match self.game.phase() {
            TurnPhase::GameOver => self.present_result(),
            // the human had to pass
            TurnPhase::AiTurn => self.schedule(ScheduledTask::AiMove, now + self.config.ai_delay()),
            TurnPhase::HumanTurn => {}
        }
    }

    fn present_state(&mut self) {
        self.presenter.on_state(&self.game.state());
    }

    fn present_result(&mut self) {
        if let Some(result) = self.game.result() {
            info!(%result, "announcing result");
            self.presenter.on_game_over(&result);
        }
    }

    fn schedule(&mut self, task: ScheduledTask, due: Instant) {
        self.pending = Some(Pending { task, due });
    }
}
