//! Lifecycle Controller
//!
//! Owns the run state of the current debate: its status, its conversation
//! state and the cancellation signal that gates every side effect.
//!
//! ```text
//!   Idle ──start──▶ Running ──stop / failure──▶ Paused
//!                     │  ▲                        │
//!                     │  └────────resume──────────┘
//!                     └──turn limit──▶ Completed
//! ```
//!
//! `start` is accepted from any state and always begins a fresh debate.
//!
//! Every run is identified by a [`RunToken`]. A token is *live* while the
//! status is Running, its epoch is the current one and it has not been
//! cancelled. Mutations made on behalf of a run re-check liveness under the
//! same lock that performs them, so a response arriving after `stop` has no
//! observable effect.

use debate_domain::{
    ConversationState, ConversationTurn, DebateStatus, DomainError, Persona, Seat, Topic,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};
use tracing::debug;

/// Errors from lifecycle transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Cannot resume a debate that is {0}")]
    NotResumable(DebateStatus),
}

/// Identity of one run, captured when a turn is scheduled
#[derive(Debug, Clone)]
pub struct RunToken {
    epoch: u64,
    cancel: CancellationToken,
}

impl RunToken {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once this run is cancelled
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.cancel.cancelled()
    }
}

/// Everything a turn needs, copied out under the lock
#[derive(Debug, Clone)]
pub struct TurnContext {
    pub topic: Topic,
    pub turns: Vec<ConversationTurn>,
    pub max_turns: usize,
}

impl TurnContext {
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn seat(&self) -> Seat {
        Seat::for_turn(self.turn_count())
    }

    pub fn is_finished(&self) -> bool {
        self.turn_count() >= self.max_turns
    }
}

#[derive(Debug)]
struct DebateSession {
    status: DebateStatus,
    state: Option<ConversationState>,
    epoch: u64,
    cancel: CancellationToken,
}

impl DebateSession {
    fn is_live(&self, token: &RunToken) -> bool {
        self.status == DebateStatus::Running
            && token.epoch == self.epoch
            && !token.cancel.is_cancelled()
    }

    fn issue_token(&mut self) -> RunToken {
        self.cancel.cancel();
        self.epoch += 1;
        self.cancel = CancellationToken::new();
        RunToken {
            epoch: self.epoch,
            cancel: self.cancel.clone(),
        }
    }
}

/// Single owner of debate run state
#[derive(Debug)]
pub struct LifecycleController {
    session: Mutex<DebateSession>,
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleController {
    pub fn new() -> Self {
        Self {
            session: Mutex::new(DebateSession {
                status: DebateStatus::Idle,
                state: None,
                epoch: 0,
                cancel: CancellationToken::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DebateSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Begin a fresh debate, discarding any previous one
    pub fn start(&self, topic: Topic, max_turns: usize) -> RunToken {
        let mut session = self.lock();
        session.state = Some(ConversationState::new(topic, max_turns));
        session.status = DebateStatus::Running;
        let token = session.issue_token();
        debug!(epoch = token.epoch, max_turns, "Debate started");
        token
    }

    /// Running → Paused. Returns `false` when there was nothing to stop.
    pub fn stop(&self) -> bool {
        let mut session = self.lock();
        if session.status != DebateStatus::Running {
            return false;
        }
        session.status = DebateStatus::Paused;
        session.cancel.cancel();
        debug!(epoch = session.epoch, "Debate stopped");
        true
    }

    /// Paused → Running with the same topic and history
    pub fn resume(&self) -> Result<RunToken, LifecycleError> {
        let mut session = self.lock();
        if !session.status.is_resumable() {
            return Err(LifecycleError::NotResumable(session.status));
        }
        session.status = DebateStatus::Running;
        let token = session.issue_token();
        debug!(epoch = token.epoch, "Debate resumed");
        Ok(token)
    }

    pub fn status(&self) -> DebateStatus {
        self.lock().status
    }

    pub fn is_live(&self, token: &RunToken) -> bool {
        self.lock().is_live(token)
    }

    /// Copy of the state a turn needs, or `None` if the token is stale
    pub fn turn_context(&self, token: &RunToken) -> Option<TurnContext> {
        let session = self.lock();
        if !session.is_live(token) {
            return None;
        }
        session.state.as_ref().map(|state| TurnContext {
            topic: state.topic().clone(),
            turns: state.turns().to_vec(),
            max_turns: state.max_turns(),
        })
    }

    /// Append a generated turn if the run is still live.
    ///
    /// Returns `Ok(None)` when the token went stale while the turn was being
    /// generated; the text is dropped in that case.
    pub fn append_turn(
        &self,
        token: &RunToken,
        seat: Seat,
        persona: &Persona,
        text: impl Into<String>,
    ) -> Result<Option<ConversationTurn>, DomainError> {
        let mut session = self.lock();
        if !session.is_live(token) {
            return Ok(None);
        }
        match session.state.as_mut() {
            Some(state) => state.record(seat, persona, text).map(|turn| Some(turn.clone())),
            None => Ok(None),
        }
    }

    /// Running → Completed once the turn limit is reached.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn complete(&self, token: &RunToken) -> bool {
        let mut session = self.lock();
        if !session.is_live(token) {
            return false;
        }
        let finished = session.state.as_ref().is_some_and(|s| s.is_finished());
        if !finished {
            return false;
        }
        session.status = DebateStatus::Completed;
        session.cancel.cancel();
        debug!(epoch = session.epoch, "Debate completed");
        true
    }

    /// Running → Paused after a failed turn.
    ///
    /// Returns `false` if the run was already stopped, in which case the
    /// failure should be swallowed.
    pub fn halt(&self, token: &RunToken) -> bool {
        let mut session = self.lock();
        if !session.is_live(token) {
            return false;
        }
        session.status = DebateStatus::Paused;
        session.cancel.cancel();
        debug!(epoch = session.epoch, "Debate halted");
        true
    }

    /// Turns appended so far in the current debate
    pub fn transcript(&self) -> Vec<ConversationTurn> {
        self.lock()
            .state
            .as_ref()
            .map(|s| s.turns().to_vec())
            .unwrap_or_default()
    }

    pub fn topic(&self) -> Option<Topic> {
        self.lock().state.as_ref().map(|s| s.topic().clone())
    }

    pub fn turn_count(&self) -> usize {
        self.lock().state.as_ref().map_or(0, |s| s.turn_count())
    }
}
