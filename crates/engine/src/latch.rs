//! The per-(user, day) generation latch.
//!
//! A one-shot guard preventing duplicate automatic generation. Modeled as an
//! explicit {Idle, Generating, Done} state machine per key rather than an
//! ambient boolean, so concurrent callers and key changes (new day, user
//! switch) stay well-defined.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

/// The latch scope: one user on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenerationKey {
    pub user_id: String,
    pub day: NaiveDate,
}

impl GenerationKey {
    pub fn new(user_id: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            day,
        }
    }
}

/// Latch state for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatchState {
    /// No attempt has run (or the key was reset).
    #[default]
    Idle,
    /// An attempt is in flight; further automatic triggers must not start.
    Generating,
    /// An attempt completed and its result is cached.
    Done,
}

/// Outcome of asking to begin an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryBegin {
    /// The caller owns the attempt and must call `complete` or `reset`.
    Started,
    /// Another attempt is running for this key.
    InFlight,
    /// An attempt already completed for this key.
    AlreadyDone,
}

/// One-shot latch over (user, day) keys.
///
/// Entries for old days are dropped lazily: `reset` removes them, and a new
/// day is simply a new key starting at Idle.
pub struct GenerationLatch {
    states: Mutex<HashMap<GenerationKey, LatchState>>,
}

impl GenerationLatch {
    pub fn new() -> Self {
        Self {
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Current state for a key.
    pub fn state(&self, key: &GenerationKey) -> LatchState {
        self.states
            .lock()
            .expect("latch mutex poisoned")
            .get(key)
            .copied()
            .unwrap_or_default()
    }

    /// Attempt to take ownership of a generation attempt.
    pub fn try_begin(&self, key: &GenerationKey) -> TryBegin {
        let mut states = self.states.lock().expect("latch mutex poisoned");
        match states.get(key).copied().unwrap_or_default() {
            LatchState::Idle => {
                states.insert(key.clone(), LatchState::Generating);
                TryBegin::Started
            }
            LatchState::Generating => TryBegin::InFlight,
            LatchState::Done => TryBegin::AlreadyDone,
        }
    }

    /// Mark the attempt finished; the result is now cached.
    pub fn complete(&self, key: &GenerationKey) {
        self.states
            .lock()
            .expect("latch mutex poisoned")
            .insert(key.clone(), LatchState::Done);
    }

    /// Drop the key back to Idle (regenerate, clear, or failed attempt).
    pub fn reset(&self, key: &GenerationKey) {
        self.states
            .lock()
            .expect("latch mutex poisoned")
            .remove(key);
    }
}

impl Default for GenerationLatch {
    fn default() -> Self {
        Self::new()
    }
}
