//! In-memory transition history.
//!
//! Every committed transition is appended to a log owned by the machine.
//! The log is observability only; nothing here is written to disk.

use super::action::Action;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use hatchling::core::TransitionRecord;
/// use hatchling::{action_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Phase { Solid, Liquid }
/// }
///
/// action_enum! {
///     enum Change { Melt }
/// }
///
/// let record = TransitionRecord {
///     from: Phase::Solid,
///     action: Change::Melt,
///     to: Phase::Liquid,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, Phase::Liquid);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, A: Action> {
    /// The state being transitioned from
    pub from: S,
    /// The action that triggered the transition
    pub action: A,
    /// The state being transitioned to
    pub to: S,
    /// When the transition committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of committed transitions.
///
/// The log is immutable: `record` returns a new log with the entry
/// appended, leaving the original untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State, A: Action> {
    records: Vec<TransitionRecord<S, A>>,
}

impl<S: State, A: Action> Default for TransitionLog<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> TransitionLog<S, A> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    pub fn record(&self, record: TransitionRecord<S, A>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The path of states traversed: the `from` of the first record, then
    /// the `to` of each record in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hatchling::core::{TransitionLog, TransitionRecord};
    /// use hatchling::{action_enum, state_enum};
    /// use chrono::Utc;
    ///
    /// state_enum! {
    ///     enum Step { One, Two, Three }
    /// }
    ///
    /// action_enum! {
    ///     enum Go { Next }
    /// }
    ///
    /// let log = TransitionLog::new()
    ///     .record(TransitionRecord {
    ///         from: Step::One,
    ///         action: Go::Next,
    ///         to: Step::Two,
    ///         timestamp: Utc::now(),
    ///     })
    ///     .record(TransitionRecord {
    ///         from: Step::Two,
    ///         action: Go::Next,
    ///         to: Step::Three,
    ///         timestamp: Utc::now(),
    ///     });
    ///
    /// let path = log.path();
    /// assert_eq!(path, vec![&Step::One, &Step::Two, &Step::Three]);
    /// ```
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last committed transition, or
    /// `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All records in commit order.
    pub fn records(&self) -> &[TransitionRecord<S, A>] {
        &self.records
    }

    /// Number of committed transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any transition has committed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
