//! The mapping table: storage and validation of transition rules.

use crate::core::{Action, ActionKind, Mapping, State, StateKind};
use crate::machine::error::ConfigError;

/// Unordered set of transition rules.
///
/// Insertion enforces the determinism invariant: for a given
/// `(source kind, action kind)` pair at most one mapping exists, so lookup
/// never needs tie-breaking.
#[derive(Clone, Debug)]
pub struct MappingTable<S: State, A: Action> {
    mappings: Vec<Mapping<S, A>>,
}

impl<S: State, A: Action> Default for MappingTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> MappingTable<S, A> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
        }
    }

    /// Insert a mapping, enforcing the conflict rule.
    ///
    /// A mapping whose source and action kinds match an existing entry
    /// with a *different* destination kind is rejected with
    /// [`ConfigError::Conflict`]. A mapping equal to an existing entry in
    /// all three kinds is a harmless duplicate: the call succeeds, the
    /// table is unchanged, and the first-registered destination instance
    /// stays in effect.
    pub fn insert(&mut self, mapping: Mapping<S, A>) -> Result<(), ConfigError<S, A>> {
        if let Some(existing) = self
            .mappings
            .iter()
            .find(|existing| existing.matches(mapping.source_kind(), mapping.action_kind()))
        {
            if existing.destination_kind() == mapping.destination_kind() {
                return Ok(());
            }
            return Err(ConfigError::Conflict {
                existing: existing.clone(),
                candidate: mapping,
            });
        }

        self.mappings.push(mapping);
        Ok(())
    }

    /// Find the unique mapping for a source/action pair, if any.
    pub fn find(
        &self,
        source: StateKind<S>,
        action: ActionKind<A>,
    ) -> Option<&Mapping<S, A>> {
        debug_assert!(
            self.mappings
                .iter()
                .filter(|m| m.matches(source, action))
                .count()
                <= 1,
            "mapping table holds duplicate entries for one source/action pair"
        );
        self.mappings.iter().find(|m| m.matches(source, action))
    }

    /// Number of mappings stored.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the table holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Iterate over the stored mappings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Mapping<S, A>> {
        self.mappings.iter()
    }
}
