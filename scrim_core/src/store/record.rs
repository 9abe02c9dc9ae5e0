// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance override records.

use rustc_hash::FxHashMap;

use crate::path::ComponentPath;
use crate::state::ComponentState;

use super::prefix::PrefixIndex;

/// All overrides for one assembly instance.
///
/// Only non-default states are stored; the store drops a record entirely the
/// moment its last entry is removed. Every mutation rebuilds the record's
/// [`PrefixIndex`] before returning, so the entries and the index are never
/// observable out of step — even with the store lock held.
#[derive(Clone, Debug, Default)]
pub struct InstanceRecord {
    states: FxHashMap<ComponentPath, ComponentState>,
    prefixes: PrefixIndex,
}

impl InstanceRecord {
    /// Applies one state change. `Visible` removes the entry; anything else
    /// upserts it. Returns whether observable state changed.
    pub(crate) fn set(&mut self, path: ComponentPath, state: ComponentState) -> bool {
        let changed = if state.is_default() {
            self.states.remove(&path).is_some()
        } else {
            self.states.insert(path, state) != Some(state)
        };
        if changed {
            self.prefixes.rebuild(self.states.keys());
        }
        changed
    }

    /// The state stored for `path`, or `Visible` if absent.
    #[must_use]
    pub fn state(&self, path: &ComponentPath) -> ComponentState {
        self.states.get(path).copied().unwrap_or_default()
    }

    /// Returns whether the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Number of entries excluded from normal drawing (Hidden or
    /// Suppressed).
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| state.occludes_draw())
            .count()
    }

    /// Returns whether `prefix` itself or any descendant carries an entry.
    #[must_use]
    pub fn covers(&self, prefix: &ComponentPath) -> bool {
        self.prefixes.covers(prefix)
    }

    /// The draw-excluded paths (Hidden or Suppressed), sorted.
    #[must_use]
    pub fn hidden_paths(&self) -> Vec<ComponentPath> {
        let mut paths: Vec<ComponentPath> = self
            .states
            .iter()
            .filter(|(_, state)| state.occludes_draw())
            .map(|(path, _)| path.clone())
            .collect();
        paths.sort_unstable();
        paths
    }

    /// Iterates the stored entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&ComponentPath, ComponentState)> {
        self.states.iter().map(|(path, state)| (path, *state))
    }
}
