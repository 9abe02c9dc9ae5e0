// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable point-in-time copies of the store.

use rustc_hash::FxHashMap;

use crate::id::InstanceId;
use crate::path::ComponentPath;
use crate::state::ComponentState;

use super::record::InstanceRecord;

/// An independent copy of every managed instance's record, safe for
/// concurrent read-only traversal without locking.
///
/// Produced by [`VisibilityStore::snapshot`](super::VisibilityStore::snapshot)
/// while the store's mutex is held; after that it has no relationship to the
/// store. There are no mutating methods — immutability is carried by the
/// type, not by convention — so sharing a snapshot between reader contexts
/// within a frame needs no synchronization. The capturing frame owns it and
/// drops it at frame end.
#[derive(Clone, Debug, Default)]
pub struct VisibilitySnapshot {
    instances: FxHashMap<InstanceId, InstanceRecord>,
}

impl VisibilitySnapshot {
    pub(crate) fn new(instances: FxHashMap<InstanceId, InstanceRecord>) -> Self {
        Self { instances }
    }

    /// Returns whether the instance had at least one override at capture.
    #[must_use]
    pub fn is_managed(&self, id: InstanceId) -> bool {
        self.instances.contains_key(&id)
    }

    /// The state captured for `path`, or `Visible` if instance or path was
    /// absent.
    #[must_use]
    pub fn state(&self, id: InstanceId, path: &ComponentPath) -> ComponentState {
        self.instances
            .get(&id)
            .map_or(ComponentState::Visible, |record| record.state(path))
    }

    /// Returns whether `prefix` itself or any of its descendants carried a
    /// non-default state at capture.
    #[must_use]
    pub fn has_hidden_descendants(&self, id: InstanceId, prefix: &ComponentPath) -> bool {
        self.instances
            .get(&id)
            .is_some_and(|record| record.covers(prefix))
    }

    /// Number of draw-excluded entries captured for the instance.
    #[must_use]
    pub fn hidden_count(&self, id: InstanceId) -> usize {
        self.instances.get(&id).map_or(0, InstanceRecord::hidden_count)
    }

    /// The managed instance ids, sorted.
    #[must_use]
    pub fn managed_instances(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self.instances.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterates the captured entries of one instance in unspecified order.
    /// Empty for unmanaged instances.
    pub fn entries(
        &self,
        id: InstanceId,
    ) -> impl Iterator<Item = (&ComponentPath, ComponentState)> {
        self.instances
            .get(&id)
            .into_iter()
            .flat_map(InstanceRecord::entries)
    }

    /// Number of managed instances captured.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Total path entries captured across all instances.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.instances.values().map(InstanceRecord::len).sum()
    }

    /// Returns whether nothing was managed at capture.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
