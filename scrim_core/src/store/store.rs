// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lock-protected visibility store.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::id::InstanceId;
use crate::path::ComponentPath;
use crate::state::ComponentState;

use super::record::InstanceRecord;
use super::snapshot::VisibilitySnapshot;

/// Source of truth for component visibility overrides.
///
/// One store exists per host document/session, owned by the session
/// controller and passed by reference to whatever needs it (mutation entry
/// points, the frame filter, the persistence codecs). It is never a global.
///
/// Every public method acquires the store's mutex for its entire body and
/// releases it on every exit path, so no caller observes a half-applied
/// mutation. None of the operations block on I/O or another subsystem; each
/// is a short in-memory critical section bounded by the number of stored
/// entries.
///
/// Render code does not query the store per component — it calls
/// [`snapshot`](Self::snapshot) once at frame start and reads the copy
/// lock-free for every traversal that frame. A mutation that completes
/// before the capture is visible in the capture; mutations during a frame
/// surface in the next frame's snapshot.
#[derive(Debug, Default)]
pub struct VisibilityStore {
    inner: Mutex<FxHashMap<InstanceId, InstanceRecord>>,
}

impl VisibilityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state for one component path of one instance.
    ///
    /// `Visible` removes the entry (the default is never materialized) and
    /// drops the instance's record if that was its last entry; any other
    /// state upserts. The instance's ancestor-prefix index is rebuilt inside
    /// the same critical section. Returns whether observable state changed;
    /// re-setting the same state is a no-op, as is any set on the depth-0
    /// path, which addresses no component.
    pub fn set_state(&self, id: InstanceId, path: ComponentPath, state: ComponentState) -> bool {
        if path.is_empty() {
            return false;
        }
        let mut inner = self.inner.lock();
        if state.is_default() {
            let Some(record) = inner.get_mut(&id) else {
                return false;
            };
            let changed = record.set(path, state);
            if record.is_empty() {
                inner.remove(&id);
            }
            changed
        } else {
            inner.entry(id).or_default().set(path, state)
        }
    }

    /// Marks a component hidden. Shorthand for
    /// [`set_state`](Self::set_state) with [`ComponentState::Hidden`].
    pub fn hide(&self, id: InstanceId, path: ComponentPath) -> bool {
        self.set_state(id, path, ComponentState::Hidden)
    }

    /// Restores a component to the default state. Shorthand for
    /// [`set_state`](Self::set_state) with [`ComponentState::Visible`].
    pub fn show(&self, id: InstanceId, path: ComponentPath) -> bool {
        self.set_state(id, path, ComponentState::Visible)
    }

    /// The state stored for `path`, or `Visible` if instance or path is
    /// absent.
    #[must_use]
    pub fn state(&self, id: InstanceId, path: &ComponentPath) -> ComponentState {
        self.inner
            .lock()
            .get(&id)
            .map_or(ComponentState::Visible, |record| record.state(path))
    }

    /// Returns whether the instance has at least one non-default entry.
    #[must_use]
    pub fn is_managed(&self, id: InstanceId) -> bool {
        self.inner.lock().contains_key(&id)
    }

    /// Number of the instance's draw-excluded entries (Hidden or
    /// Suppressed).
    #[must_use]
    pub fn hidden_count(&self, id: InstanceId) -> usize {
        self.inner
            .lock()
            .get(&id)
            .map_or(0, InstanceRecord::hidden_count)
    }

    /// Returns whether `prefix` itself or any of its descendants carries a
    /// non-default state. A single hash lookup against the instance's
    /// ancestor-prefix index.
    #[must_use]
    pub fn has_hidden_descendants(&self, id: InstanceId, prefix: &ComponentPath) -> bool {
        self.inner
            .lock()
            .get(&id)
            .is_some_and(|record| record.covers(prefix))
    }

    /// The managed instance ids, sorted.
    #[must_use]
    pub fn managed_instances(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self.inner.lock().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The instance's draw-excluded paths (Hidden or Suppressed), sorted.
    /// This is the set the per-object persistence record carries.
    #[must_use]
    pub fn hidden_paths(&self, id: InstanceId) -> Vec<ComponentPath> {
        self.inner
            .lock()
            .get(&id)
            .map_or_else(Vec::new, InstanceRecord::hidden_paths)
    }

    /// Removes every entry for the instance. Used when the host deletes the
    /// object. Returns whether the instance was managed.
    pub fn reset_instance(&self, id: InstanceId) -> bool {
        self.inner.lock().remove(&id).is_some()
    }

    /// Wipes the entire store. Used when the host closes the document.
    pub fn clear_all(&self) {
        self.inner.lock().clear();
    }

    /// Deep-copies every managed instance's record into an independent
    /// [`VisibilitySnapshot`].
    ///
    /// The copy happens under the store's mutex and costs O(total stored
    /// entries); call it once per frame, not per component.
    #[must_use]
    pub fn snapshot(&self) -> VisibilitySnapshot {
        VisibilitySnapshot::new(self.inner.lock().clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn path(text: &str) -> ComponentPath {
        text.parse().expect("valid path")
    }

    fn id(raw: u128) -> InstanceId {
        InstanceId::from_u128(raw)
    }

    #[test]
    fn untouched_instance_is_fully_visible() {
        let store = VisibilityStore::new();
        let x = id(1);
        assert!(!store.is_managed(x));
        assert_eq!(store.state(x, &path("0")), ComponentState::Visible);
        assert_eq!(store.state(x, &path("1.0.2")), ComponentState::Visible);
        assert_eq!(store.hidden_count(x), 0);
        assert!(store.managed_instances().is_empty());
    }

    #[test]
    fn set_state_is_idempotent() {
        let store = VisibilityStore::new();
        let x = id(1);
        assert!(store.set_state(x, path("0"), ComponentState::Hidden));
        assert!(!store.set_state(x, path("0"), ComponentState::Hidden));
        assert_eq!(store.state(x, &path("0")), ComponentState::Hidden);
        assert_eq!(store.hidden_count(x), 1);
    }

    #[test]
    fn visible_on_unset_path_is_noop() {
        let store = VisibilityStore::new();
        let x = id(1);
        assert!(!store.set_state(x, path("2"), ComponentState::Visible));
        assert!(!store.is_managed(x));
    }

    #[test]
    fn depth_zero_path_is_never_stored() {
        let store = VisibilityStore::new();
        let x = id(1);
        assert!(!store.set_state(x, ComponentPath::whole_instance(), ComponentState::Hidden));
        assert!(!store.is_managed(x));
    }

    #[test]
    fn visible_on_last_entry_unmanages() {
        let store = VisibilityStore::new();
        let x = id(1);
        store.hide(x, path("1.0"));
        assert!(store.is_managed(x));
        assert!(store.show(x, path("1.0")));
        assert!(!store.is_managed(x));
        assert!(!store.has_hidden_descendants(x, &path("1")));
    }

    #[test]
    fn prefix_queries_follow_sequence_semantics() {
        let store = VisibilityStore::new();
        let x = id(1);
        store.set_state(x, path("1.0.2"), ComponentState::Hidden);

        assert!(store.has_hidden_descendants(x, &path("1")));
        assert!(store.has_hidden_descendants(x, &path("1.0")));
        assert!(store.has_hidden_descendants(x, &path("1.0.2")));
        assert!(!store.has_hidden_descendants(x, &path("10")));
        assert!(!store.has_hidden_descendants(x, &path("1.1")));
    }

    #[test]
    fn empty_prefix_answers_is_managed() {
        let store = VisibilityStore::new();
        let x = id(1);
        let whole = ComponentPath::whole_instance();
        assert!(!store.has_hidden_descendants(x, &whole));
        store.set_state(x, path("4.2"), ComponentState::Transparent);
        assert!(store.has_hidden_descendants(x, &whole));
    }

    #[test]
    fn reset_instance_restores_defaults() {
        let store = VisibilityStore::new();
        let x = id(1);
        let y = id(2);
        store.hide(x, path("0"));
        store.set_state(x, path("1.0"), ComponentState::Suppressed);
        store.hide(y, path("3"));

        assert!(store.reset_instance(x));
        assert!(!store.is_managed(x));
        assert_eq!(store.state(x, &path("0")), ComponentState::Visible);
        assert!(store.is_managed(y), "other instances untouched");
        assert!(!store.reset_instance(x), "second reset is a no-op");
    }

    #[test]
    fn clear_all_wipes_everything() {
        let store = VisibilityStore::new();
        store.hide(id(1), path("0"));
        store.hide(id(2), path("1"));
        store.clear_all();
        assert!(store.managed_instances().is_empty());
        assert!(!store.is_managed(id(1)));
    }

    #[test]
    fn snapshot_isolated_from_later_mutation() {
        let store = VisibilityStore::new();
        let x = id(1);
        store.set_state(x, path("1.0"), ComponentState::Hidden);

        let snapshot = store.snapshot();
        store.set_state(x, path("1.0"), ComponentState::Visible);
        store.set_state(x, path("7"), ComponentState::Suppressed);

        assert_eq!(snapshot.state(x, &path("1.0")), ComponentState::Hidden);
        assert_eq!(snapshot.state(x, &path("7")), ComponentState::Visible);
        assert!(snapshot.has_hidden_descendants(x, &path("1")));
        assert!(!snapshot.has_hidden_descendants(x, &path("7")));
    }

    #[test]
    fn snapshots_stay_internally_consistent_under_concurrent_mutation() {
        let store = Arc::new(VisibilityStore::new());
        let x = id(7);

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for round in 0..500_u32 {
                    let deep = ComponentPath::from_indices(&[1, round % 8, 2]);
                    store.set_state(x, deep.clone(), ComponentState::Hidden);
                    store.set_state(x, ComponentPath::root(round % 4), ComponentState::Suppressed);
                    store.set_state(x, deep, ComponentState::Visible);
                    if round % 16 == 0 {
                        store.reset_instance(x);
                    }
                }
            })
        };

        let reader = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..500 {
                    let snapshot = store.snapshot();
                    // Whatever the interleaving, a snapshot must agree with
                    // itself: every entry's ancestors are covered, and a
                    // managed instance has at least one entry.
                    for instance in snapshot.managed_instances() {
                        let mut entries = 0;
                        for (entry_path, state) in snapshot.entries(instance) {
                            entries += 1;
                            assert!(!state.is_default(), "defaults are never stored");
                            assert!(snapshot.has_hidden_descendants(instance, entry_path));
                            for ancestor in entry_path.ancestors() {
                                assert!(
                                    snapshot.has_hidden_descendants(instance, &ancestor),
                                    "index out of step with entries"
                                );
                            }
                        }
                        assert!(entries > 0, "managed instance without entries");
                    }
                }
            })
        };

        writer.join().expect("writer thread panicked");
        reader.join().expect("reader thread panicked");
    }
}
