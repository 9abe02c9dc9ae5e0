// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object visibility records.
//!
//! The legacy persistence path attaches a small record to each managed
//! instance object instead of writing one document-wide blob. The record
//! carries only the instance's Hidden/Suppressed path set — no state
//! granularity — so Suppressed and Transparent distinctions are lost on the
//! way back in. Callers choosing this codec accept that loss.

use core::fmt::Write as _;

use scrim_core::id::InstanceId;
use scrim_core::path::ComponentPath;
use scrim_core::store::VisibilityStore;

/// Version tag written as the record's first line. Readers drop records
/// with versions they do not know.
const RECORD_VERSION: u32 = 1;

/// The Hidden/Suppressed path set of a single instance, in the form the
/// host attaches to that object's persisted record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectRecord {
    paths: Vec<ComponentPath>,
}

impl ObjectRecord {
    /// Creates a record from a path set. Paths are sorted and deduplicated.
    #[must_use]
    pub fn new(mut paths: Vec<ComponentPath>) -> Self {
        paths.sort_unstable();
        paths.dedup();
        Self { paths }
    }

    /// Captures the instance's current draw-excluded paths, or `None` when
    /// there are none — an empty record is never worth attaching.
    #[must_use]
    pub fn capture(store: &VisibilityStore, id: InstanceId) -> Option<Self> {
        let paths = store.hidden_paths(id);
        if paths.is_empty() {
            None
        } else {
            Some(Self::new(paths))
        }
    }

    /// Hydrates the store from this record: resets the instance, then
    /// re-hides every recorded path.
    pub fn apply(&self, store: &VisibilityStore, id: InstanceId) {
        store.reset_instance(id);
        for path in &self.paths {
            store.hide(id, path.clone());
        }
    }

    /// The recorded paths, sorted.
    #[must_use]
    pub fn paths(&self) -> &[ComponentPath] {
        &self.paths
    }

    /// Returns whether the record carries no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Renders the record as text: a version line, then one path per line.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "v{RECORD_VERSION}");
        for path in &self.paths {
            let _ = writeln!(out, "{path}");
        }
        out
    }

    /// Parses a record. Returns `None` when the version line is missing or
    /// unknown; malformed path lines inside a known version are skipped.
    #[must_use]
    pub fn decode(text: &str) -> Option<Self> {
        let mut lines = text.lines();
        let version: u32 = lines.next()?.trim().strip_prefix('v')?.parse().ok()?;
        if version != RECORD_VERSION {
            return None;
        }
        let paths = lines
            .filter_map(|line| {
                let line = line.trim();
                if line.is_empty() {
                    None
                } else {
                    line.parse::<ComponentPath>().ok()
                }
            })
            .collect();
        Some(Self::new(paths))
    }
}

#[cfg(test)]
mod tests {
    use scrim_core::state::ComponentState;

    use super::*;

    fn path(text: &str) -> ComponentPath {
        text.parse().expect("valid path")
    }

    fn id(raw: u128) -> InstanceId {
        InstanceId::from_u128(raw)
    }

    #[test]
    fn capture_takes_draw_excluded_paths_only() {
        let store = VisibilityStore::new();
        let x = id(1);
        store.set_state(x, path("0"), ComponentState::Hidden);
        store.set_state(x, path("1.0"), ComponentState::Suppressed);
        store.set_state(x, path("2"), ComponentState::Transparent);

        let record = ObjectRecord::capture(&store, x).expect("non-empty record");
        let texts: Vec<String> = record.paths().iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["0", "1.0"], "Transparent is not part of the set");
    }

    #[test]
    fn capture_of_unmanaged_instance_is_none() {
        let store = VisibilityStore::new();
        assert_eq!(ObjectRecord::capture(&store, id(1)), None);
    }

    #[test]
    fn apply_resets_then_rehides() {
        let store = VisibilityStore::new();
        let x = id(1);
        // Pre-existing state that must not survive hydration.
        store.set_state(x, path("9"), ComponentState::Transparent);

        let record = ObjectRecord::new(vec![path("0"), path("1.0")]);
        record.apply(&store, x);

        assert_eq!(store.state(x, &path("0")), ComponentState::Hidden);
        assert_eq!(store.state(x, &path("1.0")), ComponentState::Hidden);
        assert_eq!(store.state(x, &path("9")), ComponentState::Visible);
        assert_eq!(store.hidden_count(x), 2);
    }

    #[test]
    fn round_trip_collapses_to_hidden() {
        let store = VisibilityStore::new();
        let x = id(1);
        store.set_state(x, path("0"), ComponentState::Suppressed);
        store.set_state(x, path("1"), ComponentState::Hidden);

        let record = ObjectRecord::capture(&store, x).expect("non-empty record");
        let decoded = ObjectRecord::decode(&record.encode()).expect("known version");
        assert_eq!(decoded, record);

        let fresh = VisibilityStore::new();
        decoded.apply(&fresh, x);
        // Lossy by design: Suppressed comes back as Hidden.
        assert_eq!(fresh.state(x, &path("0")), ComponentState::Hidden);
        assert_eq!(fresh.state(x, &path("1")), ComponentState::Hidden);
    }

    #[test]
    fn unknown_version_is_dropped_whole() {
        assert_eq!(ObjectRecord::decode("v2\n0\n"), None);
        assert_eq!(ObjectRecord::decode("0\n1\n"), None, "missing version line");
        assert_eq!(ObjectRecord::decode(""), None);
    }

    #[test]
    fn malformed_path_lines_skipped() {
        let decoded = ObjectRecord::decode("v1\n0\nnot-a-path\n1.0\n").expect("known version");
        let texts: Vec<String> = decoded.paths().iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["0", "1.0"]);
    }
}
