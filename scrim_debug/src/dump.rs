// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON dumps of snapshot contents.
//!
//! [`snapshot_to_json`] renders a [`VisibilitySnapshot`] as a stable JSON
//! object — instance ids to `{path: state}` maps, everything sorted — for
//! logging, bug reports, and golden-file comparisons.

use serde_json::{Map, Value, json};

use scrim_core::state::ComponentState;
use scrim_core::store::VisibilitySnapshot;

fn state_name(state: ComponentState) -> &'static str {
    match state {
        ComponentState::Visible => "visible",
        ComponentState::Hidden => "hidden",
        ComponentState::Suppressed => "suppressed",
        ComponentState::Transparent => "transparent",
    }
}

/// Renders the snapshot as a JSON object keyed by instance id.
#[must_use]
pub fn snapshot_to_json(snapshot: &VisibilitySnapshot) -> Value {
    let mut doc = Map::new();
    for id in snapshot.managed_instances() {
        let mut entries: Vec<(String, ComponentState)> = snapshot
            .entries(id)
            .map(|(path, state)| (path.to_string(), state))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut object = Map::new();
        for (path, state) in entries {
            object.insert(path, json!(state_name(state)));
        }
        doc.insert(id.to_string(), Value::Object(object));
    }
    Value::Object(doc)
}
