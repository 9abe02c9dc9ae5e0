// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-wide visibility blob.
//!
//! One newline-terminated line per managed instance:
//!
//! ```text
//! <instance-uuid>|<path>:<ordinal>|<path>:<ordinal>|...
//! ```
//!
//! with state ordinals in `[0, 3]`. Instances and paths are written sorted,
//! so the same store always encodes to the same text. An instance with zero
//! non-default paths is omitted entirely.
//!
//! Decoding skips rather than fails: a line without a field separator, a
//! line whose leading field is not a UUID, and a field with a malformed path
//! or unknown ordinal are each dropped and counted, leaving every valid unit
//! in the same input intact.

use core::fmt::Write as _;

use scrim_core::id::InstanceId;
use scrim_core::path::ComponentPath;
use scrim_core::state::ComponentState;
use scrim_core::store::{VisibilitySnapshot, VisibilityStore};
use scrim_core::trace::{DecodeSkipEvent, SkipReason, Tracer};

/// What a [`decode_document`] call loaded and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Instances that contributed at least one entry.
    pub instances: usize,
    /// Path entries applied to the store.
    pub entries: usize,
    /// Whole lines dropped (no separator, bad instance id).
    pub skipped_lines: usize,
    /// Individual fields dropped (bad path, unknown ordinal).
    pub skipped_fields: usize,
}

/// Encodes the store's full contents. Takes one snapshot under the store's
/// mutex and encodes that.
#[must_use]
pub fn encode_document(store: &VisibilityStore) -> String {
    encode_snapshot(&store.snapshot())
}

/// Encodes an already-captured snapshot.
#[must_use]
pub fn encode_snapshot(snapshot: &VisibilitySnapshot) -> String {
    let mut out = String::new();
    for id in snapshot.managed_instances() {
        let mut entries: Vec<(ComponentPath, ComponentState)> = snapshot
            .entries(id)
            .map(|(path, state)| (path.clone(), state))
            .collect();
        if entries.is_empty() {
            continue;
        }
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        let _ = write!(out, "{id}");
        for (path, state) in entries {
            let _ = write!(out, "|{path}:{}", state.ordinal());
        }
        out.push('\n');
    }
    out
}

/// Loads a document blob into the store, line by line, skipping malformed
/// units. Valid entries from valid lines always land, whatever surrounds
/// them.
pub fn decode_document(
    text: &str,
    store: &VisibilityStore,
    tracer: &mut Tracer<'_>,
) -> DecodeSummary {
    let mut summary = DecodeSummary::default();
    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('|');
        let head = fields.next().unwrap_or_default().trim();
        if !line.contains('|') {
            summary.skipped_lines += 1;
            tracer.decode_skip(&DecodeSkipEvent {
                line: line_no,
                reason: SkipReason::MissingSeparator,
            });
            continue;
        }
        let Ok(id) = head.parse::<InstanceId>() else {
            summary.skipped_lines += 1;
            tracer.decode_skip(&DecodeSkipEvent {
                line: line_no,
                reason: SkipReason::BadInstanceId,
            });
            continue;
        };
        let mut loaded_any = false;
        for field in fields {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let Some((path_text, ordinal_text)) = field.rsplit_once(':') else {
                summary.skipped_fields += 1;
                tracer.decode_skip(&DecodeSkipEvent {
                    line: line_no,
                    reason: SkipReason::BadPath,
                });
                continue;
            };
            let Ok(path) = path_text.trim().parse::<ComponentPath>() else {
                summary.skipped_fields += 1;
                tracer.decode_skip(&DecodeSkipEvent {
                    line: line_no,
                    reason: SkipReason::BadPath,
                });
                continue;
            };
            let Some(state) = ordinal_text
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(ComponentState::from_ordinal)
            else {
                summary.skipped_fields += 1;
                tracer.decode_skip(&DecodeSkipEvent {
                    line: line_no,
                    reason: SkipReason::BadOrdinal,
                });
                continue;
            };
            if state.is_default() {
                // A default-state field describes exactly "not stored".
                continue;
            }
            store.set_state(id, path, state);
            summary.entries += 1;
            loaded_any = true;
        }
        if loaded_any {
            summary.instances += 1;
        }
    }
    summary
}
