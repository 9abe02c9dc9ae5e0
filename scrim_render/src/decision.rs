// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-component draw decision.

use scrim_core::state::ComponentState;

/// Deepest nesting level the traversals will walk before silently stopping.
/// Guards against cyclic or pathological definition graphs.
pub const MAX_NESTING_DEPTH: usize = 32;

/// What a traversal does with one component slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawDecision {
    /// Do not draw, do not recurse.
    Skip,
    /// Hand the component to the renderer on its normal path.
    DrawNormal,
    /// Hand the component to the renderer with reduced opacity.
    DrawTranslucent,
    /// Hand the whole subtree to the renderer in one call; nothing inside
    /// carries an override.
    DrawSubtree,
    /// Walk into the nested definition and decide per child.
    Recurse,
}

/// Decides the action for one component slot.
///
/// `covered` is the snapshot's descendant query for the slot's path: true
/// when the path itself or anything below it carries a non-default state.
/// Note that a `Transparent` assembly component is always covered (its own
/// path is in the index), so it lands on `Recurse` and transparency is only
/// ever applied at leaf paths.
#[must_use]
pub fn decide(state: ComponentState, covered: bool, is_leaf: bool) -> DrawDecision {
    if state.occludes_draw() {
        DrawDecision::Skip
    } else if is_leaf {
        if state == ComponentState::Transparent {
            DrawDecision::DrawTranslucent
        } else {
            DrawDecision::DrawNormal
        }
    } else if covered {
        DrawDecision::Recurse
    } else {
        DrawDecision::DrawSubtree
    }
}
