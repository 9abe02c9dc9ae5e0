// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame render filtering for managed assembly instances.
//!
//! This crate consumes a [`VisibilitySnapshot`](scrim_core::store::VisibilitySnapshot)
//! captured at frame start and decides, per component of a (possibly nested)
//! assembly tree, whether to draw, skip, or draw translucent. It defines:
//!
//! - [`decide`] / [`DrawDecision`] — the pure per-component decision table
//! - [`FrameFilter`] — the frame facade: snapshot capture plus the draw,
//!   bounding-box, and selection-highlight traversals
//! - [`MAX_NESTING_DEPTH`] — the traversal's nesting cap
//!
//! The filter never fails: vacant slots, unresolved nested references, and
//! depth overflow all skip the affected branch and leave the rest of the
//! scene alone.

mod bounds;
mod decision;
mod filter;
mod frame;
#[cfg(test)]
mod testutil;

pub use decision::{DrawDecision, MAX_NESTING_DEPTH, decide};
pub use frame::FrameFilter;
