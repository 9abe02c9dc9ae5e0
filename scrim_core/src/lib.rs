// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core data model for per-instance assembly component visibility.
//!
//! `scrim_core` tracks, for each assembly instance in a host document, which
//! sub-components are hidden, suppressed, or rendered translucent, and hands
//! that state to a per-frame render filter as an immutable snapshot.
//!
//! # Architecture
//!
//! Two contexts touch the data: a command/UI context that mutates overrides,
//! and a render context that reads them many times per frame, possibly from
//! another thread. One mutex serializes the store; a copy taken under that
//! mutex bridges to the render side:
//!
//! ```text
//!   command/UI context                     render context
//!        │                                      │
//!        ▼                                      ▼
//!   VisibilityStore::set_state   ──►   VisibilityStore::snapshot()
//!        │        (mutex held per call)        │  (copy under mutex)
//!        ▼                                      ▼
//!   InstanceRecord + PrefixIndex       VisibilitySnapshot
//!     (rebuilt together)                 (lock-free for the whole frame:
//!                                         draw, bounds, highlight passes)
//! ```
//!
//! **[`path`]** — [`ComponentPath`](path::ComponentPath): positional address
//! of a component inside nested assembly definitions, with sequence-based
//! ancestry (`"1"` is an ancestor of `"1.0"`, never of `"10"`).
//!
//! **[`state`]** — [`ComponentState`](state::ComponentState): the per-path
//! override. `Visible` is the implicit default and is never stored.
//!
//! **[`store`]** — the mutex-guarded [`VisibilityStore`](store::VisibilityStore),
//! per-instance [`InstanceRecord`](store::InstanceRecord)s with their derived
//! [`PrefixIndex`](store::PrefixIndex), and the immutable
//! [`VisibilitySnapshot`](store::VisibilitySnapshot).
//!
//! **[`host`]** — the capability contract between this crate and the host
//! scene graph: [`AssemblyHost`](host::AssemblyHost) for structure queries,
//! [`InstanceRenderer`](host::InstanceRenderer) for delegated drawing.
//!
//! **[`geom`]** — minimal [`Transform3d`](geom::Transform3d) and
//! [`BoundingBox`](geom::BoundingBox) types that pass through the traversal.
//!
//! **[`id`]** — [`InstanceId`](id::InstanceId), the stable 128-bit key the
//! host uses for assembly instances.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! diagnostics, with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): enables `Tracer` method bodies (one
//!   branch per call site).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod geom;
pub mod host;
pub mod id;
pub mod path;
pub mod state;
pub mod store;
pub mod trace;
