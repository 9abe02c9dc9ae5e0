// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for scene-graph integration.
//!
//! Scrim owns no geometry and draws nothing itself. The host — the
//! application's document/scene-graph layer — provides two capabilities:
//!
//! - **Structure** — [`AssemblyHost`] answers what an assembly definition
//!   contains, whether a component is itself a nested assembly, and where a
//!   live instance sits. Handles are opaque `Copy` values the host assigns;
//!   scrim passes them through without interpreting them.
//!
//! - **Drawing** — [`InstanceRenderer`] receives the components the filter
//!   decided to draw, with an accumulated world transform and a
//!   [`DrawStyle`]. The host renders them on its own pipeline.
//!
//! # Frame loop pseudocode
//!
//! A typical host frame wires the pieces together like this:
//!
//! ```rust,ignore
//! fn on_frame(store: &VisibilityStore, host: &Doc, renderer: &mut Pipeline) {
//!     let frame = FrameFilter::begin(store, host, &mut Tracer::none());
//!     for id in host.visible_top_level_instances() {
//!         if !frame.draw_instance(renderer, &mut Tracer::none(), id) {
//!             renderer.draw_default(id); // unmanaged: host's own path
//!         }
//!     }
//!     frame.post_draw(renderer, &mut Tracer::none()); // selection highlight
//! }
//! ```
//!
//! Absent objects are never errors at this boundary: a `None` from any
//! lookup means "nothing to draw there" and the filter skips the branch.

use crate::geom::{BoundingBox, Transform3d};
use crate::id::InstanceId;

/// How the host should render a component handed back by the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawStyle {
    /// The host's normal rendering path.
    #[default]
    Normal,
    /// Reduced opacity; the host picks the actual alpha.
    Translucent,
    /// Selection-highlight treatment.
    Highlight,
}

/// Structure queries the filter needs from the host scene graph.
///
/// Components of a definition are stable-indexed: slot `i` keeps meaning the
/// same component for the lifetime of the definition, which is what makes
/// persisted paths meaningful across sessions.
pub trait AssemblyHost {
    /// Opaque handle to an assembly definition.
    type Definition: Copy;
    /// Opaque handle to one component slot of a definition.
    type Component: Copy;

    /// Number of direct components in a definition.
    fn component_count(&self, definition: Self::Definition) -> usize;

    /// The component at `index`, or `None` if the slot is vacant.
    fn component_at(&self, definition: Self::Definition, index: usize) -> Option<Self::Component>;

    /// Whether the component is itself a nested assembly instance.
    fn is_assembly(&self, component: Self::Component) -> bool;

    /// The nested definition a component refers to, plus the component's
    /// local transform. `None` when the reference does not resolve (the
    /// filter skips that branch).
    fn resolve(&self, component: Self::Component) -> Option<(Self::Definition, Transform3d)>;

    /// The component's axis-aligned box in its local space. For a nested
    /// assembly this covers the whole subtree.
    fn local_bounds(&self, component: Self::Component) -> Option<BoundingBox>;

    /// Looks up a live top-level instance: its definition and its placement
    /// transform. `None` when the id is not in the document.
    fn instance(&self, id: InstanceId) -> Option<(Self::Definition, Transform3d)>;

    /// Whether the instance is currently selected in the host document.
    fn is_selected(&self, id: InstanceId) -> bool;
}

/// Receives the components the filter decided to draw.
///
/// `C` is the host's component handle type ([`AssemblyHost::Component`]).
/// World transforms are fully accumulated; the renderer applies them as-is.
pub trait InstanceRenderer<C> {
    /// Draws a single component.
    fn draw_component(&mut self, component: C, world: Transform3d, style: DrawStyle);

    /// Draws a nested assembly and everything inside it through the host's
    /// normal path. The filter only emits this when nothing in the subtree
    /// carries an override.
    fn draw_subtree(&mut self, component: C, world: Transform3d, style: DrawStyle);
}
