// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame facade over the snapshot.

use core::fmt;

use scrim_core::geom::BoundingBox;
use scrim_core::host::{AssemblyHost, InstanceRenderer};
use scrim_core::id::InstanceId;
use scrim_core::store::{VisibilitySnapshot, VisibilityStore};
use scrim_core::trace::{SnapshotEvent, Tracer};

use crate::bounds;
use crate::decision::MAX_NESTING_DEPTH;
use crate::filter;

/// One frame's view of the visibility state.
///
/// [`begin`](Self::begin) copies the store exactly once, under the store's
/// mutex; every traversal the frame runs afterwards — draw, bounding box,
/// selection highlight — reads that copy without locking. Create one per
/// frame callback and drop it at frame end. Mutations that land while the
/// frame is in flight appear in the next frame's filter.
///
/// ```rust,ignore
/// let frame = FrameFilter::begin(&store, &doc, &mut tracer);
/// for id in doc.visible_top_level_instances() {
///     if !frame.draw_instance(&mut pipeline, &mut tracer, id) {
///         pipeline.draw_default(id);
///     }
/// }
/// let box_for_zoom = frame.instance_bounds(zoom_target);
/// frame.post_draw(&mut pipeline, &mut tracer);
/// ```
pub struct FrameFilter<'a, H: AssemblyHost> {
    host: &'a H,
    snapshot: VisibilitySnapshot,
    depth_limit: usize,
}

impl<H: AssemblyHost> fmt::Debug for FrameFilter<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameFilter")
            .field("snapshot", &self.snapshot)
            .field("depth_limit", &self.depth_limit)
            .finish_non_exhaustive()
    }
}

impl<'a, H: AssemblyHost> FrameFilter<'a, H> {
    /// Captures the store under its mutex and starts a frame.
    #[must_use]
    pub fn begin(store: &VisibilityStore, host: &'a H, tracer: &mut Tracer<'_>) -> Self {
        let snapshot = store.snapshot();
        tracer.snapshot(&SnapshotEvent {
            instances: snapshot.instance_count(),
            entries: snapshot.entry_count(),
        });
        Self::from_snapshot(snapshot, host)
    }

    /// Wraps an already-captured snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: VisibilitySnapshot, host: &'a H) -> Self {
        Self {
            host,
            snapshot,
            depth_limit: MAX_NESTING_DEPTH,
        }
    }

    /// Replaces the nesting-depth cap (default [`MAX_NESTING_DEPTH`]).
    #[must_use]
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// The frame's captured state.
    #[must_use]
    pub fn snapshot(&self) -> &VisibilitySnapshot {
        &self.snapshot
    }

    /// Draws one top-level instance through the filter.
    ///
    /// Returns `false` for unmanaged instances — draw those on the host's
    /// default path. Returns `true` when the filter took the instance over;
    /// the host must then suppress its own draw of it.
    pub fn draw_instance<R: InstanceRenderer<H::Component>>(
        &self,
        renderer: &mut R,
        tracer: &mut Tracer<'_>,
        id: InstanceId,
    ) -> bool {
        filter::draw_instance(
            &self.snapshot,
            self.host,
            renderer,
            tracer,
            id,
            self.depth_limit,
        )
    }

    /// The filtered world-space box of one top-level instance: Suppressed
    /// components excluded, Hidden components included.
    #[must_use]
    pub fn instance_bounds(&self, id: InstanceId) -> BoundingBox {
        bounds::instance_bounds(&self.snapshot, self.host, id, self.depth_limit)
    }

    /// Selection-highlight pass, run after the main draw: re-draws the
    /// visible components of every managed instance the host reports
    /// selected.
    pub fn post_draw<R: InstanceRenderer<H::Component>>(
        &self,
        renderer: &mut R,
        tracer: &mut Tracer<'_>,
    ) {
        for id in self.snapshot.managed_instances() {
            if self.host.is_selected(id) {
                filter::highlight_instance(
                    &self.snapshot,
                    self.host,
                    renderer,
                    tracer,
                    id,
                    self.depth_limit,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scrim_core::geom::Transform3d;
    use scrim_core::host::DrawStyle;
    use scrim_core::path::ComponentPath;
    use scrim_core::state::ComponentState;

    use crate::testutil::{MockHost, RecordingRenderer, Slot, UNIT};

    use super::*;

    fn path(text: &str) -> ComponentPath {
        text.parse().expect("valid path")
    }

    fn id(raw: u128) -> InstanceId {
        InstanceId::from_u128(raw)
    }

    /// A 2-level instance: top has leaf "0" and nested assembly "1" with two
    /// leaves "1.0", "1.1".
    fn scenario() -> (MockHost, VisibilityStore, InstanceId) {
        let mut host = MockHost::default();
        let sub = host.add_definition(vec![Slot::Leaf(UNIT), Slot::Leaf(UNIT)]);
        let top = host.add_definition(vec![
            Slot::Leaf(UNIT),
            Slot::Assembly {
                def: sub,
                local: Transform3d::from_translation(5.0, 0.0, 0.0),
                bounds: UNIT,
            },
        ]);
        let x = id(1);
        host.add_instance(x, top, Transform3d::IDENTITY);

        let store = VisibilityStore::new();
        store.set_state(x, path("0"), ComponentState::Suppressed);
        store.set_state(x, path("1.0"), ComponentState::Hidden);
        (host, store, x)
    }

    #[test]
    fn suppressed_and_hidden_split_draw_from_bounds() {
        let (host, store, x) = scenario();
        let frame = FrameFilter::begin(&store, &host, &mut Tracer::none());

        let mut renderer = RecordingRenderer::default();
        assert!(frame.draw_instance(&mut renderer, &mut Tracer::none(), x));
        // Only "1.1" survives the draw pass.
        assert_eq!(renderer.components(), [(0, 1)]);

        let bounds = frame.instance_bounds(x);
        // "0" is structurally gone; "1.0" (Hidden) and "1.1" both frame.
        assert_eq!(bounds.min, [5.0, 0.0, 0.0]);
        assert_eq!(bounds.max, [6.0, 1.0, 1.0]);
    }

    #[test]
    fn frame_ignores_mutations_after_begin() {
        let (host, store, x) = scenario();
        let frame = FrameFilter::begin(&store, &host, &mut Tracer::none());

        // Mutations after capture belong to the next frame.
        store.reset_instance(x);

        let mut renderer = RecordingRenderer::default();
        assert!(
            frame.draw_instance(&mut renderer, &mut Tracer::none(), x),
            "the captured frame still sees the instance as managed"
        );
        assert_eq!(renderer.components(), [(0, 1)]);

        let next = FrameFilter::begin(&store, &host, &mut Tracer::none());
        assert!(!next.draw_instance(&mut renderer, &mut Tracer::none(), x));
    }

    #[test]
    fn post_draw_highlights_selected_managed_instances_only() {
        let (mut host, store, x) = scenario();
        // A second managed instance that is not selected.
        let y = id(2);
        let def = host.instance(x).expect("instance exists").0;
        host.add_instance(y, def, Transform3d::IDENTITY);
        store.hide(y, path("0"));
        host.select(x);

        let frame = FrameFilter::begin(&store, &host, &mut Tracer::none());
        let mut renderer = RecordingRenderer::default();
        frame.post_draw(&mut renderer, &mut Tracer::none());

        assert!(!renderer.calls.is_empty());
        assert!(
            renderer.calls.iter().all(|c| c.style == DrawStyle::Highlight),
            "post-draw only emits highlight treatment"
        );
        // Only x's components: y is managed but unselected.
        assert_eq!(renderer.components(), [(0, 1)]);
    }

    #[test]
    fn depth_limit_is_adjustable() {
        let (host, store, x) = scenario();
        let frame =
            FrameFilter::from_snapshot(store.snapshot(), &host).with_depth_limit(0);
        let mut renderer = RecordingRenderer::default();
        frame.draw_instance(&mut renderer, &mut Tracer::none(), x);
        // With no recursion budget the covered nested assembly is cut off.
        assert!(renderer.calls.is_empty());
    }
}
