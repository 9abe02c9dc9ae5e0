// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filtered drawing of managed instances.
//!
//! The walk mirrors the host's own instance drawing, minus the overridden
//! components: children are visited by slot index, the path grows
//! `parent.child` at each level, and world transforms accumulate
//! parent-first. Recursion happens only where the snapshot's prefix index
//! reports an override somewhere below — an untouched subtree goes back to
//! the host as a single `draw_subtree` call.
//!
//! Nothing here returns an error. Vacant slots, unresolved nested
//! references, and the nesting cap each skip their branch; a malformed
//! instance must never take the rest of the scene down with it.

use scrim_core::geom::Transform3d;
use scrim_core::host::{AssemblyHost, DrawStyle, InstanceRenderer};
use scrim_core::id::InstanceId;
use scrim_core::path::ComponentPath;
use scrim_core::store::VisibilitySnapshot;
use scrim_core::trace::{DepthCutoffEvent, InstanceFilteredEvent, Tracer};

use crate::decision::{DrawDecision, decide};

/// Which treatment a walk applies to the components it draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WalkMode {
    /// Main draw pass: normal and translucent styles.
    Draw,
    /// Selection pass: everything drawn gets the highlight style.
    Highlight,
}

/// Draws one top-level instance through the filter.
///
/// Returns `false` for unmanaged instances — the host draws those itself.
/// Returns `true` for managed instances, in which case the host must
/// suppress its own draw; this holds even when the instance no longer
/// resolves in the document (nothing is drawn, but the default draw stays
/// suppressed).
pub(crate) fn draw_instance<H, R>(
    snapshot: &VisibilitySnapshot,
    host: &H,
    renderer: &mut R,
    tracer: &mut Tracer<'_>,
    id: InstanceId,
    depth_limit: usize,
) -> bool
where
    H: AssemblyHost,
    R: InstanceRenderer<H::Component>,
{
    if !snapshot.is_managed(id) {
        return false;
    }
    let mut walk = Walk {
        snapshot,
        host,
        id,
        mode: WalkMode::Draw,
        depth_limit,
        drawn: 0,
        skipped: 0,
    };
    if let Some((definition, placement)) = host.instance(id) {
        walk.children(
            renderer,
            tracer,
            definition,
            placement,
            &ComponentPath::whole_instance(),
            0,
        );
    }
    tracer.instance_filtered(&InstanceFilteredEvent {
        instance: id,
        drawn: walk.drawn,
        skipped: walk.skipped,
    });
    true
}

/// Re-draws a managed instance's visible components with highlight
/// treatment. Same skip/recurse rules as the draw pass, without the
/// transparency branch.
pub(crate) fn highlight_instance<H, R>(
    snapshot: &VisibilitySnapshot,
    host: &H,
    renderer: &mut R,
    tracer: &mut Tracer<'_>,
    id: InstanceId,
    depth_limit: usize,
) where
    H: AssemblyHost,
    R: InstanceRenderer<H::Component>,
{
    if !snapshot.is_managed(id) {
        return;
    }
    let Some((definition, placement)) = host.instance(id) else {
        return;
    };
    let mut walk = Walk {
        snapshot,
        host,
        id,
        mode: WalkMode::Highlight,
        depth_limit,
        drawn: 0,
        skipped: 0,
    };
    walk.children(
        renderer,
        tracer,
        definition,
        placement,
        &ComponentPath::whole_instance(),
        0,
    );
}

struct Walk<'a, H: AssemblyHost> {
    snapshot: &'a VisibilitySnapshot,
    host: &'a H,
    id: InstanceId,
    mode: WalkMode,
    depth_limit: usize,
    drawn: u32,
    skipped: u32,
}

impl<H: AssemblyHost> Walk<'_, H> {
    fn children<R: InstanceRenderer<H::Component>>(
        &mut self,
        renderer: &mut R,
        tracer: &mut Tracer<'_>,
        definition: H::Definition,
        world: Transform3d,
        prefix: &ComponentPath,
        depth: usize,
    ) {
        for index in 0..self.host.component_count(definition) {
            let Ok(slot) = u32::try_from(index) else {
                break;
            };
            let Some(component) = self.host.component_at(definition, index) else {
                self.skipped += 1;
                continue;
            };
            let path = prefix.child(slot);
            let state = self.snapshot.state(self.id, &path);
            let covered = self.snapshot.has_hidden_descendants(self.id, &path);
            let is_leaf = !self.host.is_assembly(component);
            match decide(state, covered, is_leaf) {
                DrawDecision::Skip => self.skipped += 1,
                DrawDecision::DrawNormal => {
                    renderer.draw_component(component, world, self.style(DrawStyle::Normal));
                    self.drawn += 1;
                }
                DrawDecision::DrawTranslucent => {
                    renderer.draw_component(component, world, self.style(DrawStyle::Translucent));
                    self.drawn += 1;
                }
                DrawDecision::DrawSubtree => {
                    renderer.draw_subtree(component, world, self.style(DrawStyle::Normal));
                    self.drawn += 1;
                }
                DrawDecision::Recurse => {
                    if depth >= self.depth_limit {
                        tracer.depth_cutoff(&DepthCutoffEvent {
                            instance: self.id,
                            depth,
                        });
                        self.skipped += 1;
                    } else if let Some((nested, local)) = self.host.resolve(component) {
                        self.children(renderer, tracer, nested, world * local, &path, depth + 1);
                    } else {
                        self.skipped += 1;
                    }
                }
            }
        }
    }

    fn style(&self, style: DrawStyle) -> DrawStyle {
        match self.mode {
            WalkMode::Draw => style,
            WalkMode::Highlight => DrawStyle::Highlight,
        }
    }
}
