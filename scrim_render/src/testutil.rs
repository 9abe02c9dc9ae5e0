// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mock host and recording renderer shared by the traversal tests.

use std::collections::{HashMap, HashSet};

use scrim_core::geom::{BoundingBox, Transform3d};
use scrim_core::host::{AssemblyHost, DrawStyle, InstanceRenderer};
use scrim_core::id::InstanceId;

/// One component slot of a mock definition.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Slot {
    /// A drawable leaf with local bounds.
    Leaf(BoundingBox),
    /// A nested assembly reference.
    Assembly {
        /// Index of the nested definition.
        def: usize,
        /// Local transform of the reference.
        local: Transform3d,
        /// Whole-subtree bounds in local space.
        bounds: BoundingBox,
    },
    /// An empty slot (`component_at` returns `None`).
    Vacant,
    /// Claims to be an assembly but does not resolve.
    Unresolved,
}

/// A unit cube, handy as leaf bounds.
pub(crate) const UNIT: BoundingBox = BoundingBox::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);

#[derive(Debug, Default)]
pub(crate) struct MockHost {
    defs: Vec<Vec<Slot>>,
    instances: HashMap<InstanceId, (usize, Transform3d)>,
    selected: HashSet<InstanceId>,
}

impl MockHost {
    pub(crate) fn add_definition(&mut self, slots: Vec<Slot>) -> usize {
        self.defs.push(slots);
        self.defs.len() - 1
    }

    pub(crate) fn add_instance(&mut self, id: InstanceId, def: usize, placement: Transform3d) {
        self.instances.insert(id, (def, placement));
    }

    pub(crate) fn select(&mut self, id: InstanceId) {
        self.selected.insert(id);
    }
}

impl AssemblyHost for MockHost {
    type Definition = usize;
    type Component = (usize, usize);

    fn component_count(&self, definition: usize) -> usize {
        self.defs[definition].len()
    }

    fn component_at(&self, definition: usize, index: usize) -> Option<(usize, usize)> {
        match self.defs.get(definition)?.get(index)? {
            Slot::Vacant => None,
            _ => Some((definition, index)),
        }
    }

    fn is_assembly(&self, (def, index): (usize, usize)) -> bool {
        matches!(
            self.defs[def][index],
            Slot::Assembly { .. } | Slot::Unresolved
        )
    }

    fn resolve(&self, (def, index): (usize, usize)) -> Option<(usize, Transform3d)> {
        match self.defs[def][index] {
            Slot::Assembly { def: nested, local, .. } => Some((nested, local)),
            _ => None,
        }
    }

    fn local_bounds(&self, (def, index): (usize, usize)) -> Option<BoundingBox> {
        match self.defs[def][index] {
            Slot::Leaf(bounds) | Slot::Assembly { bounds, .. } => Some(bounds),
            _ => None,
        }
    }

    fn instance(&self, id: InstanceId) -> Option<(usize, Transform3d)> {
        self.instances.get(&id).copied()
    }

    fn is_selected(&self, id: InstanceId) -> bool {
        self.selected.contains(&id)
    }
}

/// One call the filter made into the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DrawCall {
    pub(crate) component: (usize, usize),
    pub(crate) world: Transform3d,
    pub(crate) style: DrawStyle,
    pub(crate) subtree: bool,
}

/// Records every draw the filter emits.
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    /// The drawn component handles, in call order.
    pub(crate) fn components(&self) -> Vec<(usize, usize)> {
        self.calls.iter().map(|call| call.component).collect()
    }
}

impl InstanceRenderer<(usize, usize)> for RecordingRenderer {
    fn draw_component(&mut self, component: (usize, usize), world: Transform3d, style: DrawStyle) {
        self.calls.push(DrawCall {
            component,
            world,
            style,
            subtree: false,
        });
    }

    fn draw_subtree(&mut self, component: (usize, usize), world: Transform3d, style: DrawStyle) {
        self.calls.push(DrawCall {
            component,
            world,
            style,
            subtree: true,
        });
    }
}
