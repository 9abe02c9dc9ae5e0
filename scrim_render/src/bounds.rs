// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filtered bounding-box accumulation.
//!
//! Same recursive shape as the draw walk, different exclusion rule:
//! Suppressed components leave the box entirely, Hidden components still
//! contribute. Hidden is a visual override; Suppressed is a structural
//! exclusion, and the box is structure.
//!
//! A Hidden nested assembly is therefore still descended when something
//! below it carries an override, so Suppressed components inside it stay
//! excluded from the box.

use scrim_core::geom::{BoundingBox, Transform3d};
use scrim_core::host::AssemblyHost;
use scrim_core::id::InstanceId;
use scrim_core::path::ComponentPath;
use scrim_core::store::VisibilitySnapshot;

/// Accumulates the filtered world-space box of one top-level instance.
///
/// Returns [`BoundingBox::EMPTY`] when the instance does not resolve or
/// nothing contributes.
pub(crate) fn instance_bounds<H: AssemblyHost>(
    snapshot: &VisibilitySnapshot,
    host: &H,
    id: InstanceId,
    depth_limit: usize,
) -> BoundingBox {
    let mut bounds = BoundingBox::EMPTY;
    if let Some((definition, placement)) = host.instance(id) {
        accumulate(
            snapshot,
            host,
            id,
            definition,
            placement,
            &ComponentPath::whole_instance(),
            0,
            depth_limit,
            &mut bounds,
        );
    }
    bounds
}

fn accumulate<H: AssemblyHost>(
    snapshot: &VisibilitySnapshot,
    host: &H,
    id: InstanceId,
    definition: H::Definition,
    world: Transform3d,
    prefix: &ComponentPath,
    depth: usize,
    depth_limit: usize,
    bounds: &mut BoundingBox,
) {
    for index in 0..host.component_count(definition) {
        let Ok(slot) = u32::try_from(index) else {
            break;
        };
        let Some(component) = host.component_at(definition, index) else {
            continue;
        };
        let path = prefix.child(slot);
        if snapshot.state(id, &path).occludes_bounds() {
            continue;
        }
        if host.is_assembly(component) && snapshot.has_hidden_descendants(id, &path) {
            if depth >= depth_limit {
                continue;
            }
            if let Some((nested, local)) = host.resolve(component) {
                accumulate(
                    snapshot,
                    host,
                    id,
                    nested,
                    world * local,
                    &path,
                    depth + 1,
                    depth_limit,
                    bounds,
                );
            }
        } else if let Some(local) = host.local_bounds(component) {
            bounds.union(&local.transformed(&world));
        }
    }
}
