// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor-prefix index for descendant queries.

use rustc_hash::FxHashSet;

use crate::path::ComponentPath;

/// The set of every stored path and all of its strict ancestors.
///
/// Traversal asks "does anything at or below this path carry an override?"
/// once per component slot, so the answer has to be a single hash lookup.
/// Membership is on index *sequences*: storing `"1.0.2"` puts `"1"`,
/// `"1.0"`, and `"1.0.2"` in the set, and a query for `"10"` misses because
/// `[10]` is simply a different sequence than `[1]`.
///
/// Invariant: the set is exactly the union, over all stored paths, of each
/// path and its strict ancestors. [`rebuild`](Self::rebuild) restores it and
/// must run inside the same mutation that changed the stored paths.
#[derive(Clone, Debug, Default)]
pub struct PrefixIndex {
    prefixes: FxHashSet<ComponentPath>,
}

impl PrefixIndex {
    /// Rebuilds the set from the currently stored paths.
    pub fn rebuild<'a>(&mut self, paths: impl Iterator<Item = &'a ComponentPath>) {
        self.prefixes.clear();
        for path in paths {
            for ancestor in path.ancestors() {
                self.prefixes.insert(ancestor);
            }
            self.prefixes.insert(path.clone());
        }
    }

    /// Returns whether `prefix` itself or any of its descendants is stored.
    ///
    /// The depth-0 prefix covers the whole instance and answers whether
    /// anything at all is stored.
    #[must_use]
    pub fn covers(&self, prefix: &ComponentPath) -> bool {
        if prefix.is_empty() {
            return !self.prefixes.is_empty();
        }
        self.prefixes.contains(prefix)
    }

    /// Returns whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Number of distinct prefixes in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }
}
