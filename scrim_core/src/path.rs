// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component paths: positional addresses into nested assembly definitions.

use core::fmt;
use core::str::FromStr;

use smallvec::SmallVec;
use thiserror::Error;

/// Inline capacity for path index storage. Deeper paths spill to the heap;
/// real assemblies rarely nest past a handful of levels.
const INLINE_DEPTH: usize = 8;

/// A component's positional address within nested assembly definitions.
///
/// Each element is the component's index inside its enclosing definition, so
/// `"1.0.2"` names component 2 of the sub-assembly at slot 0 of the
/// sub-assembly at slot 1 of the instance's own definition.
///
/// Ancestry is defined on the index sequence, not on the rendered text:
/// `"1"` is an ancestor of `"1.0"` and unrelated to `"10"`.
///
/// The depth-0 path (no indices) is a valid *query prefix* meaning "the whole
/// instance" but never addresses a component and has no text form.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentPath {
    indices: SmallVec<[u32; INLINE_DEPTH]>,
}

impl ComponentPath {
    /// The depth-0 query prefix.
    #[must_use]
    pub fn whole_instance() -> Self {
        Self::default()
    }

    /// Creates the path of a direct child of the instance definition.
    #[must_use]
    pub fn root(index: u32) -> Self {
        Self {
            indices: SmallVec::from_slice(&[index]),
        }
    }

    /// Creates a path from an index sequence.
    #[must_use]
    pub fn from_indices(indices: &[u32]) -> Self {
        Self {
            indices: SmallVec::from_slice(indices),
        }
    }

    /// Returns the index sequence.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the nesting depth (number of indices).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Returns whether this is the depth-0 query prefix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the path of this path's child at `index`.
    #[must_use]
    pub fn child(&self, index: u32) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    /// Returns the parent path, or `None` at depth 1 or below.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.indices.len() < 2 {
            return None;
        }
        Some(Self::from_indices(
            &self.indices[..self.indices.len() - 1],
        ))
    }

    /// Returns whether `self` is a strict ancestor of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.indices.len() < other.indices.len()
            && other.indices[..self.indices.len()] == *self.indices
    }

    /// Iterates the strict ancestors of this path, shortest first.
    ///
    /// `"1.0.2"` yields `"1"` then `"1.0"`. Depth-0 and depth-1 paths yield
    /// nothing.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> {
        (1..self.indices.len()).map(|depth| Self::from_indices(&self.indices[..depth]))
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentPath(\"{self}\")")
    }
}

/// Error parsing the dot-joined text form of a [`ComponentPath`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PathParseError {
    /// The input was empty.
    #[error("empty component path")]
    Empty,
    /// A dot-separated segment was not a decimal index.
    #[error("invalid path segment `{0}`")]
    Segment(String),
}

impl FromStr for ComponentPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathParseError::Empty);
        }
        let mut indices = SmallVec::new();
        for segment in s.split('.') {
            let index: u32 = segment
                .parse()
                .map_err(|_| PathParseError::Segment(segment.to_owned()))?;
            indices.push(index);
        }
        Ok(Self { indices })
    }
}
