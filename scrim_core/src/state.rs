// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-path visibility overrides.

/// The visibility override stored for one component path.
///
/// `Visible` is the implicit default for every path absent from the store and
/// is never materialized. The other three states differ in what they exclude:
///
/// - `Hidden` is a visual override: the component is not drawn but still
///   contributes to bounding boxes.
/// - `Suppressed` is a structural exclusion: the component leaves drawing
///   and bounding boxes both.
/// - `Transparent` draws the component with reduced opacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComponentState {
    /// Drawn normally; the implicit default.
    #[default]
    Visible,
    /// Excluded from drawing; still contributes to bounding boxes.
    Hidden,
    /// Excluded from drawing and from bounding boxes.
    Suppressed,
    /// Drawn with reduced opacity.
    Transparent,
}

impl ComponentState {
    /// Stable wire ordinal used by the document codec.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Visible => 0,
            Self::Hidden => 1,
            Self::Suppressed => 2,
            Self::Transparent => 3,
        }
    }

    /// Inverse of [`ordinal`](Self::ordinal). Returns `None` for ordinals
    /// this build does not know, which decoders drop rather than reject.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Visible),
            1 => Some(Self::Hidden),
            2 => Some(Self::Suppressed),
            3 => Some(Self::Transparent),
            _ => None,
        }
    }

    /// Returns whether this is the implicit default state.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Returns whether the component is excluded from normal drawing.
    #[must_use]
    pub const fn occludes_draw(self) -> bool {
        matches!(self, Self::Hidden | Self::Suppressed)
    }

    /// Returns whether the component is excluded from bounding boxes.
    #[must_use]
    pub const fn occludes_bounds(self) -> bool {
        matches!(self, Self::Suppressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_round_trip() {
        for state in [
            ComponentState::Visible,
            ComponentState::Hidden,
            ComponentState::Suppressed,
            ComponentState::Transparent,
        ] {
            assert_eq!(ComponentState::from_ordinal(state.ordinal()), Some(state));
        }
    }

    #[test]
    fn unknown_ordinals_are_none() {
        assert_eq!(ComponentState::from_ordinal(4), None);
        assert_eq!(ComponentState::from_ordinal(255), None);
    }

    #[test]
    fn exclusion_predicates() {
        assert!(ComponentState::Hidden.occludes_draw());
        assert!(!ComponentState::Hidden.occludes_bounds());
        assert!(ComponentState::Suppressed.occludes_draw());
        assert!(ComponentState::Suppressed.occludes_bounds());
        assert!(!ComponentState::Transparent.occludes_draw());
        assert!(!ComponentState::Visible.occludes_draw());
    }
}
