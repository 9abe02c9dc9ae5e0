// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the visibility pipeline.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! frame filter and the persistence codecs call as they work. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::id::InstanceId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Why the decoder dropped a unit of persisted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The line had no field separator.
    MissingSeparator,
    /// The leading field did not parse as an instance id.
    BadInstanceId,
    /// A field's path did not parse.
    BadPath,
    /// A field's state ordinal was out of range.
    BadOrdinal,
}

/// Emitted when a frame captures a snapshot of the store.
#[derive(Clone, Copy, Debug)]
pub struct SnapshotEvent {
    /// Managed instances copied.
    pub instances: usize,
    /// Total path entries copied.
    pub entries: usize,
}

/// Emitted after the filter finishes walking one managed instance.
#[derive(Clone, Copy, Debug)]
pub struct InstanceFilteredEvent {
    /// The instance that was filtered.
    pub instance: InstanceId,
    /// Components handed to the renderer.
    pub drawn: u32,
    /// Components skipped — by state, vacant slots, or unresolved
    /// references.
    pub skipped: u32,
}

/// Emitted when a traversal stops at the nesting-depth cap.
#[derive(Clone, Copy, Debug)]
pub struct DepthCutoffEvent {
    /// The instance being traversed.
    pub instance: InstanceId,
    /// Nesting level at which the walk stopped.
    pub depth: usize,
}

/// Emitted when the decoder skips a malformed line or field.
#[derive(Clone, Copy, Debug)]
pub struct DecodeSkipEvent {
    /// 1-based line number in the persisted text.
    pub line: usize,
    /// Why the unit was dropped.
    pub reason: SkipReason,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the visibility pipeline.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a frame captures a snapshot.
    fn on_snapshot(&mut self, e: &SnapshotEvent) {
        _ = e;
    }

    /// Called after the filter finishes walking a managed instance.
    fn on_instance_filtered(&mut self, e: &InstanceFilteredEvent) {
        _ = e;
    }

    /// Called when a traversal hits the nesting-depth cap.
    fn on_depth_cutoff(&mut self, e: &DepthCutoffEvent) {
        _ = e;
    }

    /// Called when the decoder skips a malformed line or field.
    fn on_decode_skip(&mut self, e: &DecodeSkipEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SnapshotEvent`].
    #[inline]
    pub fn snapshot(&mut self, e: &SnapshotEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_snapshot(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InstanceFilteredEvent`].
    #[inline]
    pub fn instance_filtered(&mut self, e: &InstanceFilteredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_instance_filtered(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DepthCutoffEvent`].
    #[inline]
    pub fn depth_cutoff(&mut self, e: &DepthCutoffEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_depth_cutoff(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DecodeSkipEvent`].
    #[inline]
    pub fn decode_skip(&mut self, e: &DecodeSkipEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_decode_skip(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
