// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON inspection for scrim diagnostics.
//!
//! This crate provides development-time helpers around
//! [`scrim_core::trace::TraceSink`] and the snapshot:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`dump::snapshot_to_json`] — a snapshot's full contents as a
//!   `serde_json::Value` for inspection and golden files.

pub mod dump;
pub mod pretty;
