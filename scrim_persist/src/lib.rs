// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistence for the visibility store.
//!
//! The store is the runtime source of truth; what this crate reads and
//! writes are save-time snapshots of it and load-time hydration inputs:
//!
//! - [`encode_document`] / [`decode_document`] — the document-wide text
//!   blob, one line per managed instance with full state granularity.
//! - [`ObjectRecord`] — the legacy per-object record carrying only an
//!   instance's Hidden/Suppressed path set. Lossy by design.
//! - [`DocumentLifecycle`] — the four host document events (open, save,
//!   close, object delete) mapped onto store operations.
//!
//! Decoding follows skip semantics throughout: a malformed line or field is
//! dropped and counted in the [`DecodeSummary`], never turned into an error.
//! A blob written by a newer build with more states loads fine here — the
//! unknown ordinals fall out, everything else lands.

mod document;
mod object;
mod session;

pub use document::{DecodeSummary, decode_document, encode_document, encode_snapshot};
pub use object::ObjectRecord;
pub use session::DocumentLifecycle;
