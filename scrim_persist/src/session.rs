// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document lifecycle wiring.
//!
//! The host's document events map onto store operations:
//!
//! | host event        | effect                                          |
//! |-------------------|-------------------------------------------------|
//! | document opened   | decode the persisted blob into the store        |
//! | document saving   | encode the store into a fresh blob              |
//! | document closed   | clear the store                                 |
//! | object deleted    | reset that instance                             |
//!
//! Every hook is total: a malformed blob degrades to skip counts in the
//! [`DecodeSummary`], a delete of an unmanaged object is a no-op, and none
//! of them can fail. Hooks arriving out of order (e.g. a delete after close)
//! just find nothing to do.

use scrim_core::id::InstanceId;
use scrim_core::store::VisibilityStore;
use scrim_core::trace::Tracer;

use crate::document::{DecodeSummary, decode_document, encode_document};

/// Borrows the session's store and applies document events to it.
///
/// The host session controller owns the store; this type is a thin view the
/// host's event watcher holds for the document's lifetime.
#[derive(Debug)]
pub struct DocumentLifecycle<'a> {
    store: &'a VisibilityStore,
}

impl<'a> DocumentLifecycle<'a> {
    /// Wraps the session's store.
    #[must_use]
    pub fn new(store: &'a VisibilityStore) -> Self {
        Self { store }
    }

    /// Hydrates the store from the blob persisted in the opened document.
    pub fn document_opened(&self, blob: &str, tracer: &mut Tracer<'_>) -> DecodeSummary {
        decode_document(blob, self.store, tracer)
    }

    /// Produces the blob to persist with the document being saved.
    #[must_use]
    pub fn document_saving(&self) -> String {
        encode_document(self.store)
    }

    /// Drops all visibility state with the closing document.
    pub fn document_closed(&self) {
        self.store.clear_all();
    }

    /// Forgets a deleted object's overrides. Returns whether the instance
    /// was managed.
    pub fn object_deleted(&self, id: InstanceId) -> bool {
        self.store.reset_instance(id)
    }
}
