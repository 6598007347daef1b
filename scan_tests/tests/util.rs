// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll, Waker};
use std::sync::Arc;

use match_engine::{DictionaryStore, Entry, SearchEngine};
use scan_dev::{MemoryDocument, MemoryStore, NodeId, sample_entries};

/// An engine over the sample dictionary.
pub(crate) fn sample_engine() -> SearchEngine<MemoryStore> {
    SearchEngine::new(MemoryStore::new(sample_entries()))
}

/// A document holding a single paragraph of `text`. Returns the text node.
pub(crate) fn paragraph(text: &str) -> (MemoryDocument, NodeId) {
    let mut doc = MemoryDocument::new();
    let p = doc.block(doc.body());
    let node = doc.add_text(p, text);
    (doc, node)
}

/// Polls `future` once without a real waker.
pub(crate) fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    future.poll(&mut Context::from_waker(Waker::noop()))
}

/// Pending until opened.
struct Gate<'a>(&'a AtomicBool);

impl Future for Gate<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<()> {
        if self.0.load(Ordering::Acquire) {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

/// A [`MemoryStore`] whose queries all wait until [`open`](Self::open) is
/// called.
pub(crate) struct GatedStore {
    inner: MemoryStore,
    open: AtomicBool,
}

impl GatedStore {
    pub(crate) fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            inner: MemoryStore::new(entries),
            open: AtomicBool::new(false),
        }
    }

    pub(crate) fn open(&self) {
        self.open.store(true, Ordering::Release);
    }

    pub(crate) fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

impl DictionaryStore for GatedStore {
    type Error = core::convert::Infallible;

    async fn search_exact(
        &self,
        words: &[String],
        limit: usize,
    ) -> Result<Vec<Arc<Entry>>, Self::Error> {
        Gate(&self.open).await;
        self.inner.search_exact(words, limit).await
    }

    async fn search_prefix(
        &self,
        words: &[String],
        limit: usize,
    ) -> Result<Vec<Arc<Entry>>, Self::Error> {
        Gate(&self.open).await;
        self.inner.search_prefix(words, limit).await
    }
}
