// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::{HostDocument, PointerEvents};

/// Makes elements transparent to the pointer for as long as it lives.
///
/// Every element passed to [`disable`](Self::disable) gets its previous
/// setting back, in reverse order, when the guard is dropped. That includes
/// unwinding.
pub(crate) struct PointerEventsGuard<'a, D: HostDocument> {
    doc: &'a mut D,
    disabled: SmallVec<[(D::Node, PointerEvents); 8]>,
}

impl<'a, D: HostDocument> PointerEventsGuard<'a, D> {
    pub(crate) fn new(doc: &'a mut D) -> Self {
        Self {
            doc,
            disabled: SmallVec::new(),
        }
    }

    /// The document, with the elements disabled so far ignored by hit-testing.
    pub(crate) fn doc(&self) -> &D {
        self.doc
    }

    pub(crate) fn disable(&mut self, node: D::Node) {
        let previous = self.doc.pointer_events(node);
        self.doc.set_pointer_events(node, PointerEvents::None);
        self.disabled.push((node, previous));
    }
}

impl<D: HostDocument> Drop for PointerEventsGuard<'_, D> {
    fn drop(&mut self) {
        while let Some((node, previous)) = self.disabled.pop() {
            self.doc.set_pointer_events(node, previous);
        }
    }
}
