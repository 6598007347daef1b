// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Cancelled;

/// Why a search produced no outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<E> {
    /// The search was superseded or explicitly cancelled.
    Cancelled,
    /// The dictionary store failed.
    Store(E),
}

impl<E> SearchError<E> {
    /// Returns `true` for [`SearchError::Cancelled`], which callers usually
    /// drop without reporting.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl<E> From<Cancelled> for SearchError<E> {
    fn from(_: Cancelled) -> Self {
        Self::Cancelled
    }
}

impl<E: fmt::Display> fmt::Display for SearchError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("search was cancelled"),
            Self::Store(err) => write!(f, "dictionary store failed: {err}"),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for SearchError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Store(err) => Some(err),
        }
    }
}
