// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Limits applied to a single search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// The most matches an outcome holds.
    pub max_result: usize,
    /// The `limit` passed to each store call.
    pub max_query_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_result: 10,
            max_query_limit: 20,
        }
    }
}
