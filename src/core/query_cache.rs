// AdInsights - GPL-3.0-or-later
// This file is part of AdInsights.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// AdInsights is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// AdInsights is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with AdInsights.  If not, see <https://www.gnu.org/licenses/>.

//! Memoization of derived table data.
//!
//! The UI redraws every frame; the query view and the user dropdown options
//! are only recomputed when the record set or the query state changed.

use crate::core::model::AnomalyRecord;
use crate::core::query::{distinct_user_ids, view_indices, QueryState};
use std::sync::Arc;

/// Cache key for view validity.
///
/// The record set is identified by its allocation, since it is never
/// mutated after a load.
#[derive(Clone, Debug, PartialEq, Eq)]
struct QueryKey {
    records_id: usize,
    state: QueryState,
}

impl QueryKey {
    fn new(records: &Arc<Vec<AnomalyRecord>>, state: &QueryState) -> Self {
        Self {
            records_id: records_id(records),
            state: state.clone(),
        }
    }
}

fn records_id(records: &Arc<Vec<AnomalyRecord>>) -> usize {
    Arc::as_ptr(records) as usize
}

/// Last computed view plus the key it was computed for.
#[derive(Debug, Default)]
pub struct QueryCache {
    // Holding the Arc keeps the allocation alive, so its address cannot be reused.
    source: Option<Arc<Vec<AnomalyRecord>>>,
    key: Option<QueryKey>,
    indices: Vec<usize>,
    user_ids: Vec<i64>,
    computations: u64,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered view indices for `records` under `state`, recomputed only on change.
    pub fn view(&mut self, records: &Arc<Vec<AnomalyRecord>>, state: &QueryState) -> &[usize] {
        self.track_source(records);
        let key = QueryKey::new(records, state);
        if self.key.as_ref() != Some(&key) {
            self.indices = view_indices(records, state);
            self.computations += 1;
            tracing::trace!(
                "Query view recomputed ({} of {} records, sort {:?} asc={})",
                self.indices.len(),
                records.len(),
                state.sort_key,
                state.sort_ascending
            );
            self.key = Some(key);
        }
        &self.indices
    }

    /// Distinct user ids for the dropdown, recomputed only when the record set changes.
    pub fn user_ids(&mut self, records: &Arc<Vec<AnomalyRecord>>) -> &[i64] {
        self.track_source(records);
        &self.user_ids
    }

    /// How many times the view has been computed.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }

    fn track_source(&mut self, records: &Arc<Vec<AnomalyRecord>>) {
        let same = self
            .source
            .as_ref()
            .is_some_and(|source| Arc::ptr_eq(source, records));
        if !same {
            self.source = Some(Arc::clone(records));
            self.user_ids = distinct_user_ids(records);
            self.key = None;
            tracing::debug!(
                "Query cache bound to new record set ({} records, {} users)",
                records.len(),
                self.user_ids.len()
            );
        }
    }
}
