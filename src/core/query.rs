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

//! Client-side query engine for the anomaly table.
//!
//! The engine is a pure function of the immutable record list and the
//! current [`QueryState`]: user filter, then text search, then a stable sort.
//! It never fails and never mutates its input.

use crate::core::model::AnomalyRecord;
use indexmap::IndexSet;
use std::cmp::Ordering;

/// Column a view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    UserId,
    #[default]
    Id,
    Title,
    Reason,
}

impl SortKey {
    /// All columns in table order.
    pub const ALL: [Self; 4] = [Self::UserId, Self::Id, Self::Title, Self::Reason];

    /// Header label shown in the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UserId => "User ID",
            Self::Id => "Ad ID",
            Self::Title => "Title",
            Self::Reason => "Anomaly Type",
        }
    }

    /// Whether clicking this column's header changes the ordering.
    ///
    /// `Reason` can still be set programmatically.
    #[must_use]
    pub const fn header_sortable(self) -> bool {
        match self {
            Self::UserId | Self::Id | Self::Title => true,
            Self::Reason => false,
        }
    }

    /// Ascending comparison of two records on this column.
    #[must_use]
    pub fn compare(self, a: &AnomalyRecord, b: &AnomalyRecord) -> Ordering {
        match self {
            Self::UserId => a.user_id.cmp(&b.user_id),
            Self::Id => a.id.cmp(&b.id),
            Self::Title => a.title.cmp(&b.title),
            // Reason lists order by their comma-joined text.
            Self::Reason => compare_joined(&a.reason, &b.reason),
        }
    }
}

/// Lexicographic comparison of `a.join(",")` and `b.join(",")` without allocating.
fn compare_joined(a: &[String], b: &[String]) -> Ordering {
    let left = joined_bytes(a);
    let right = joined_bytes(b);
    left.cmp(right)
}

fn joined_bytes(parts: &[String]) -> impl Iterator<Item = u8> + '_ {
    parts.iter().enumerate().flat_map(|(i, part)| {
        let separator: &[u8] = if i == 0 { b"" } else { b"," };
        separator.iter().chain(part.as_bytes()).copied()
    })
}

/// User-controlled query inputs of the anomaly table.
///
/// Every interaction replaces exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Exact match against the record's `user_id` in decimal form; empty means no filter.
    pub user_id_filter: String,
    /// Case-insensitive substring query over title and reasons; empty means no filter.
    pub search_term: String,
    pub sort_key: SortKey,
    pub sort_ascending: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            user_id_filter: String::new(),
            search_term: String::new(),
            sort_key: SortKey::Id,
            sort_ascending: true,
        }
    }
}

impl QueryState {
    /// Apply a header click on `column`.
    ///
    /// Clicking the active column flips the direction; clicking another
    /// sortable column makes it active in ascending order. Returns `false`
    /// when the column is not clickable and nothing changed.
    pub fn click_header(&mut self, column: SortKey) -> bool {
        if !column.header_sortable() {
            return false;
        }
        if self.sort_key == column {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_key = column;
            self.sort_ascending = true;
        }
        true
    }

    /// Direction arrow for `column`, if it is the active sort column.
    #[must_use]
    pub fn sort_indicator(&self, column: SortKey) -> Option<&'static str> {
        (self.sort_key == column).then_some(if self.sort_ascending { "↑" } else { "↓" })
    }

    fn matches_user(&self, record: &AnomalyRecord) -> bool {
        self.user_id_filter.is_empty() || record.user_id.to_string() == self.user_id_filter
    }

    fn compare(&self, a: &AnomalyRecord, b: &AnomalyRecord) -> Ordering {
        let ordering = self.sort_key.compare(a, b);
        if self.sort_ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

/// Case-folded search needle, prepared once per query.
struct SearchNeedle(Option<String>);

impl SearchNeedle {
    fn new(term: &str) -> Self {
        Self((!term.is_empty()).then(|| term.to_lowercase()))
    }

    fn matches(&self, record: &AnomalyRecord) -> bool {
        let Some(needle) = &self.0 else {
            return true;
        };
        record.title.to_lowercase().contains(needle.as_str())
            || record
                .reason
                .iter()
                .any(|reason| reason.to_lowercase().contains(needle.as_str()))
    }
}

/// Compute the ordered view as indices into `records`.
#[must_use]
pub fn view_indices(records: &[AnomalyRecord], state: &QueryState) -> Vec<usize> {
    profiling::scope!("view_indices");

    let needle = SearchNeedle::new(&state.search_term);
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| state.matches_user(record))
        .filter(|(_, record)| needle.matches(record))
        .map(|(index, _)| index)
        .collect();

    // `sort_by` is stable, ties keep their post-filter order.
    indices.sort_by(|&a, &b| state.compare(&records[a], &records[b]));
    indices
}

/// Compute the ordered, filtered view of `records` for `state`.
#[must_use]
pub fn view<'a>(records: &'a [AnomalyRecord], state: &QueryState) -> Vec<&'a AnomalyRecord> {
    view_indices(records, state)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

/// Distinct user ids in order of first appearance.
#[must_use]
pub fn distinct_user_ids(records: &[AnomalyRecord]) -> Vec<i64> {
    records
        .iter()
        .map(|record| record.user_id)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user_id: i64, id: i64, title: &str, reasons: &[&str]) -> AnomalyRecord {
        AnomalyRecord::new(
            user_id,
            id,
            title,
            reasons.iter().map(ToString::to_string).collect(),
        )
    }

    fn sample() -> Vec<AnomalyRecord> {
        vec![
            record(1, 1, "short", &["Title shorter than 15 characters"]),
            record(2, 2, "spam title", &["User has >5 similar titles (possible bot)"]),
        ]
    }

    fn ids(view: &[&AnomalyRecord]) -> Vec<i64> {
        view.iter().map(|r| r.id).collect()
    }

    fn keys(view: &[&AnomalyRecord]) -> Vec<(i64, i64)> {
        view.iter().map(|r| (r.user_id, r.id)).collect()
    }

    #[test]
    fn test_default_state_orders_by_id() {
        let records = sample();
        let state = QueryState::default();
        assert_eq!(state.sort_key, SortKey::Id);
        assert!(state.sort_ascending);
        assert_eq!(ids(&view(&records, &state)), vec![1, 2]);
    }

    #[test]
    fn test_user_filter_exact_match() {
        let records = sample();
        let state = QueryState {
            user_id_filter: "2".to_string(),
            ..QueryState::default()
        };
        assert_eq!(ids(&view(&records, &state)), vec![2]);
    }

    #[test]
    fn test_user_filter_is_not_partial() {
        let records = vec![
            record(1, 1, "a", &["r"]),
            record(12, 2, "b", &["r"]),
            record(21, 3, "c", &["r"]),
        ];
        let state = QueryState {
            user_id_filter: "1".to_string(),
            ..QueryState::default()
        };
        assert_eq!(ids(&view(&records, &state)), vec![1]);

        let state = QueryState {
            user_id_filter: "01".to_string(),
            ..QueryState::default()
        };
        assert!(view(&records, &state).is_empty());
    }

    #[test]
    fn test_search_matches_reason_text() {
        let records = sample();
        let state = QueryState {
            search_term: "bot".to_string(),
            ..QueryState::default()
        };
        assert_eq!(ids(&view(&records, &state)), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let records = sample();
        let state = QueryState {
            search_term: "SPAM".to_string(),
            ..QueryState::default()
        };
        assert_eq!(ids(&view(&records, &state)), vec![2]);

        let state = QueryState {
            search_term: "Title".to_string(),
            ..QueryState::default()
        };
        // Matches the title of record 2 and the reason of record 1.
        assert_eq!(ids(&view(&records, &state)), vec![1, 2]);
    }

    #[test]
    fn test_search_matches_any_reason() {
        let records = vec![
            record(1, 1, "plain", &["first", "Duplicate or repeated title"]),
            record(1, 2, "plain", &["first"]),
        ];
        let state = QueryState {
            search_term: "duplicate".to_string(),
            ..QueryState::default()
        };
        assert_eq!(ids(&view(&records, &state)), vec![1]);
    }

    #[test]
    fn test_search_runs_on_user_filtered_set() {
        let records = vec![
            record(1, 1, "bot farm", &["r"]),
            record(2, 2, "bot farm", &["r"]),
        ];
        let state = QueryState {
            user_id_filter: "2".to_string(),
            search_term: "bot".to_string(),
            ..QueryState::default()
        };
        assert_eq!(ids(&view(&records, &state)), vec![2]);
    }

    #[test]
    fn test_sort_user_id_descending() {
        let records = sample();
        let state = QueryState {
            sort_key: SortKey::UserId,
            sort_ascending: false,
            ..QueryState::default()
        };
        assert_eq!(ids(&view(&records, &state)), vec![2, 1]);
    }

    #[test]
    fn test_empty_records_yield_empty_view() {
        let records: Vec<AnomalyRecord> = Vec::new();
        let state = QueryState {
            user_id_filter: "3".to_string(),
            search_term: "x".to_string(),
            sort_key: SortKey::Reason,
            sort_ascending: false,
        };
        assert!(view(&records, &state).is_empty());
        assert!(view(&records, &QueryState::default()).is_empty());
    }

    #[test]
    fn test_filter_matching_nothing() {
        let records = sample();
        let state = QueryState {
            search_term: "zzz".to_string(),
            ..QueryState::default()
        };
        assert!(view(&records, &state).is_empty());
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = vec![
            record(2, 10, "a", &["r"]),
            record(1, 11, "b", &["r"]),
            record(2, 12, "c", &["r"]),
            record(1, 13, "d", &["r"]),
        ];
        let mut state = QueryState {
            sort_key: SortKey::UserId,
            ..QueryState::default()
        };
        assert_eq!(ids(&view(&records, &state)), vec![11, 13, 10, 12]);

        state.sort_ascending = false;
        assert_eq!(ids(&view(&records, &state)), vec![10, 12, 11, 13]);
    }

    #[test]
    fn test_numeric_sort_is_monotonic() {
        let records = vec![
            record(3, 100, "a", &["r"]),
            record(1, 9, "b", &["r"]),
            record(2, 20, "c", &["r"]),
            record(1, 2, "d", &["r"]),
        ];
        let state = QueryState::default();
        let ascending = ids(&view(&records, &state));
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        let state = QueryState {
            sort_ascending: false,
            ..QueryState::default()
        };
        let descending = ids(&view(&records, &state));
        assert!(descending.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_title_sort_uses_raw_string_order() {
        let records = vec![
            record(1, 1, "beta", &["r"]),
            record(1, 2, "Zeta", &["r"]),
            record(1, 3, "alpha", &["r"]),
        ];
        let state = QueryState {
            sort_key: SortKey::Title,
            ..QueryState::default()
        };
        // Uppercase sorts before lowercase; no locale folding.
        assert_eq!(ids(&view(&records, &state)), vec![2, 3, 1]);
    }

    #[test]
    fn test_reason_sort_compares_joined_text() {
        let records = vec![
            record(1, 1, "t", &["b"]),
            record(1, 2, "t", &["a", "z"]),
            record(1, 3, "t", &["a"]),
            record(1, 4, "t", &["a,z"]),
        ];
        let state = QueryState {
            sort_key: SortKey::Reason,
            ..QueryState::default()
        };
        // "a" < "a,z" == "a,z" < "b"; the tie keeps input order.
        assert_eq!(ids(&view(&records, &state)), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_view_is_idempotent_and_leaves_input_untouched() {
        let records = vec![
            record(2, 5, "x", &["r"]),
            record(1, 5, "y", &["r"]),
            record(3, 1, "z", &["r"]),
        ];
        let before = records.clone();
        let state = QueryState {
            sort_key: SortKey::Id,
            ..QueryState::default()
        };
        let first = keys(&view(&records, &state));
        let second = keys(&view(&records, &state));
        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn test_filters_commute() {
        let records = vec![
            record(1, 1, "bot", &["r"]),
            record(2, 2, "bot", &["r"]),
            record(2, 3, "human", &["bot-like"]),
            record(2, 4, "human", &["r"]),
        ];
        let both = QueryState {
            user_id_filter: "2".to_string(),
            search_term: "bot".to_string(),
            ..QueryState::default()
        };
        let combined = keys(&view(&records, &both));

        // Search first, then filter by user on the searched subset.
        let search_only = QueryState {
            search_term: "bot".to_string(),
            ..QueryState::default()
        };
        let searched: Vec<AnomalyRecord> =
            view(&records, &search_only).into_iter().cloned().collect();
        let user_only = QueryState {
            user_id_filter: "2".to_string(),
            ..QueryState::default()
        };
        assert_eq!(keys(&view(&searched, &user_only)), combined);
        assert_eq!(combined, vec![(2, 2), (2, 3)]);
    }

    #[test]
    fn test_toggling_direction_twice_restores_order() {
        let records = vec![
            record(1, 3, "c", &["r"]),
            record(2, 3, "a", &["r"]),
            record(1, 1, "b", &["r"]),
        ];
        let mut state = QueryState::default();
        let original = keys(&view(&records, &state));
        state.click_header(SortKey::Id);
        assert_ne!(keys(&view(&records, &state)), original);
        state.click_header(SortKey::Id);
        assert_eq!(keys(&view(&records, &state)), original);
    }

    #[test]
    fn test_resorting_preserves_row_identities() {
        let records = vec![
            record(1, 7, "c", &["r"]),
            record(2, 7, "a", &["r"]),
            record(3, 1, "b", &["r"]),
        ];
        let mut state = QueryState::default();
        let mut before: Vec<_> = view(&records, &state)
            .iter()
            .map(|r| r.row_key())
            .collect();
        state.click_header(SortKey::Title);
        let mut after: Vec<_> = view(&records, &state)
            .iter()
            .map(|r| r.row_key())
            .collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_click_header_transitions() {
        let mut state = QueryState::default();

        assert!(state.click_header(SortKey::Title));
        assert_eq!(state.sort_key, SortKey::Title);
        assert!(state.sort_ascending);

        assert!(state.click_header(SortKey::Title));
        assert!(!state.sort_ascending);

        // Switching columns resets to ascending.
        assert!(state.click_header(SortKey::UserId));
        assert_eq!(state.sort_key, SortKey::UserId);
        assert!(state.sort_ascending);

        assert!(!state.click_header(SortKey::Reason));
        assert_eq!(state.sort_key, SortKey::UserId);
    }

    #[test]
    fn test_sort_indicator() {
        let mut state = QueryState::default();
        assert_eq!(state.sort_indicator(SortKey::Id), Some("↑"));
        assert_eq!(state.sort_indicator(SortKey::Title), None);
        state.sort_ascending = false;
        assert_eq!(state.sort_indicator(SortKey::Id), Some("↓"));
    }

    #[test]
    fn test_distinct_user_ids_in_first_appearance_order() {
        let records = vec![
            record(3, 1, "a", &["r"]),
            record(1, 2, "a", &["r"]),
            record(3, 3, "a", &["r"]),
            record(2, 4, "a", &["r"]),
        ];
        assert_eq!(distinct_user_ids(&records), vec![3, 1, 2]);
        assert!(distinct_user_ids(&[]).is_empty());
    }
}
