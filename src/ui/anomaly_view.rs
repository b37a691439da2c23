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

//! Anomaly table with its filter controls.
//!
//! Owns the query state; every control interaction replaces one field of it
//! and the view is recomputed through the cache on the next frame.

use crate::core::{AnomalyRecord, QueryCache, QueryState, RowKey};
use crate::ui::components::{
    result_count_label, AnomalyTable, AnomalyTableEvent, FilterBar, FilterBarEvent,
};
use egui::{RichText, Ui};
use std::sync::Arc;

pub const NO_MATCHES_MESSAGE: &str = "No anomalies found matching your criteria";

#[derive(Debug, Default)]
pub struct AnomalyView {
    state: QueryState,
    cache: QueryCache,
    selected: Option<RowKey>,
}

impl AnomalyView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    #[must_use]
    pub const fn selected(&self) -> Option<RowKey> {
        self.selected
    }

    /// Current view rows as indices into `records`.
    pub fn rows(&mut self, records: &Arc<Vec<AnomalyRecord>>) -> &[usize] {
        self.cache.view(records, &self.state)
    }

    /// Set the sort column directly, bypassing the header rules.
    #[cfg(test)]
    pub fn set_sort(&mut self, key: crate::core::SortKey, ascending: bool) {
        self.state.sort_key = key;
        self.state.sort_ascending = ascending;
    }

    pub fn apply_filter_event(&mut self, event: FilterBarEvent) {
        match event {
            FilterBarEvent::SearchChanged(term) => {
                tracing::debug!("Search term changed to '{term}'");
                self.state.search_term = term;
            }
            FilterBarEvent::UserFilterChanged(user) => {
                tracing::debug!("User filter changed to '{user}'");
                self.state.user_id_filter = user;
            }
        }
    }

    pub fn apply_table_event(&mut self, event: AnomalyTableEvent) {
        match event {
            AnomalyTableEvent::HeaderClicked(column) => {
                if self.state.click_header(column) {
                    tracing::debug!(
                        "Sorting by {:?} ({})",
                        self.state.sort_key,
                        if self.state.sort_ascending { "asc" } else { "desc" }
                    );
                }
            }
            AnomalyTableEvent::RowClicked(key) => {
                self.selected = if self.selected == Some(key) {
                    tracing::debug!("Row {key} deselected");
                    None
                } else {
                    tracing::debug!("Row {key} selected");
                    Some(key)
                };
            }
        }
    }

    pub fn render(&mut self, ui: &mut Ui, records: &Arc<Vec<AnomalyRecord>>) {
        ui.heading("⚠ Anomalies Detected");
        ui.add_space(8.0);

        let filter_events = {
            let user_ids = self.cache.user_ids(records);
            FilterBar::render(ui, &self.state, user_ids)
        };
        ui.add_space(8.0);

        // Apply control changes before computing rows so this frame shows them
        for event in filter_events {
            self.apply_filter_event(event);
        }

        let rows = self.cache.view(records, &self.state);
        let count = rows.len();

        if rows.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("🔍").size(24.0));
                ui.label(RichText::new(NO_MATCHES_MESSAGE).weak());
                ui.add_space(40.0);
            });
            return;
        }

        ui.label(RichText::new(result_count_label(count)).small().weak());
        let table_events = AnomalyTable::render(ui, records, rows, &self.state, self.selected);
        for event in table_events {
            self.apply_table_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SortKey;
    use crate::ui::rendered_texts;

    fn records() -> Arc<Vec<AnomalyRecord>> {
        Arc::new(vec![
            AnomalyRecord::new(
                1,
                1,
                "short",
                vec!["Title shorter than 15 characters".to_string()],
            ),
            AnomalyRecord::new(
                2,
                2,
                "spam title",
                vec!["User has >5 similar titles (possible bot)".to_string()],
            ),
        ])
    }

    #[test]
    fn test_filter_events_replace_single_fields() {
        let records = records();
        let mut view = AnomalyView::new();

        view.apply_filter_event(FilterBarEvent::UserFilterChanged("2".to_string()));
        assert_eq!(view.rows(&records), &[1]);
        assert_eq!(view.state().search_term, "");

        view.apply_filter_event(FilterBarEvent::UserFilterChanged(String::new()));
        view.apply_filter_event(FilterBarEvent::SearchChanged("bot".to_string()));
        assert_eq!(view.rows(&records), &[1]);
        assert_eq!(view.state().user_id_filter, "");
    }

    #[test]
    fn test_header_events_follow_click_rules() {
        let records = records();
        let mut view = AnomalyView::new();

        view.apply_table_event(AnomalyTableEvent::HeaderClicked(SortKey::UserId));
        view.apply_table_event(AnomalyTableEvent::HeaderClicked(SortKey::UserId));
        assert_eq!(view.rows(&records), &[1, 0]);

        view.apply_table_event(AnomalyTableEvent::HeaderClicked(SortKey::Reason));
        assert_eq!(view.state().sort_key, SortKey::UserId);
    }

    #[test]
    fn test_programmatic_reason_sort() {
        let records = records();
        let mut view = AnomalyView::new();
        view.set_sort(SortKey::Reason, true);
        // "Title shorter..." < "User has..."
        assert_eq!(view.rows(&records), &[0, 1]);
        view.set_sort(SortKey::Reason, false);
        assert_eq!(view.rows(&records), &[1, 0]);
    }

    #[test]
    fn test_selection_survives_resort() {
        let records = records();
        let mut view = AnomalyView::new();
        let key = records[1].row_key();

        view.apply_table_event(AnomalyTableEvent::RowClicked(key));
        view.apply_table_event(AnomalyTableEvent::HeaderClicked(SortKey::Title));
        assert_eq!(view.selected(), Some(key));

        view.apply_table_event(AnomalyTableEvent::RowClicked(key));
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_empty_records_give_empty_rows() {
        let records = Arc::new(Vec::new());
        let mut view = AnomalyView::new();
        assert!(view.rows(&records).is_empty());
    }

    fn shows(texts: &[String], needle: &str) -> bool {
        texts.iter().any(|text| text.contains(needle))
    }

    #[test]
    fn test_empty_records_show_no_matches_message() {
        let records = Arc::new(Vec::new());
        let mut view = AnomalyView::new();
        let texts = rendered_texts(|ui| view.render(ui, &records));
        assert!(shows(&texts, NO_MATCHES_MESSAGE));
        assert!(!shows(&texts, "Showing"));
    }

    #[test]
    fn test_filter_matching_nothing_shows_no_matches_message() {
        let records = records();
        let mut view = AnomalyView::new();
        view.apply_filter_event(FilterBarEvent::SearchChanged("zzz".to_string()));
        let texts = rendered_texts(|ui| view.render(ui, &records));
        assert!(shows(&texts, NO_MATCHES_MESSAGE));
        assert!(!shows(&texts, "Showing"));
    }

    #[test]
    fn test_matching_rows_render_count_and_table() {
        let records = records();
        let mut view = AnomalyView::new();
        let texts = rendered_texts(|ui| view.render(ui, &records));
        assert!(!shows(&texts, NO_MATCHES_MESSAGE));
        assert!(shows(&texts, &result_count_label(2)));
        assert!(shows(&texts, "spam title"));

        view.apply_filter_event(FilterBarEvent::UserFilterChanged("1".to_string()));
        let texts = rendered_texts(|ui| view.render(ui, &records));
        assert!(shows(&texts, "Showing 1 anomaly"));
        assert!(!shows(&texts, "spam title"));
    }
}
