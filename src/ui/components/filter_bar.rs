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

use egui::Ui;

use crate::core::QueryState;

/// Events emitted by the filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterBarEvent {
    SearchChanged(String),
    /// Empty string selects all users
    UserFilterChanged(String),
}

/// Label of a user dropdown entry; the empty value is the "all" option.
#[must_use]
pub fn user_option_label(value: &str) -> String {
    if value.is_empty() {
        "All Users".to_string()
    } else {
        format!("User {value}")
    }
}

/// Search box and user dropdown above the anomaly table
pub struct FilterBar;

impl FilterBar {
    /// Render the filter bar UI
    ///
    /// Works on copies of the state; changes are reported as events.
    pub fn render(ui: &mut Ui, state: &QueryState, user_ids: &[i64]) -> Vec<FilterBarEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            Self::render_search_input(ui, state, &mut events);
            ui.add_space(12.0);
            Self::render_user_dropdown(ui, state, user_ids, &mut events);
        });

        events
    }

    fn render_search_input(ui: &mut Ui, state: &QueryState, events: &mut Vec<FilterBarEvent>) {
        ui.label("🔍");
        let search_id = ui.id().with("anomaly_search");
        let mut search_term = state.search_term.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search_term)
                .hint_text("Search anomalies...")
                .desired_width(260.0)
                .id(search_id),
        );
        if response.changed() {
            events.push(FilterBarEvent::SearchChanged(search_term));
        }
    }

    fn render_user_dropdown(
        ui: &mut Ui,
        state: &QueryState,
        user_ids: &[i64],
        events: &mut Vec<FilterBarEvent>,
    ) {
        ui.label("⏷ Filter");
        let mut selected = state.user_id_filter.clone();
        egui::ComboBox::from_id_salt("anomaly_user_filter")
            .selected_text(user_option_label(&selected))
            .width(140.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, String::new(), user_option_label(""));
                for user_id in user_ids {
                    let value = user_id.to_string();
                    let label = user_option_label(&value);
                    ui.selectable_value(&mut selected, value, label);
                }
            });

        if selected != state.user_id_filter {
            events.push(FilterBarEvent::UserFilterChanged(selected));
        }
    }
}
