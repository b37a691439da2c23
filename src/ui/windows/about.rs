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

use crate::ui::shell::LoadState;

/// Label/value pairs describing the backend and what was loaded from it.
#[must_use]
pub fn about_rows(api_base: &str, state: &LoadState) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Version", env!("CARGO_PKG_VERSION").to_string()),
        ("Backend", api_base.to_string()),
    ];

    match state {
        LoadState::Loading => rows.push(("Status", "Loading".to_string())),
        LoadState::Failed(_) => rows.push(("Status", "Failed".to_string())),
        LoadState::Ready(dashboard) => {
            rows.push(("Status", "Loaded".to_string()));
            rows.push(("Anomalies", dashboard.anomalies.len().to_string()));
            rows.push(("Top users", dashboard.summary.top_users.len().to_string()));
            rows.push((
                "Common words",
                dashboard.summary.common_words.len().to_string(),
            ));
        }
    }

    rows
}

/// Render the About window
pub fn render_about_window(ctx: &egui::Context, open: &mut bool, api_base: &str, state: &LoadState) {
    egui::Window::new("About Ad Insights Explorer")
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .open(open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Ad Insights Explorer Lite");
                ui.label(egui::RichText::new("Flagged ads and word usage per user").weak());
            });
            ui.add_space(10.0);

            egui::Grid::new("about_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    for (label, value) in about_rows(api_base, state) {
                        ui.label(label);
                        ui.label(egui::RichText::new(value).strong());
                        ui.end_row();
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnomalyRecord, Dashboard, Summary};

    fn value<'a>(rows: &'a [(&'static str, String)], label: &str) -> Option<&'a str> {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_rows_while_loading() {
        let rows = about_rows("http://127.0.0.1:8000", &LoadState::Loading);
        assert_eq!(value(&rows, "Backend"), Some("http://127.0.0.1:8000"));
        assert_eq!(value(&rows, "Status"), Some("Loading"));
        assert_eq!(value(&rows, "Anomalies"), None);
    }

    #[test]
    fn test_rows_after_load() {
        let dashboard = Dashboard::new(
            vec![AnomalyRecord::new(1, 1, "t", vec!["bot".to_string()])],
            Summary {
                top_users: Vec::new(),
                common_words: vec!["et".to_string(), "et".to_string()],
            },
        );
        let rows = about_rows("http://backend", &LoadState::Ready(dashboard));
        assert_eq!(value(&rows, "Status"), Some("Loaded"));
        assert_eq!(value(&rows, "Anomalies"), Some("1"));
        assert_eq!(value(&rows, "Top users"), Some("0"));
        assert_eq!(value(&rows, "Common words"), Some("2"));
    }

    #[test]
    fn test_rows_after_failure_hide_counts() {
        let rows = about_rows("http://backend", &LoadState::Failed("x".to_string()));
        assert_eq!(value(&rows, "Status"), Some("Failed"));
        assert_eq!(value(&rows, "Top users"), None);
    }
}
