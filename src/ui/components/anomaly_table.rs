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

use crate::core::{AnomalyRecord, QueryState, RowKey, SortKey};
use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 24.0;
const SELECTED_ROW_COLOR: Color32 = Color32::from_rgb(60, 60, 80);

/// Events emitted by the anomaly table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyTableEvent {
    HeaderClicked(SortKey),
    RowClicked(RowKey),
}

/// How alarming a reason reads, used for badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonSeverity {
    Critical,
    High,
    Elevated,
}

impl ReasonSeverity {
    #[must_use]
    pub fn classify(reason: &str) -> Self {
        let reason = reason.to_lowercase();
        if reason.contains("bot") {
            Self::Critical
        } else if reason.contains("high") || reason.contains("duplicate") {
            Self::High
        } else {
            Self::Elevated
        }
    }

    #[must_use]
    pub const fn color(self) -> Color32 {
        match self {
            Self::Critical => Color32::from_rgb(220, 38, 38),
            Self::High => Color32::from_rgb(234, 88, 12),
            Self::Elevated => Color32::from_rgb(202, 138, 4),
        }
    }
}

/// "Showing N anomaly/anomalies"
#[must_use]
pub fn result_count_label(count: usize) -> String {
    let noun = if count == 1 { "anomaly" } else { "anomalies" };
    format!("Showing {count} {noun}")
}

/// Sortable table of anomaly records
pub struct AnomalyTable;

impl AnomalyTable {
    /// Render `rows` (indices into `records`) in their given order
    ///
    /// Returns events that occurred (header clicks, row clicks)
    pub fn render(
        ui: &mut Ui,
        records: &[AnomalyRecord],
        rows: &[usize],
        state: &QueryState,
        selected: Option<RowKey>,
    ) -> Vec<AnomalyTableEvent> {
        let mut events = Vec::new();

        let available_height = ui.available_height();
        let header_height = ui.text_style_height(&egui::TextStyle::Heading);
        let body_height = (available_height - header_height - 1.0).max(ROW_HEIGHT);

        TableBuilder::new(ui)
            .id_salt("anomaly_table")
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .vscroll(true)
            .min_scrolled_height(body_height)
            .max_scroll_height(body_height)
            .column(Column::initial(110.0).resizable(true).clip(true))
            .column(Column::initial(80.0).resizable(true).clip(true))
            .column(Column::initial(320.0).resizable(true).clip(true))
            .column(Column::remainder().clip(true))
            .header(header_height, |mut header| {
                for column in SortKey::ALL {
                    header.col(|ui| {
                        Self::render_header_cell(ui, column, state, &mut events);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let source_index = rows[row.index()];
                    let record = &records[source_index];
                    let key = record.row_key();
                    let is_selected = selected == Some(key);
                    let mut clicked = false;

                    row.col(|ui| {
                        Self::paint_selection(ui, is_selected);
                        ui.label(RichText::new(format!("User {}", record.user_id)).strong());
                        clicked |= Self::cell_clicked(ui, key, source_index, "user");
                    });
                    row.col(|ui| {
                        Self::paint_selection(ui, is_selected);
                        ui.label(RichText::new(format!("#{}", record.id)).monospace());
                        clicked |= Self::cell_clicked(ui, key, source_index, "id");
                    });
                    row.col(|ui| {
                        Self::paint_selection(ui, is_selected);
                        ui.label(&record.title).on_hover_text(&record.title);
                        clicked |= Self::cell_clicked(ui, key, source_index, "title");
                    });
                    row.col(|ui| {
                        Self::paint_selection(ui, is_selected);
                        Self::render_reasons(ui, &record.reason);
                        clicked |= Self::cell_clicked(ui, key, source_index, "reason");
                    });

                    if clicked {
                        events.push(AnomalyTableEvent::RowClicked(key));
                    }
                });
            });

        events
    }

    fn render_header_cell(
        ui: &mut Ui,
        column: SortKey,
        state: &QueryState,
        events: &mut Vec<AnomalyTableEvent>,
    ) {
        let text = state.sort_indicator(column).map_or_else(
            || column.label().to_string(),
            |arrow| format!("{} {arrow}", column.label()),
        );

        if column.header_sortable() {
            let response = ui
                .selectable_label(state.sort_key == column, RichText::new(text).strong())
                .on_hover_text("Click to sort");
            if response.clicked() {
                events.push(AnomalyTableEvent::HeaderClicked(column));
            }
        } else {
            ui.strong(text);
        }
    }

    fn render_reasons(ui: &mut Ui, reasons: &[String]) {
        for reason in reasons {
            let severity = ReasonSeverity::classify(reason);
            ui.label(
                RichText::new(format!("⚠ {reason}"))
                    .small()
                    .strong()
                    .color(Color32::WHITE)
                    .background_color(severity.color()),
            );
        }
    }

    fn paint_selection(ui: &Ui, is_selected: bool) {
        if is_selected {
            ui.painter()
                .rect_filled(ui.available_rect_before_wrap(), 0.0, SELECTED_ROW_COLOR);
        }
    }

    fn cell_clicked(ui: &Ui, key: RowKey, source_index: usize, column: &str) -> bool {
        // Keys may repeat across records, the source index keeps widget ids unique
        ui.interact(
            ui.max_rect(),
            ui.id().with(key).with(source_index).with(column),
            egui::Sense::click(),
        )
        .clicked()
    }
}
