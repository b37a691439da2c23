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

//! Summary panel: ranked top users and the common-word tag cloud.
//!
//! Stateless; renders nothing when no summary is available.

use crate::core::{Summary, SummaryTopUser};
use crate::ui::components::TagCloud;
use egui::{Color32, RichText, Ui};

/// Badge colour for a 1-based rank: gold, silver, then bronze.
#[must_use]
pub const fn rank_color(rank: usize) -> Color32 {
    match rank {
        1 => Color32::from_rgb(234, 179, 8),
        2 => Color32::from_rgb(156, 163, 175),
        _ => Color32::from_rgb(234, 88, 12),
    }
}

/// Label for words that did not fit the preview, if any.
#[must_use]
pub fn more_words_label(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{hidden} more"))
}

pub struct SummaryView;

impl SummaryView {
    pub fn render(ui: &mut Ui, summary: Option<&Summary>, word_preview_limit: usize) {
        let Some(summary) = summary else {
            return;
        };

        ui.heading("📊 Campaign Summary");
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            columns[0].horizontal(|ui| {
                ui.strong("👥 Top Performers");
                ui.label(RichText::new("by unique words").small().weak());
            });
            columns[0].add_space(6.0);
            for (index, user) in summary.top_users.iter().enumerate() {
                Self::render_top_user(&mut columns[0], index + 1, user, word_preview_limit);
            }

            columns[1].strong("📈 Trending Keywords");
            columns[1].add_space(6.0);
            TagCloud::render(&mut columns[1], &summary.common_words);
        });
    }

    fn render_top_user(ui: &mut Ui, rank: usize, user: &SummaryTopUser, word_preview_limit: usize) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(" {rank} "))
                        .strong()
                        .color(Color32::WHITE)
                        .background_color(rank_color(rank)),
                );
                ui.strong(format!("User {}", user.user_id));
                ui.label(
                    RichText::new(format!("{} words", user.unique_word_count))
                        .small()
                        .color(Color32::WHITE)
                        .background_color(Color32::from_rgb(99, 102, 241)),
                );
            });

            let (shown, hidden) = user.word_preview(word_preview_limit);
            ui.horizontal_wrapped(|ui| {
                for word in shown {
                    ui.label(RichText::new(word).small().code());
                }
                if let Some(more) = more_words_label(hidden) {
                    ui.label(RichText::new(more).small().weak());
                }
            });
        });
        ui.add_space(4.0);
    }
}
