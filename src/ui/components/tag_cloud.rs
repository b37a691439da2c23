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

use egui::{Color32, RichText, Ui};

const TAG_COLOR: Color32 = Color32::from_rgb(99, 102, 241);

/// Display text of a tag.
#[must_use]
pub fn tag_text(word: &str) -> String {
    format!("#{word}")
}

/// Wrapped collection of word tags.
///
/// Words render in input order; duplicates each get their own tag.
pub struct TagCloud;

impl TagCloud {
    pub fn render(ui: &mut Ui, words: &[String]) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
            let background = ui.visuals().faint_bg_color;
            for word in words {
                ui.label(
                    RichText::new(tag_text(word))
                        .color(TAG_COLOR)
                        .background_color(background),
                );
            }
        });
    }
}
