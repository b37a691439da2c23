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

use chrono::Datelike;

use crate::config::GlobalConfig;
use crate::core::{DashboardLoader, DataSource};
use crate::ui::shell::{LoadState, Shell};
use crate::ui::windows;
use crate::ui::{AnomalyView, SummaryView};

/// Main application state
pub struct AdInsightsApp {
    /// Fetch lifecycle and the loaded data
    shell: Shell,

    /// Anomaly table; owns the query state
    anomaly_view: AnomalyView,

    /// Where the data is fetched from, shown while loading
    source_description: String,

    /// Global configuration
    config: GlobalConfig,

    /// Whether to show the About window
    show_about_window: bool,
}

impl AdInsightsApp {
    /// Create the app and start the one-off dashboard fetch
    pub fn new<S: DataSource>(
        cc: &eframe::CreationContext<'_>,
        source: S,
        config: GlobalConfig,
    ) -> Self {
        let source_description = source.describe();
        let receiver = DashboardLoader::load_async(source, cc.egui_ctx.clone());

        Self {
            shell: Shell::new(receiver),
            anomaly_view: AnomalyView::new(),
            source_description,
            config,
            show_about_window: false,
        }
    }

    /// Render top menu bar
    fn render_menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.menu_button("File", |ui| {
            if ui.button("Quit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About").clicked() {
                self.show_about_window = true;
                ui.close();
            }
        });
    }

    fn render_footer(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "© {} Ad Insights Explorer Lite",
                    chrono::Local::now().year()
                ))
                .small()
                .weak(),
            );
        });
    }

    fn render_loading(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Loading dashboard…").size(16.0).strong());
            ui.label(egui::RichText::new(&self.source_description).weak());
        });
    }

    fn render_error(ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            let error_color = ui.visuals().error_fg_color;
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.colored_label(error_color, egui::RichText::new(message).strong());
            });
        });
    }

    /// Render central content area according to the load state
    fn render_central_panel(&mut self, ui: &mut egui::Ui) {
        match self.shell.state() {
            LoadState::Loading => self.render_loading(ui),
            LoadState::Failed(message) => Self::render_error(ui, message),
            LoadState::Ready(dashboard) => {
                let anomalies = std::sync::Arc::clone(&dashboard.anomalies);
                let summary = std::sync::Arc::clone(&dashboard.summary);

                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new("Ad Insights Explorer Lite").size(28.0).strong());
                    ui.label("Detect anomalies instantly and uncover insights that drive performance.");
                });
                ui.separator();

                egui::Frame::group(ui.style()).show(ui, |ui| {
                    SummaryView::render(ui, Some(&summary), self.config.word_preview_limit);
                });
                ui.add_space(12.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    self.anomaly_view.render(ui, &anomalies);
                });
            }
        }
    }
}

impl eframe::App for AdInsightsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("AdInsightsApp::update");

        // Check for the loader outcome
        self.shell.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.render_menu_bar(ui, ctx);
            });
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            Self::render_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_central_panel(ui);
        });

        if self.show_about_window {
            windows::render_about_window(
                ctx,
                &mut self.show_about_window,
                &self.config.api_base,
                self.shell.state(),
            );
        }
    }
}
