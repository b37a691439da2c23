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

use crate::core::fetch::{fetch_dashboard, DataSource};
use crate::core::model::Dashboard;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// The only message the user sees when loading fails.
pub const FETCH_FAILURE_MESSAGE: &str = "⚠️ Failed to fetch data from backend.";

/// Messages sent by the background loader
#[derive(Debug)]
pub enum LoadMessage {
    Loaded(Dashboard),
    /// User facing message; details are only logged
    Failed(String),
}

/// Runs the dashboard fetch off the UI thread
pub struct DashboardLoader;

impl DashboardLoader {
    /// Start loading in the background.
    /// Returns a receiver for the single outcome message.
    pub fn load_async<S: DataSource>(source: S, ctx: egui::Context) -> Receiver<LoadMessage> {
        let (tx, rx) = channel();

        thread::spawn(move || {
            Self::load_background(&source, &tx, &ctx);
        });

        rx
    }

    fn load_background<S: DataSource>(source: &S, tx: &Sender<LoadMessage>, ctx: &egui::Context) {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Cannot start async runtime: {e}");
                Self::deliver(tx, ctx, LoadMessage::Failed(FETCH_FAILURE_MESSAGE.to_string()));
                return;
            }
        };

        let message = match runtime.block_on(fetch_dashboard(source)) {
            Ok(dashboard) => LoadMessage::Loaded(dashboard),
            Err(e) => {
                tracing::error!("Dashboard load failed: {e:#}");
                LoadMessage::Failed(FETCH_FAILURE_MESSAGE.to_string())
            }
        };
        Self::deliver(tx, ctx, message);
    }

    fn deliver(tx: &Sender<LoadMessage>, ctx: &egui::Context, message: LoadMessage) {
        // The receiver is gone once the window has been closed
        if tx.send(message).is_err() {
            tracing::debug!("Dashboard receiver dropped, discarding load result");
            return;
        }
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::tests::StaticSource;
    use std::time::Duration;

    #[test]
    fn test_loaded_message() {
        let rx = DashboardLoader::load_async(StaticSource::ok(), egui::Context::default());
        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            LoadMessage::Loaded(dashboard) => assert_eq!(dashboard.anomalies.len(), 2),
            LoadMessage::Failed(msg) => panic!("unexpected failure: {msg}"),
        }
    }

    #[test]
    fn test_partial_success_is_failure() {
        let source = StaticSource {
            summary: Err("timeout".to_string()),
            ..StaticSource::ok()
        };
        let rx = DashboardLoader::load_async(source, egui::Context::default());
        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            LoadMessage::Failed(msg) => assert_eq!(msg, FETCH_FAILURE_MESSAGE),
            LoadMessage::Loaded(_) => panic!("partial data must not load"),
        }
    }

    #[test]
    fn test_dropped_receiver_is_tolerated() {
        let (tx, rx) = channel();
        drop(rx);
        DashboardLoader::deliver(
            &tx,
            &egui::Context::default(),
            LoadMessage::Failed(FETCH_FAILURE_MESSAGE.to_string()),
        );
    }
}
