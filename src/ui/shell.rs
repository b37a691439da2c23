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

//! Fetch lifecycle of the application.
//!
//! `Loading` is left exactly once, to either `Ready` or `Failed`. There is no
//! retry and no refetch.

use crate::core::{Dashboard, LoadMessage};
use std::sync::mpsc::{Receiver, TryRecvError};

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(Dashboard),
    Failed(String),
}

/// Owns the top-level data and the channel it arrives on.
pub struct Shell {
    state: LoadState,
    receiver: Option<Receiver<LoadMessage>>,
}

impl Shell {
    #[must_use]
    pub const fn new(receiver: Receiver<LoadMessage>) -> Self {
        Self {
            state: LoadState::Loading,
            receiver: Some(receiver),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Poll the loader and apply its outcome, if any.
    ///
    /// Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.receiver else {
            return false;
        };
        match rx.try_recv() {
            Ok(message) => {
                self.receiver = None;
                self.apply(message)
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // Loader died without reporting; treat like any other failure
                self.receiver = None;
                tracing::error!("Dashboard loader exited without a result");
                self.apply(LoadMessage::Failed(
                    crate::core::FETCH_FAILURE_MESSAGE.to_string(),
                ))
            }
        }
    }

    /// Apply a loader message. Messages after the first are ignored.
    pub fn apply(&mut self, message: LoadMessage) -> bool {
        if !matches!(self.state, LoadState::Loading) {
            tracing::debug!("Ignoring late loader message: state already settled");
            return false;
        }
        self.state = match message {
            LoadMessage::Loaded(dashboard) => {
                tracing::info!(
                    "Dashboard ready: {} anomalies, {} top users, {} common words",
                    dashboard.anomalies.len(),
                    dashboard.summary.top_users.len(),
                    dashboard.summary.common_words.len()
                );
                LoadState::Ready(dashboard)
            }
            LoadMessage::Failed(message) => {
                tracing::info!("Dashboard failed to load");
                LoadState::Failed(message)
            }
        };
        true
    }
}
