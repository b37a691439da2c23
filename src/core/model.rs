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

//! Data types served by the analysis backend.
//!
//! Both collections are created once per successful fetch and never mutated
//! afterwards. The field names follow the backend's JSON payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A flagged ad together with the reasons it was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Human readable classifications, in backend order.
    #[serde(default)]
    pub reason: Vec<String>,
}

impl AnomalyRecord {
    #[must_use]
    pub fn new(user_id: i64, id: i64, title: impl Into<String>, reason: Vec<String>) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
            reason,
        }
    }

    /// Composite identity of the rendered row.
    ///
    /// Ad ids are only unique per user, so both parts are needed.
    #[must_use]
    pub const fn row_key(&self) -> RowKey {
        RowKey {
            id: self.id,
            user_id: self.user_id,
        }
    }
}

/// Identity of a table row, stable across re-sorting and re-filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey {
    pub id: i64,
    pub user_id: i64,
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.id, self.user_id)
    }
}

/// One entry of the backend's "top users by unique words" ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTopUser {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub unique_word_count: u64,
    #[serde(default)]
    pub unique_words: Vec<String>,
}

impl SummaryTopUser {
    /// Split `unique_words` into the shown prefix and the number of hidden words.
    #[must_use]
    pub fn word_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.unique_words.len().min(limit);
        (
            &self.unique_words[..shown],
            self.unique_words.len() - shown,
        )
    }
}

/// Backend summary: ranked top users plus common words for the tag cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Already ranked; rank 1 is the first element.
    #[serde(default)]
    pub top_users: Vec<SummaryTopUser>,
    #[serde(default)]
    pub common_words: Vec<String>,
}

/// Everything the dashboard renders after a successful load.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub anomalies: Arc<Vec<AnomalyRecord>>,
    pub summary: Arc<Summary>,
}

impl Dashboard {
    #[must_use]
    pub fn new(anomalies: Vec<AnomalyRecord>, summary: Summary) -> Self {
        Self {
            anomalies: Arc::new(anomalies),
            summary: Arc::new(summary),
        }
    }
}
