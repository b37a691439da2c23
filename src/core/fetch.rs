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

//! Data fetch gateway.
//!
//! Reads the anomaly list and the summary from the analysis backend. Both
//! requests run concurrently and must succeed for the load to succeed.

use crate::core::model::{AnomalyRecord, Dashboard, Summary};
use anyhow::{Context, Result};
use std::future::Future;

/// Where the dashboard data comes from.
pub trait DataSource: Send + 'static {
    /// Human readable location, used for logging and the loading screen.
    fn describe(&self) -> String;

    fn fetch_anomalies(&self) -> impl Future<Output = Result<Vec<AnomalyRecord>>> + Send;

    fn fetch_summary(&self) -> impl Future<Output = Result<Summary>> + Send;
}

/// Backend reached over HTTP at `{base}/anomalies` and `{base}/summary`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Cannot decode response from {url}"))
    }
}

impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch_anomalies(&self) -> Result<Vec<AnomalyRecord>> {
        let values: Vec<serde_json::Value> = self.get_json("anomalies").await?;
        Ok(decode_records(values))
    }

    async fn fetch_summary(&self) -> Result<Summary> {
        self.get_json("summary").await
    }
}

/// Decode records one by one so a single bad record does not fail the load.
fn decode_records(values: Vec<serde_json::Value>) -> Vec<AnomalyRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping undecodable anomaly record #{index}: {e}");
                None
            }
        })
        .collect()
}

/// Drop records without any reason; they are not anomalies.
fn retain_flagged(mut records: Vec<AnomalyRecord>) -> Vec<AnomalyRecord> {
    let before = records.len();
    records.retain(|record| !record.reason.is_empty());
    let dropped = before - records.len();
    if dropped > 0 {
        tracing::warn!("Dropped {dropped} anomaly records without a reason");
    }
    records
}

/// Fetch both resources concurrently.
///
/// Waits for both requests to settle. Any failure fails the whole load and
/// the data that did arrive is discarded.
pub async fn fetch_dashboard<S: DataSource>(source: &S) -> Result<Dashboard> {
    tracing::info!("Fetching dashboard data from {}", source.describe());
    let start = std::time::Instant::now();

    let (anomalies, summary) = tokio::join!(source.fetch_anomalies(), source.fetch_summary());

    if let Err(e) = &anomalies {
        tracing::warn!("Anomaly request failed: {e:#}");
    }
    if let Err(e) = &summary {
        tracing::warn!("Summary request failed: {e:#}");
    }

    let anomalies = retain_flagged(anomalies.context("Fetching anomalies")?);
    let summary = summary.context("Fetching summary")?;

    tracing::info!(
        "Fetched {} anomalies and {} top users in {:?}",
        anomalies.len(),
        summary.top_users.len(),
        start.elapsed()
    );
    Ok(Dashboard::new(anomalies, summary))
}
