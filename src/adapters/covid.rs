use crate::config::CovidConfig;
use crate::domain::model::{AreaType, CovidRecord, DateRange};
use crate::domain::ports::CovidDataSource;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Output key -> upstream metric, in the order they are sent.
const STRUCTURE: [(&str, &str); 7] = [
    ("date", "date"),
    ("name", "areaName"),
    ("code", "areaCode"),
    ("dailyCases", "newCasesByPublishDate"),
    ("cumulativeCases", "cumCasesByPublishDate"),
    ("dailyDeaths", "newDeaths28DaysByPublishDate"),
    ("cumulativeDeaths", "cumDeaths28DaysByPublishDate"),
];

#[derive(Debug, Deserialize)]
struct CovidResponse {
    #[serde(default)]
    data: Vec<CovidRecord>,
}

pub struct CovidDataClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl CovidDataClient {
    pub fn new(client: Client, config: &CovidConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    pub fn build_filters(area_type: AreaType, area_name: &str, range: DateRange) -> String {
        [
            format!("areaType={}", area_type),
            format!("areaName={}", area_name),
            format!("date>={}", range.from_param()),
            format!("date<={}", range.to_param()),
        ]
        .join(";")
    }

    /// Compact JSON object, keys in projection order.
    pub fn build_structure() -> String {
        let fields: Vec<String> = STRUCTURE
            .iter()
            .map(|(key, metric)| {
                format!(
                    "{}:{}",
                    serde_json::Value::from(*key),
                    serde_json::Value::from(*metric)
                )
            })
            .collect();
        format!("{{{}}}", fields.join(","))
    }
}

#[async_trait::async_trait]
impl CovidDataSource for CovidDataClient {
    async fn fetch(
        &self,
        area_type: AreaType,
        area_name: &str,
        range: DateRange,
    ) -> Option<Vec<CovidRecord>> {
        let filters = Self::build_filters(area_type, area_name, range);
        let structure = Self::build_structure();
        tracing::debug!("Requesting COVID data with filters: {}", filters);

        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[("filters", filters.as_str()), ("structure", structure.as_str())])
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("COVID data request for {} '{}' failed: {}", area_type, area_name, e);
                return None;
            }
        };

        let status = response.status();
        if status == StatusCode::NO_CONTENT || !status.is_success() {
            tracing::info!(
                "No COVID data for {} '{}' (status {})",
                area_type,
                area_name,
                status
            );
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read COVID data response: {}", e);
                return None;
            }
        };
        if body.trim().is_empty() {
            tracing::info!("Empty COVID data response for {} '{}'", area_type, area_name);
            return None;
        }

        match serde_json::from_str::<CovidResponse>(&body) {
            Ok(parsed) if parsed.data.is_empty() => {
                tracing::info!("COVID provider returned no records for {} '{}'", area_type, area_name);
                None
            }
            Ok(parsed) => {
                tracing::debug!("Received {} COVID records", parsed.data.len());
                Some(parsed.data)
            }
            Err(e) => {
                tracing::warn!("Unexpected COVID data response: {}", e);
                None
            }
        }
    }
}
