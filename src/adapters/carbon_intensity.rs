use crate::config::CarbonIntensityConfig;
use crate::domain::model::{CarbonIntensityRecord, DateRange};
use crate::domain::ports::CarbonIntensitySource;
use crate::domain::region_catalog::RegionId;
use crate::utils::error::{AggregatorError, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

pub const PROVIDER_NAME: &str = "Carbon Intensity";

pub struct CarbonIntensityClient {
    client: Client,
    url_template: String,
    timeout: Duration,
}

impl CarbonIntensityClient {
    pub fn new(client: Client, config: &CarbonIntensityConfig) -> Self {
        Self {
            client,
            url_template: config.url_template.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    pub fn build_url(&self, region: RegionId, range: DateRange) -> String {
        self.url_template
            .replace("{from}", &range.from_param())
            .replace("{to}", &range.to_param())
            .replace("{regionid}", region.as_str())
    }
}

#[async_trait::async_trait]
impl CarbonIntensitySource for CarbonIntensityClient {
    async fn fetch(&self, region: RegionId, range: DateRange) -> Result<CarbonIntensityRecord> {
        let url = self.build_url(region, range);
        tracing::debug!("Requesting carbon intensity data: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Carbon intensity response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                "Failed to fetch Carbon Intensity data. Status: {}, Response: {}",
                status,
                body
            );
            return Err(AggregatorError::UpstreamError {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let data: CarbonIntensityRecord = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                "Carbon Intensity response is not valid JSON: {}. Response: {}",
                e,
                body
            );
            AggregatorError::SerializationError(e)
        })?;

        Ok(data)
    }
}
