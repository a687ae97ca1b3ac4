use crate::core::request_validator;
use crate::domain::model::{AggregatedResult, AreaType, CovidRecord, RegionDataRequest};
use crate::domain::ports::{CarbonIntensitySource, CovidDataSource};
use crate::domain::region_catalog::RegionCatalog;
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationStage {
    Validating,
    FetchingCarbon,
    FetchingCovidPrimary,
    FetchingCovidFallback,
    Assembled,
    Aborted,
}

impl fmt::Display for AggregationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregationStage::Validating => "validating",
            AggregationStage::FetchingCarbon => "fetching_carbon",
            AggregationStage::FetchingCovidPrimary => "fetching_covid_primary",
            AggregationStage::FetchingCovidFallback => "fetching_covid_fallback",
            AggregationStage::Assembled => "assembled",
            AggregationStage::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Validates a request, then queries both providers one after the other.
///
/// The carbon fetch is fatal on failure. The COVID fetch is tried at region
/// level first and, when that yields nothing, once more at nation level.
pub struct RegionDataAggregator<C: CarbonIntensitySource, V: CovidDataSource> {
    carbon: C,
    covid: V,
}

impl<C: CarbonIntensitySource, V: CovidDataSource> RegionDataAggregator<C, V> {
    pub fn new(carbon: C, covid: V) -> Self {
        Self { carbon, covid }
    }

    pub async fn aggregate(
        &self,
        region_id: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<AggregatedResult> {
        tracing::debug!(stage = %AggregationStage::Validating, region_id, from_date, to_date);
        let request = request_validator::validate(region_id, from_date, to_date).map_err(|e| {
            tracing::info!(stage = %AggregationStage::Aborted, "Rejected request: {}", e);
            e
        })?;

        self.run(request).await
    }

    async fn run(&self, request: RegionDataRequest) -> Result<AggregatedResult> {
        let RegionDataRequest { region, range } = request;
        let area_name = RegionCatalog::area_name_of(region);
        let nation = RegionCatalog::nation_of(region);

        tracing::debug!(stage = %AggregationStage::FetchingCarbon, region = %region);
        let carbon_intensity = self.carbon.fetch(region, range).await.map_err(|e| {
            tracing::error!(stage = %AggregationStage::Aborted, "Carbon intensity fetch failed: {}", e);
            e
        })?;

        tracing::debug!(stage = %AggregationStage::FetchingCovidPrimary, area_name);
        let mut covid_data = self.covid.fetch(AreaType::Region, area_name, range).await;

        if is_empty(&covid_data) {
            tracing::info!(
                stage = %AggregationStage::FetchingCovidFallback,
                "No region data for '{}', falling back to nation '{}'",
                area_name,
                nation
            );
            covid_data = self.covid.fetch(AreaType::Nation, nation, range).await;
        }

        tracing::debug!(
            stage = %AggregationStage::Assembled,
            covid_records = covid_data.as_ref().map_or(0, Vec::len)
        );

        Ok(AggregatedResult {
            carbon_intensity,
            covid_data: covid_data.filter(|records| !records.is_empty()),
        })
    }
}

fn is_empty(data: &Option<Vec<CovidRecord>>) -> bool {
    data.as_ref().map_or(true, Vec::is_empty)
}
