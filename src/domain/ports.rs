use crate::domain::model::{AreaType, CarbonIntensityRecord, CovidRecord, DateRange};
use crate::domain::region_catalog::RegionId;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CarbonIntensitySource: Send + Sync {
    /// Any failure here aborts the aggregation.
    async fn fetch(&self, region: RegionId, range: DateRange) -> Result<CarbonIntensityRecord>;
}

#[async_trait]
pub trait CovidDataSource: Send + Sync {
    /// `None` means the provider had nothing for this area; it is not an error.
    async fn fetch(
        &self,
        area_type: AreaType,
        area_name: &str,
        range: DateRange,
    ) -> Option<Vec<CovidRecord>>;
}
