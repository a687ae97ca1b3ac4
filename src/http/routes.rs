use crate::adapters::{CarbonIntensityClient, CovidDataClient};
use crate::core::aggregator::RegionDataAggregator;
use crate::domain::model::AggregatedResult;
use crate::utils::error::AggregatorError;
use actix_web::web;
use serde::Deserialize;

pub type Aggregator = RegionDataAggregator<CarbonIntensityClient, CovidDataClient>;

#[derive(Deserialize, Debug)]
struct RegionDataPath {
    regionid: String,
    from_date: String,
    to_date: String,
}

#[tracing::instrument(err, skip(aggregator), level = "info")]
async fn get_region_data(
    path: web::Path<RegionDataPath>,
    aggregator: web::Data<Aggregator>,
) -> Result<web::Json<AggregatedResult>, AggregatorError> {
    let RegionDataPath {
        regionid,
        from_date,
        to_date,
    } = path.into_inner();

    let result = aggregator.aggregate(&regionid, &from_date, &to_date).await?;
    Ok(web::Json(result))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/region-data/{regionid}/{from_date}/{to_date}")
            .route(web::get().to(get_region_data)),
    );
}
