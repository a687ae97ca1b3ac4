use crate::domain::region_catalog::RegionId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format accepted on the inbound route and sent to both providers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive date range that already passed request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn from_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn to_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDataRequest {
    pub region: RegionId,
    pub range: DateRange,
}

/// COVID API granularity selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaType {
    Region,
    Nation,
}

impl AreaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Region => "region",
            AreaType::Nation => "nation",
        }
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Carbon Intensity payload, passed through untouched.
pub type CarbonIntensityRecord = serde_json::Value;

/// One row of the fixed COVID projection.
///
/// Field names follow the keys of the `structure` parameter sent upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CovidRecord {
    pub date: NaiveDate,
    pub name: String,
    pub code: String,
    pub daily_cases: Option<i64>,
    pub cumulative_cases: Option<i64>,
    pub daily_deaths: Option<i64>,
    pub cumulative_deaths: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedResult {
    pub carbon_intensity: CarbonIntensityRecord,
    pub covid_data: Option<Vec<CovidRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covid_record_uses_projection_keys() {
        let record: CovidRecord = serde_json::from_value(serde_json::json!({
            "date": "2021-01-05",
            "name": "London",
            "code": "E12000007",
            "dailyCases": 12000,
            "cumulativeCases": 500000,
            "dailyDeaths": null,
            "cumulativeDeaths": 9000
        }))
        .unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2021, 1, 5).unwrap());
        assert_eq!(record.daily_cases, Some(12000));
        assert_eq!(record.daily_deaths, None);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date"], "2021-01-05");
        assert_eq!(value["cumulativeDeaths"], 9000);
    }

    #[test]
    fn test_aggregated_result_serializes_null_covid_data() {
        let result = AggregatedResult {
            carbon_intensity: serde_json::json!({"data": []}),
            covid_data: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["carbon_intensity"], serde_json::json!({"data": []}));
        assert!(value["covid_data"].is_null());
    }

    #[test]
    fn test_date_range_params() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2021, 1, 10).unwrap(),
        };
        assert_eq!(range.from_param(), "2021-01-01");
        assert_eq!(range.to_param(), "2021-01-10");
    }
}
