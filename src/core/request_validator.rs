use crate::domain::model::{DateRange, RegionDataRequest, DATE_FORMAT};
use crate::domain::region_catalog::RegionId;
use crate::utils::error::ValidationError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Widest accepted distance between start and end, in days.
pub const MAX_RANGE_DAYS: i64 = 59;

/// Validates the raw route parameters.
///
/// Checks run in a fixed order and the first failure wins, so callers always
/// see the same reason for the same input. No I/O happens here.
pub fn validate(
    region_id: &str,
    from_date: &str,
    to_date: &str,
) -> Result<RegionDataRequest, ValidationError> {
    if region_id.is_empty() || from_date.is_empty() || to_date.is_empty() {
        return Err(ValidationError::MissingParameter);
    }

    let region = RegionId::parse(region_id).ok_or(ValidationError::UnknownRegion)?;

    let start = parse_date(from_date)?;
    let end = parse_date(to_date)?;

    if start == end {
        return Err(ValidationError::DegenerateRange);
    }
    if end < start {
        return Err(ValidationError::InvertedRange);
    }
    if (end - start).num_days() > MAX_RANGE_DAYS {
        return Err(ValidationError::RangeTooWide);
    }

    Ok(RegionDataRequest {
        region,
        range: DateRange { start, end },
    })
}

// chrono 會略過空白與正負號，先檢查字串形狀；月、日允許單一位數
fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").unwrap())
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    if !date_shape().is_match(raw) {
        return Err(ValidationError::MalformedDate);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::MalformedDate)
}
