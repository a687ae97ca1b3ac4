pub mod aggregator;
pub mod request_validator;
