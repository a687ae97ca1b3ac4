// Domain layer: region catalog, request/response models and provider ports.

pub mod model;
pub mod ports;
pub mod region_catalog;
