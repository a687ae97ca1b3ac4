// Adapters layer: reqwest clients for the two upstream providers.

pub mod carbon_intensity;
pub mod covid;

pub use carbon_intensity::CarbonIntensityClient;
pub use covid::CovidDataClient;
