pub mod metrics;
pub mod params;
pub mod validate;
