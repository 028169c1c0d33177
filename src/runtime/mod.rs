pub mod lifetime;
pub mod telemetry;
