pub mod config;
mod errors;

pub use config::{FlightConfig, GliderConfig, LaunchConfig, PhysicsConfig, StartConfig};
pub use errors::{ConfigError, Result};
