mod glider;

pub use glider::{FlightSet, GliderPlugin, LaunchSet};
