use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::Curve;
use crate::resources::errors::{ConfigError, Result};

/// Top level configuration, set once before the session starts.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GliderConfig {
    pub launch: LaunchConfig,
    pub flight: FlightConfig,
    pub start: StartConfig,
    pub physics: PhysicsConfig,
}

/// Power bar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// How fast the bar sweeps from 0 to 1
    pub bar_speed: f64,
    pub perfect_zone_start: f64,
    pub perfect_zone_end: f64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            bar_speed: 1.5,
            perfect_zone_start: 0.85,
            perfect_zone_end: 0.95,
        }
    }
}

/// Steering and aerodynamic tunables for the glider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub turn_speed: f64,
    pub roll_speed: f64,
    pub lift_multiplier: f64,
    pub drag_multiplier: f64,
    /// Nose-down torque applied while stalled
    pub stall_recovery_torque: f64,
    /// Lift coefficient against angle of attack in degrees
    pub lift_curve: Curve,
    /// Drag coefficient against angle of attack in degrees
    pub drag_curve: Curve,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            turn_speed: 2.0,
            roll_speed: 3.0,
            lift_multiplier: 10.0,
            drag_multiplier: 1.0,
            stall_recovery_torque: 0.5,
            lift_curve: Curve::paper_plane_lift(),
            drag_curve: Curve::paper_plane_drag(),
        }
    }
}

/// Pose the glider is spawned in before launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub position: Vector3<f64>,
    /// Degrees about the up axis
    pub heading: f64,
    /// Degrees, positive is nose up
    pub pitch: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 1.5, 0.0),
            heading: 0.0,
            pitch: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed simulation step [s]
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { timestep: 0.02 }
    }
}

impl GliderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: GliderConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: GliderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let launch = &self.launch;
        non_negative("launch.bar_speed", launch.bar_speed)?;
        crate::components::RewardZone::new(launch.perfect_zone_start, launch.perfect_zone_end)?;

        let flight = &self.flight;
        non_negative("flight.turn_speed", flight.turn_speed)?;
        non_negative("flight.roll_speed", flight.roll_speed)?;
        non_negative("flight.lift_multiplier", flight.lift_multiplier)?;
        non_negative("flight.drag_multiplier", flight.drag_multiplier)?;
        non_negative("flight.stall_recovery_torque", flight.stall_recovery_torque)?;
        flight.lift_curve.validate("flight.lift_curve")?;
        flight.drag_curve.validate("flight.drag_curve")?;

        let start = &self.start;
        if !start.position.iter().all(|x| x.is_finite())
            || !start.heading.is_finite()
            || !start.pitch.is_finite()
        {
            return Err(ConfigError::ValidationError(
                "start pose must be finite".to_string(),
            ));
        }

        if !(self.physics.timestep.is_finite() && self.physics.timestep > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "physics.timestep must be positive, got {}",
                self.physics.timestep
            )));
        }

        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} must be a finite, non-negative number, got {value}"
        )))
    }
}
