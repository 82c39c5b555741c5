use nalgebra::Vector3;

use crate::resources::FlightConfig;

/// Maps stick input to a body-frame control torque `(pitch, yaw, roll)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringController {
    pub turn_speed: f64,
    pub roll_speed: f64,
}

impl SteeringController {
    pub fn new(turn_speed: f64, roll_speed: f64) -> Self {
        Self {
            turn_speed,
            roll_speed,
        }
    }

    pub fn from_config(config: &FlightConfig) -> Self {
        Self::new(config.turn_speed, config.roll_speed)
    }

    /// Pushing forward pitches down; turning also rolls into the turn.
    pub fn compute_torque(&self, horizontal: f64, vertical: f64) -> Vector3<f64> {
        let pitch = -vertical * self.turn_speed;
        let yaw = horizontal * self.turn_speed;
        let roll = -horizontal * self.roll_speed;
        Vector3::new(pitch, yaw, roll)
    }
}

impl Default for SteeringController {
    fn default() -> Self {
        Self::from_config(&FlightConfig::default())
    }
}
