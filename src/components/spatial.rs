use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::StartConfig;

/// Kinematic state of a body, shared with the external integrator.
///
/// Body axes are +X right, +Y up, +Z forward.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component at rest with the given pose
    pub fn new(position: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            attitude,
            ..Default::default()
        }
    }

    /// Spawn pose from heading and pitch given in degrees
    pub fn from_start(start: &StartConfig) -> Self {
        let heading = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), start.heading.to_radians());
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -start.pitch.to_radians());
        Self::new(start.position, heading * pitch)
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    /// Instantaneous change of velocity, independent of mass
    pub fn apply_velocity_change(&mut self, delta: Vector3<f64>) {
        self.velocity += delta;
    }
}
