use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Forces and torques submitted for the current step.
///
/// The external rigid-body integrator reads `net_force` / `net_moment` after
/// they have been resolved into the world frame. While kinematic the body is
/// excluded from force-driven motion and submissions are dropped. Release is
/// one-way.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    is_kinematic: bool,
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Lift,
    Drag,
    StallRecovery,
    Steering,
}

impl Default for PhysicsComponent {
    fn default() -> Self {
        Self::kinematic()
    }
}

impl PhysicsComponent {
    /// A body held in place until released.
    pub fn kinematic() -> Self {
        Self {
            is_kinematic: true,
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            forces: Vec::new(),
            moments: Vec::new(),
        }
    }

    pub fn is_kinematic(&self) -> bool {
        self.is_kinematic
    }

    /// Hands the body over to force-driven integration.
    pub fn release(&mut self) {
        self.is_kinematic = false;
    }

    /// Returns `false` and drops the force if the body is kinematic.
    pub fn add_force(&mut self, force: Force) -> bool {
        if self.is_kinematic {
            debug!("Dropping {:?} force on kinematic body", force.category);
            return false;
        }
        self.forces.push(force);
        true
    }

    /// Returns `false` and drops the moment if the body is kinematic.
    pub fn add_moment(&mut self, moment: Moment) -> bool {
        if self.is_kinematic {
            debug!("Dropping {:?} moment on kinematic body", moment.category);
            return false;
        }
        self.moments.push(moment);
        true
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.moments.clear();
        self.net_force = Vector3::zeros();
        self.net_moment = Vector3::zeros();
    }

    pub fn force(&self, category: ForceCategory) -> Option<&Force> {
        self.forces.iter().find(|f| f.category == category)
    }

    pub fn moment(&self, category: ForceCategory) -> Option<&Moment> {
        self.moments.iter().find(|m| m.category == category)
    }
}
