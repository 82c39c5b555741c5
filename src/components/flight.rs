use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AeroForces, AeroModel, Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame,
    SpatialComponent, SteeringController, SteeringInput,
};
use crate::resources::FlightConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightPhase {
    #[default]
    Grounded,
    Flying,
}

/// Glider state machine: held on the ground until launched, then driven by
/// the aerodynamic model and player steering every physics tick.
#[derive(Component, Debug, Clone)]
pub struct FlightBody {
    phase: FlightPhase,
    pub aero: AeroModel,
    pub steering: SteeringController,
}

impl FlightBody {
    pub fn new(aero: AeroModel, steering: SteeringController) -> Self {
        Self {
            phase: FlightPhase::Grounded,
            aero,
            steering,
        }
    }

    pub fn from_config(config: &FlightConfig) -> Self {
        Self::new(
            AeroModel::from_config(config),
            SteeringController::from_config(config),
        )
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_flying(&self) -> bool {
        self.phase == FlightPhase::Flying
    }

    /// Releases the body and throws it along its nose with a velocity change of `power`.
    ///
    /// Only valid while grounded; later calls return `false` and leave the body untouched.
    pub fn launch(
        &mut self,
        power: f64,
        spatial: &mut SpatialComponent,
        physics: &mut PhysicsComponent,
    ) -> bool {
        if self.phase == FlightPhase::Flying {
            warn!("Launch requested while already flying, ignoring");
            return false;
        }
        let power = if power.is_finite() {
            power.clamp(0.0, 1.0)
        } else {
            0.0
        };

        self.phase = FlightPhase::Flying;
        physics.release();
        spatial.apply_velocity_change(spatial.forward() * power);
        info!("Glider launched with power {:.2}", power);
        true
    }

    /// Computes this tick's aerodynamic and steering loads and submits them.
    ///
    /// Does nothing while grounded. Returns the aerodynamic breakdown when flying.
    /// Loads are rates; the host integrator owns the timestep.
    pub fn step(
        &self,
        input: &SteeringInput,
        spatial: &SpatialComponent,
        physics: &mut PhysicsComponent,
    ) -> Option<AeroForces> {
        if self.phase == FlightPhase::Grounded {
            return None;
        }

        let aero = self.aero.compute_forces(&spatial.velocity, &spatial.attitude);
        submit_force(physics, aero.lift, ForceCategory::Lift);
        submit_force(physics, aero.drag, ForceCategory::Drag);
        submit_moment(physics, aero.stall_torque, ForceCategory::StallRecovery);

        let control = self
            .steering
            .compute_torque(input.horizontal(), input.vertical());
        submit_moment(physics, control, ForceCategory::Steering);

        Some(aero)
    }
}

impl Default for FlightBody {
    fn default() -> Self {
        Self::from_config(&FlightConfig::default())
    }
}

fn submit_force(physics: &mut PhysicsComponent, vector: Vector3<f64>, category: ForceCategory) {
    if vector.norm_squared() > 1e-12 {
        physics.add_force(Force {
            vector,
            frame: ReferenceFrame::Inertial,
            category,
        });
    }
}

fn submit_moment(physics: &mut PhysicsComponent, vector: Vector3<f64>, category: ForceCategory) {
    if vector.norm_squared() > 1e-12 {
        physics.add_moment(Moment {
            vector,
            frame: ReferenceFrame::Body,
            category,
        });
    }
}
