use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{PhysicsComponent, ReferenceFrame, SpatialComponent};

/// Resolves every submitted force and moment into the world frame and sums them.
///
/// Returns `(net_force, net_moment)`; body-frame vectors are rotated by `attitude`.
pub fn calculate_net_forces_moments(
    physics: &PhysicsComponent,
    attitude: &UnitQuaternion<f64>,
) -> (Vector3<f64>, Vector3<f64>) {
    let to_world = |vector: &Vector3<f64>, frame: ReferenceFrame| match frame {
        ReferenceFrame::Body => attitude * vector,
        ReferenceFrame::Inertial => *vector,
    };

    let net_force = physics
        .forces
        .iter()
        .fold(Vector3::zeros(), |acc, f| acc + to_world(&f.vector, f.frame));
    let net_moment = physics
        .moments
        .iter()
        .fold(Vector3::zeros(), |acc, m| acc + to_world(&m.vector, m.frame));

    (net_force, net_moment)
}

/// Publishes this tick's totals for the external rigid-body integrator.
pub fn force_calculator_system(mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>) {
    for (mut physics, spatial) in query.iter_mut() {
        if physics.is_kinematic() {
            physics.net_force = Vector3::zeros();
            physics.net_moment = Vector3::zeros();
            continue;
        }
        let (net_force, net_moment) = calculate_net_forces_moments(&physics, &spatial.attitude);
        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}
