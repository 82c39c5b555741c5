use bevy::prelude::*;

use crate::components::{
    FlightBody, PhysicsComponent, PlayerController, SpatialComponent, SteeringInput,
};

/// Maps arrow keys / WASD onto the player's steering axes.
///
/// Leaves the axes alone when no keyboard is present, so a host can drive
/// [`SteeringInput`] from another source.
pub fn steering_keyboard_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut query: Query<(&PlayerController, &mut SteeringInput)>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    let axis = |negative: [KeyCode; 2], positive: [KeyCode; 2]| -> f64 {
        let mut value = 0.0;
        if keyboard.any_pressed(negative) {
            value -= 1.0;
        }
        if keyboard.any_pressed(positive) {
            value += 1.0;
        }
        value
    };
    let horizontal = axis(
        [KeyCode::ArrowLeft, KeyCode::KeyA],
        [KeyCode::ArrowRight, KeyCode::KeyD],
    );
    let vertical = axis(
        [KeyCode::ArrowDown, KeyCode::KeyS],
        [KeyCode::ArrowUp, KeyCode::KeyW],
    );

    for (player, mut input) in query.iter_mut() {
        if player.active {
            input.set(horizontal, vertical);
        }
    }
}

/// Replaces last tick's submissions with fresh aerodynamic and steering loads.
pub fn flight_force_system(
    mut query: Query<(
        &FlightBody,
        &SpatialComponent,
        Option<&SteeringInput>,
        &mut PhysicsComponent,
    )>,
) {
    for (body, spatial, input, mut physics) in query.iter_mut() {
        physics.clear_forces();
        let input = input.copied().unwrap_or_default();
        if let Some(aero) = body.step(&input, spatial, &mut physics) {
            if aero.is_stalled() {
                debug!(
                    "Stalled at {:.1} deg angle of attack, applying recovery torque",
                    aero.angle_of_attack
                );
            }
        }
    }
}
