use bevy::prelude::*;

use crate::components::{
    FlightBody, LaunchCompleted, LaunchController, LaunchTriggered, PhysicsComponent,
    PlayerController, SpatialComponent,
};

/// Moves the power bar by this frame's delta. The bar ignores time once frozen.
pub fn launch_bar_system(mut controller: ResMut<LaunchController>, time: Res<Time>) {
    controller.advance(time.delta_secs_f64());
}

/// Turns a fresh left click or the start of a touch into a single launch trigger.
///
/// Input devices are optional so headless hosts can send [`LaunchTriggered`] themselves.
pub fn launch_input_system(
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut triggers: EventWriter<LaunchTriggered>,
) {
    let clicked = mouse.is_some_and(|m| m.just_pressed(MouseButton::Left));
    let tapped = touches.is_some_and(|t| t.any_just_pressed());
    if clicked || tapped {
        triggers.send(LaunchTriggered);
    }
}

/// Resolves the first trigger of the session: freezes the bar, launches the
/// player glider and announces the launch.
pub fn launch_trigger_system(
    mut triggers: EventReader<LaunchTriggered>,
    mut controller: ResMut<LaunchController>,
    mut gliders: Query<(
        &PlayerController,
        &mut FlightBody,
        &mut SpatialComponent,
        &mut PhysicsComponent,
    )>,
    mut completed: EventWriter<LaunchCompleted>,
) {
    if triggers.is_empty() {
        return;
    }
    triggers.clear();

    let Some(outcome) = controller.trigger() else {
        debug!("Launch already resolved, ignoring trigger");
        return;
    };

    if outcome.is_perfect {
        info!("PERFECT LAUNCH! ({})", outcome.classification());
    } else {
        info!(
            "Launch resolved as {} with power {:.2}",
            outcome.classification(),
            outcome.power
        );
    }

    let mut launched = 0;
    for (player, mut body, mut spatial, mut physics) in gliders.iter_mut() {
        if !player.active {
            continue;
        }
        if body.launch(outcome.power, &mut spatial, &mut physics) {
            launched += 1;
        }
    }
    if launched == 0 {
        warn!("Launch resolved but no active glider was released");
    }

    completed.send(LaunchCompleted);
}
