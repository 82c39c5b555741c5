use bevy::prelude::*;

use crate::components::{
    FlightBody, LaunchCompleted, LaunchController, LaunchTriggered, PhysicsComponent,
    PlayerController, SpatialComponent, SteeringInput,
};
use crate::resources::{ConfigError, GliderConfig};
use crate::systems::{
    flight_force_system, force_calculator_system, launch_bar_system, launch_input_system,
    launch_trigger_system, steering_keyboard_system,
};

/// Per-frame launch stages: the bar moves before the trigger is read.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum LaunchSet {
    Advance,
    Input,
    Resolve,
}

/// Fixed-step flight stages.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Forces,
    Accumulate,
}

/// Timed launch plus paper-plane flight model.
///
/// Spawns one player glider at the configured start pose, drives the power bar
/// every frame and the flight forces every fixed tick.
pub struct GliderPlugin {
    config: GliderConfig,
    launch: LaunchController,
}

impl GliderPlugin {
    /// Rejects invalid configuration before anything is scheduled.
    pub fn new(config: GliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let launch = LaunchController::from_config(&config.launch)?;
        Ok(Self { config, launch })
    }

    pub fn config(&self) -> &GliderConfig {
        &self.config
    }

    fn spawn_glider(mut commands: Commands, config: Res<GliderConfig>) {
        let entity = commands
            .spawn((
                FlightBody::from_config(&config.flight),
                SpatialComponent::from_start(&config.start),
                PhysicsComponent::kinematic(),
                SteeringInput::default(),
                PlayerController::new(),
                Name::new("Paper Plane"),
            ))
            .id();
        info!("Spawned glider {:?}, waiting for launch", entity);
    }
}

impl Default for GliderPlugin {
    fn default() -> Self {
        Self {
            config: GliderConfig::default(),
            launch: LaunchController::default(),
        }
    }
}

impl Plugin for GliderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.launch.clone())
            .add_event::<LaunchTriggered>()
            .add_event::<LaunchCompleted>()
            .insert_resource(Time::<Fixed>::from_seconds(self.config.physics.timestep))
            .configure_sets(
                Update,
                (LaunchSet::Advance, LaunchSet::Input, LaunchSet::Resolve).chain(),
            )
            .configure_sets(
                FixedUpdate,
                (FlightSet::Input, FlightSet::Forces, FlightSet::Accumulate).chain(),
            )
            .add_systems(Startup, Self::spawn_glider)
            .add_systems(
                Update,
                (
                    launch_bar_system.in_set(LaunchSet::Advance),
                    launch_input_system.in_set(LaunchSet::Input),
                    launch_trigger_system.in_set(LaunchSet::Resolve),
                ),
            )
            .add_systems(
                FixedUpdate,
                (
                    steering_keyboard_system.in_set(FlightSet::Input),
                    flight_force_system.in_set(FlightSet::Forces),
                    force_calculator_system.in_set(FlightSet::Accumulate),
                ),
            );
    }
}
