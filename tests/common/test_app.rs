use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use glider::{
    components::{
        FlightBody, LaunchCompleted, LaunchController, LaunchTriggered, PhysicsComponent,
        PlayerController, SpatialComponent, SteeringInput,
    },
    plugins::{GliderPlugin, LaunchSet},
    resources::GliderConfig,
};
use std::time::Duration;

/// Counts `LaunchCompleted` notifications seen by the presentation side.
#[derive(Resource, Default)]
pub struct LaunchNotifications(pub usize);

fn count_launch_notifications(
    mut events: EventReader<LaunchCompleted>,
    mut count: ResMut<LaunchNotifications>,
) {
    count.0 += events.read().count();
}

// Builder for creating a headless test application
pub struct TestAppBuilder {
    config: GliderConfig,
    frame_time: Duration,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: GliderConfig::default(),
            frame_time: Duration::from_millis(20),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GliderConfig) -> Self {
        self.config = config;
        self
    }

    /// Simulated wall-clock time advanced by every `app.update()`
    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(GliderPlugin::new(self.config).expect("test config must be valid"))
            .insert_resource(TimeUpdateStrategy::ManualDuration(self.frame_time))
            .init_resource::<LaunchNotifications>()
            .add_systems(
                Update,
                count_launch_notifications.after(LaunchSet::Resolve),
            );

        // Run an initial update so startup spawns the glider
        app.update();

        let glider = {
            let world = app.world_mut();
            let mut query = world.query_filtered::<Entity, With<PlayerController>>();
            query
                .get_single(world)
                .expect("plugin spawns exactly one glider")
        };

        TestApp { app, glider }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub glider: Entity,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn set_frame_time(&mut self, frame_time: Duration) {
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(frame_time));
    }

    /// Queue a press/tap for the next frame
    pub fn trigger_launch(&mut self) {
        self.app.world_mut().send_event(LaunchTriggered);
    }

    pub fn launch(&self) -> &LaunchController {
        self.app.world().resource::<LaunchController>()
    }

    pub fn launch_mut(&mut self) -> Mut<'_, LaunchController> {
        self.app.world_mut().resource_mut::<LaunchController>()
    }

    pub fn notifications(&self) -> usize {
        self.app.world().resource::<LaunchNotifications>().0
    }

    pub fn body(&self) -> &FlightBody {
        self.component::<FlightBody>()
    }

    pub fn spatial(&self) -> &SpatialComponent {
        self.component::<SpatialComponent>()
    }

    pub fn physics(&self) -> &PhysicsComponent {
        self.component::<PhysicsComponent>()
    }

    pub fn set_steering(&mut self, horizontal: f64, vertical: f64) {
        let glider = self.glider;
        self.app
            .world_mut()
            .get_mut::<SteeringInput>(glider)
            .expect("glider has steering input")
            .set(horizontal, vertical);
    }

    pub fn component<T: Component>(&self) -> &T {
        self.app
            .world()
            .get::<T>(self.glider)
            .expect("glider component missing")
    }
}
