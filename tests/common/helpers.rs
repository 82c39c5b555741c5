use glider::resources::GliderConfig;
use std::path::PathBuf;

use super::TestApp;

/// Bar time at which a 1.5 speed bar reads 0.9, inside the default perfect zone
pub const PERFECT_BAR_TIME: f64 = 0.6;

pub fn bundled_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs/paper_plane.yaml")
}

pub fn create_test_config() -> GliderConfig {
    GliderConfig::default()
}

/// Parks the bar at `bar_time` seconds, triggers and runs the resolving frame
pub fn launch_at(test_app: &mut TestApp, bar_time: f64) {
    test_app.launch_mut().advance(bar_time);
    test_app.trigger_launch();
    test_app.run_frame();
}

/// Waits for a specific condition to be met within a maximum number of steps
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&TestApp) -> bool,
{
    for _ in 0..max_steps {
        if condition(test_app) {
            return true;
        }
        test_app.run_frame();
    }
    condition(test_app)
}
