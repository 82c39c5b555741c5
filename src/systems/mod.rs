mod flight;
mod launch;
pub mod physics;

pub use flight::{flight_force_system, steering_keyboard_system};
pub use launch::{launch_bar_system, launch_input_system, launch_trigger_system};
pub use physics::{calculate_net_forces_moments, force_calculator_system};
