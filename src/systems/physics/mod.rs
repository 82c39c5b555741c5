mod force_calculator;

pub use force_calculator::{calculate_net_forces_moments, force_calculator_system};
