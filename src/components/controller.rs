use bevy::prelude::*;

/// Marks the glider that receives launch and steering input.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Stick axes sampled once per physics tick, each in `[-1, 1]`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct SteeringInput {
    horizontal: f64,
    vertical: f64,
}

impl SteeringInput {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        let mut input = Self::default();
        input.set(horizontal, vertical);
        input
    }

    /// Clamps both axes into `[-1, 1]`; NaN reads as centred.
    pub fn set(&mut self, horizontal: f64, vertical: f64) {
        self.horizontal = clamp_axis(horizontal);
        self.vertical = clamp_axis(vertical);
    }

    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }

    pub fn vertical(&self) -> f64 {
        self.vertical
    }
}

fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
