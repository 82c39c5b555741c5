//! Timed launch and paper-plane flight model.
//!
//! A power bar oscillates until the player taps; the captured value becomes the
//! launch power of a glider that then flies under curve-based lift and drag,
//! a stall recovery torque and player steering. Rigid-body integration is left
//! to the host: this crate computes and submits forces and torques only.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
