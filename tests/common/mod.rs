#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

pub use assertions::{assert_no_loads, assert_physics_valid, assert_spatial_valid};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
