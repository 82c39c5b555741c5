pub mod aerodynamics;
pub mod controller;
pub mod flight;
pub mod launch;
pub mod physics;
pub mod spatial;
pub mod steering;

pub use aerodynamics::{
    signed_angle_deg, AeroForces, AeroModel, CoefficientCurve, Curve, Keyframe, MIN_AIRSPEED,
    STALL_ANGLE_DEG,
};
pub use controller::{PlayerController, SteeringInput};
pub use flight::{FlightBody, FlightPhase};
pub use launch::{
    ping_pong, resolve_launch, ChargingPhase, LaunchCompleted, LaunchController, LaunchOscillator,
    LaunchOutcome, LaunchTriggered, RewardZone,
};
pub use physics::{Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame};
pub use spatial::SpatialComponent;
pub use steering::SteeringController;
