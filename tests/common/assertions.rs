use glider::components::{PhysicsComponent, SpatialComponent};
use nalgebra::Vector3;

/// Assert that a spatial component's state is valid
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite"
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite"
    );
    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite"
    );
}

/// Assert that the published totals are finite
#[track_caller]
pub fn assert_physics_valid(physics: &PhysicsComponent) {
    assert!(
        physics.net_force.iter().all(|x| x.is_finite()),
        "Net force contains non-finite values"
    );
    assert!(
        physics.net_moment.iter().all(|x| x.is_finite()),
        "Net moment contains non-finite values"
    );
}

/// Assert that nothing has been submitted to the body
#[track_caller]
pub fn assert_no_loads(physics: &PhysicsComponent) {
    assert!(physics.forces.is_empty(), "Unexpected forces: {:?}", physics.forces);
    assert!(
        physics.moments.is_empty(),
        "Unexpected moments: {:?}",
        physics.moments
    );
    assert_eq!(physics.net_force, Vector3::zeros());
    assert_eq!(physics.net_moment, Vector3::zeros());
}
