use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::resources::{ConfigError, FlightConfig};

/// Below this airspeed no direction of travel is defined and no forces are produced [m/s]
pub const MIN_AIRSPEED: f64 = 0.1;

/// Angle of attack beyond which the stall recovery torque kicks in [deg]
pub const STALL_ANGLE_DEG: f64 = 30.0;

/// Maps an angle of attack in degrees to an aerodynamic coefficient.
///
/// Implemented for plain closures and for the keyframed [`Curve`], so
/// alternative interpolation schemes can be dropped in without touching
/// [`AeroModel`].
pub trait CoefficientCurve: Send + Sync {
    fn evaluate(&self, angle_deg: f64) -> f64;
}

impl<F> CoefficientCurve for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, angle_deg: f64) -> f64 {
        self(angle_deg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Angle of attack [deg]
    pub angle: f64,
    pub value: f64,
}

#[derive(Deserialize)]
struct CurveKeys {
    #[serde(default)]
    keys: Vec<Keyframe>,
}

impl From<CurveKeys> for Curve {
    fn from(raw: CurveKeys) -> Self {
        Curve::new(raw.keys)
    }
}

/// Piecewise-linear curve through a set of keyframes.
///
/// Holds the first/last value outside the keyed range. An empty curve evaluates to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CurveKeys")]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.angle.total_cmp(&b.angle));
        Self { keys }
    }

    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self::new(
            points
                .iter()
                .map(|&(angle, value)| Keyframe { angle, value })
                .collect(),
        )
    }

    pub fn constant(value: f64) -> Self {
        Self::from_points(&[(0.0, value)])
    }

    /// Lift builds up to ~20 degrees either side, then collapses.
    pub fn paper_plane_lift() -> Self {
        Self::from_points(&[
            (-180.0, 0.0),
            (-90.0, 0.0),
            (-35.0, -0.5),
            (-20.0, -1.0),
            (0.0, 0.1),
            (20.0, 1.0),
            (35.0, 0.5),
            (90.0, 0.0),
            (180.0, 0.0),
        ])
    }

    /// Small drag when flying nose-first, broadside drag near +/-90 degrees.
    pub fn paper_plane_drag() -> Self {
        Self::from_points(&[
            (-180.0, 0.1),
            (-90.0, 1.2),
            (0.0, 0.02),
            (90.0, 1.2),
            (180.0, 0.1),
        ])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self
            .keys
            .iter()
            .all(|k| k.angle.is_finite() && k.value.is_finite())
        {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(format!(
                "{name} contains non-finite keyframes"
            )))
        }
    }
}

impl CoefficientCurve for Curve {
    fn evaluate(&self, angle_deg: f64) -> f64 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if angle_deg <= first.angle {
            return first.value;
        }
        if angle_deg >= last.angle {
            return last.value;
        }

        // first key with angle > angle_deg; guaranteed to be in 1..len
        let upper = self.keys.partition_point(|k| k.angle <= angle_deg);
        let a = self.keys[upper - 1];
        let b = self.keys[upper];
        let span = b.angle - a.angle;
        if span <= f64::EPSILON {
            return b.value;
        }
        a.value + (b.value - a.value) * (angle_deg - a.angle) / span
    }
}

/// Signed angle in degrees from `from` to `to`, signed around `axis`.
///
/// The magnitude is the full angle between the two vectors; the sign is
/// positive when `cross(from, to)` points along `axis` (zero counts as positive).
/// Result lies in `(-180, 180]`.
pub fn signed_angle_deg(from: &Vector3<f64>, to: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let denominator = (from.norm_squared() * to.norm_squared()).sqrt();
    if denominator < 1e-15 {
        return 0.0;
    }
    let cos = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    let angle = cos.acos().to_degrees();
    if axis.dot(&from.cross(to)) < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Forces are world frame, the stall torque is body frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub stall_torque: Vector3<f64>,
    pub angle_of_attack: f64,
}

impl AeroForces {
    pub fn zero() -> Self {
        Self {
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
            stall_torque: Vector3::zeros(),
            angle_of_attack: 0.0,
        }
    }

    pub fn is_stalled(&self) -> bool {
        self.angle_of_attack.abs() > STALL_ANGLE_DEG
    }
}

/// Curve-based lift/drag model with a threshold stall recovery torque.
#[derive(Clone)]
pub struct AeroModel {
    pub lift_curve: Arc<dyn CoefficientCurve>,
    pub drag_curve: Arc<dyn CoefficientCurve>,
    pub lift_multiplier: f64,
    pub drag_multiplier: f64,
    pub stall_recovery_torque: f64,
}

impl fmt::Debug for AeroModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AeroModel")
            .field("lift_multiplier", &self.lift_multiplier)
            .field("drag_multiplier", &self.drag_multiplier)
            .field("stall_recovery_torque", &self.stall_recovery_torque)
            .finish_non_exhaustive()
    }
}

impl AeroModel {
    pub fn from_config(config: &FlightConfig) -> Self {
        Self {
            lift_curve: Arc::new(config.lift_curve.clone()),
            drag_curve: Arc::new(config.drag_curve.clone()),
            lift_multiplier: config.lift_multiplier,
            drag_multiplier: config.drag_multiplier,
            stall_recovery_torque: config.stall_recovery_torque,
        }
    }

    /// Lift, drag and stall torque for a body moving at `velocity` (world frame)
    /// with `attitude` rotating body axes (+X right, +Y up, +Z forward) into the world.
    pub fn compute_forces(
        &self,
        velocity: &Vector3<f64>,
        attitude: &UnitQuaternion<f64>,
    ) -> AeroForces {
        let speed_sq = velocity.norm_squared();
        if speed_sq < MIN_AIRSPEED * MIN_AIRSPEED {
            return AeroForces::zero();
        }
        let direction = velocity / speed_sq.sqrt();

        let forward = attitude * Vector3::z();
        let right = attitude * Vector3::x();

        let angle_of_attack = signed_angle_deg(&forward, velocity, &right);

        let lift_coefficient = self.lift_curve.evaluate(angle_of_attack);
        let lift_direction = direction.cross(&right);
        let lift = lift_direction * (lift_coefficient * speed_sq * self.lift_multiplier);

        let drag_coefficient = self.drag_curve.evaluate(angle_of_attack);
        let drag = -direction * (drag_coefficient * speed_sq * self.drag_multiplier);

        // Positive torque about +X pitches the nose down, reducing a positive angle of attack
        let stall_torque = if angle_of_attack.abs() > STALL_ANGLE_DEG {
            Vector3::x() * (self.stall_recovery_torque * angle_of_attack.signum())
        } else {
            Vector3::zeros()
        };

        AeroForces {
            lift,
            drag,
            stall_torque,
            angle_of_attack,
        }
    }
}

impl Default for AeroModel {
    fn default() -> Self {
        Self::from_config(&FlightConfig::default())
    }
}
