use bevy::prelude::*;

use crate::resources::{ConfigError, LaunchConfig};

/// Reflects `t` back and forth between `0` and `length`.
///
/// Evaluated from `t` alone with modulo-and-reflect arithmetic, so long sessions
/// do not accumulate drift.
pub fn ping_pong(t: f64, length: f64) -> f64 {
    if length <= 0.0 {
        return 0.0;
    }
    let period = length * 2.0;
    let wrapped = (t - (t / period).floor() * period).clamp(0.0, period);
    length - (wrapped - length).abs()
}

/// Whether the power bar is still moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChargingPhase {
    #[default]
    Active,
    Frozen,
}

/// Triangular timing wave driving the launch power bar.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOscillator {
    elapsed: f64,
    speed: f64,
    phase: ChargingPhase,
}

impl LaunchOscillator {
    /// Negative speeds are treated as zero, which pins the bar at 0.
    pub fn new(speed: f64) -> Self {
        Self {
            elapsed: 0.0,
            speed: speed.max(0.0),
            phase: ChargingPhase::Active,
        }
    }

    /// Moves the bar forward by `dt` seconds. No-op once frozen.
    pub fn advance(&mut self, dt: f64) {
        if self.phase == ChargingPhase::Frozen {
            return;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Current bar position in `[0, 1]`.
    pub fn value(&self) -> f64 {
        ping_pong(self.elapsed * self.speed, 1.0)
    }

    pub fn freeze(&mut self) {
        self.phase = ChargingPhase::Frozen;
    }

    pub fn phase(&self) -> ChargingPhase {
        self.phase
    }

    pub fn is_frozen(&self) -> bool {
        self.phase == ChargingPhase::Frozen
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

/// Sub-range of the bar rewarded with full power. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardZone {
    start: f64,
    end: f64,
}

impl RewardZone {
    pub fn new(start: f64, end: f64) -> Result<Self, ConfigError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "reward zone bounds must be finite, got [{start}, {end}]"
            )));
        }
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return Err(ConfigError::ValidationError(format!(
                "reward zone [{start}, {end}] must lie within [0, 1]"
            )));
        }
        if start > end {
            return Err(ConfigError::ValidationError(format!(
                "reward zone start {start} is greater than end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

impl Default for RewardZone {
    fn default() -> Self {
        Self {
            start: 0.85,
            end: 0.95,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchOutcome {
    pub power: f64,
    pub is_perfect: bool,
}

impl LaunchOutcome {
    /// Human readable label used for telemetry.
    pub fn classification(&self) -> &'static str {
        if self.is_perfect {
            "perfect"
        } else {
            "good-enough"
        }
    }
}

/// Maps a bar value to launch power. Values inside the zone get full power.
pub fn resolve_launch(value: f64, zone: &RewardZone) -> LaunchOutcome {
    if zone.contains(value) {
        LaunchOutcome {
            power: 1.0,
            is_perfect: true,
        }
    } else {
        LaunchOutcome {
            power: value,
            is_perfect: false,
        }
    }
}

/// Session-wide launch state: the power bar, its reward zone and the resolved outcome.
#[derive(Resource, Debug, Clone)]
pub struct LaunchController {
    oscillator: LaunchOscillator,
    zone: RewardZone,
    outcome: Option<LaunchOutcome>,
}

impl LaunchController {
    pub fn new(oscillator: LaunchOscillator, zone: RewardZone) -> Self {
        Self {
            oscillator,
            zone,
            outcome: None,
        }
    }

    pub fn from_config(config: &LaunchConfig) -> Result<Self, ConfigError> {
        let zone = RewardZone::new(config.perfect_zone_start, config.perfect_zone_end)?;
        Ok(Self::new(LaunchOscillator::new(config.bar_speed), zone))
    }

    pub fn oscillator(&self) -> &LaunchOscillator {
        &self.oscillator
    }

    pub fn zone(&self) -> &RewardZone {
        &self.zone
    }

    /// Moves the bar by `dt` seconds until a trigger freezes it.
    pub fn advance(&mut self, dt: f64) {
        self.oscillator.advance(dt);
    }

    /// Freezes the bar and resolves its current value.
    ///
    /// Returns `None` when the bar is already frozen, so a second trigger
    /// in the same session does nothing.
    pub fn trigger(&mut self) -> Option<LaunchOutcome> {
        if self.oscillator.is_frozen() {
            return None;
        }
        self.oscillator.freeze();
        let outcome = resolve_launch(self.oscillator.value(), &self.zone);
        self.outcome = Some(outcome);
        Some(outcome)
    }

    pub fn outcome(&self) -> Option<LaunchOutcome> {
        self.outcome
    }
}

impl Default for LaunchController {
    fn default() -> Self {
        Self::new(LaunchOscillator::new(1.5), RewardZone::default())
    }
}

/// Player pressed or tapped to release the glider.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LaunchTriggered;

/// Fired once, after the glider has been launched.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LaunchCompleted;
