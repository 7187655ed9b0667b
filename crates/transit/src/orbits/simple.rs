use serde::{Deserialize, Serialize};
use units::Time;

use super::{OrbitError, TransitOrbit};
use crate::utils::phase::fold;

/// A strictly periodic transit with constant sky velocity across the chord.
///
/// Useful when only the photometric shape matters and no physical orbit is
/// needed: the companion moves in a straight line at fixed impact parameter,
/// crossing the stellar disk centered on each transit epoch, and sits behind
/// the sky plane outside the transit window. The speed is set so the center
/// crosses the disk chord in exactly `duration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleTransitOrbit {
    period: Time,
    t0: Time,
    duration: Time,
    impact_param: f64,
    speed: f64,
}

impl SimpleTransitOrbit {
    pub fn new(
        period: Time,
        t0: Time,
        duration: Time,
        impact_param: f64,
    ) -> Result<Self, OrbitError> {
        if period.to_days() <= 0.0 {
            return Err(OrbitError::NonPositivePeriod(period.to_days()));
        }
        if duration.to_days() <= 0.0 || duration.to_days() >= period.to_days() {
            return Err(OrbitError::InvalidDuration);
        }
        if !(0.0..1.0).contains(&impact_param) {
            return Err(OrbitError::GrazingImpactParameter(impact_param));
        }

        let half_chord = (1.0 - impact_param * impact_param).sqrt();
        let speed = 2.0 * half_chord / duration.to_days();

        Ok(Self { period, t0, duration, impact_param, speed })
    }

    pub fn period(&self) -> Time {
        self.period
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    pub fn impact_parameter(&self) -> f64 {
        self.impact_param
    }
}

impl TransitOrbit for SimpleTransitOrbit {
    fn position(&self, t: Time) -> [f64; 3] {
        let dt = fold(t.to_days(), self.period.to_days(), self.t0.to_days())
            * self.period.to_days();
        let x = self.speed * dt;
        let z = if 2.0 * dt.abs() <= self.duration.to_days() { 1.0 } else { -1.0 };
        [x, self.impact_param, z]
    }
}
