//! Clamped linear ramps from a distance to an output scalar.
//!
//! A [`DistanceCurve`] is defined by a near/far threshold pair and an output
//! range. Distances at or inside `near` pin the ratio to one end of the range,
//! distances at or beyond `far` pin it to the other, and everything between is
//! interpolated linearly.

use crate::error::{ProximityError, Result};

/// Which way the output moves as distance grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `out_min` at `near`, `out_max` at `far` (farther is wetter).
    Increasing,
    /// `out_max` at `near`, `out_min` at `far` (closer is louder).
    Decreasing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceCurve {
    near: f32,
    far: f32,
    out_min: f32,
    out_max: f32,
    direction: Direction,
}

impl DistanceCurve {
    /// Build a curve, rejecting threshold pairs that would divide by zero or
    /// invert the ramp. `label` names the curve in the error.
    pub fn new(
        label: &'static str,
        near: f32,
        far: f32,
        out_min: f32,
        out_max: f32,
        direction: Direction,
    ) -> Result<Self> {
        if !near.is_finite() || !far.is_finite() || far <= near {
            return Err(ProximityError::InvalidThresholds {
                curve: label,
                near,
                far,
            });
        }
        Ok(Self {
            near,
            far,
            out_min,
            out_max,
            direction,
        })
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Interpolation ratio in \[0, 1\] with the direction already applied.
    pub fn ratio(&self, distance: f32) -> f32 {
        let raw = if distance <= self.near {
            0.0
        } else if distance >= self.far {
            1.0
        } else {
            ((distance - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
        };
        match self.direction {
            Direction::Increasing => raw,
            Direction::Decreasing => 1.0 - raw,
        }
    }

    pub fn evaluate(&self, distance: f32) -> f32 {
        lerp(self.out_min, self.out_max, self.ratio(distance))
    }
}

/// Linear interpolation with `t` clamped to \[0, 1\]; both ends are exact.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_thresholds() {
        assert!(DistanceCurve::new("volume", 5.0, 5.0, 0.0, 1.0, Direction::Decreasing).is_err());
        assert!(DistanceCurve::new("volume", 6.0, 5.0, 0.0, 1.0, Direction::Decreasing).is_err());
        assert!(
            DistanceCurve::new("reverb", f32::NAN, 5.0, 0.0, 1.0, Direction::Increasing).is_err()
        );
        assert!(DistanceCurve::new(
            "reverb",
            0.0,
            f32::INFINITY,
            0.0,
            1.0,
            Direction::Increasing
        )
        .is_err());
    }

    #[test]
    fn ratio_hits_boundaries_exactly() {
        let c = DistanceCurve::new("reverb", 3.0, 20.0, 0.0, 1.0, Direction::Increasing).unwrap();
        assert_eq!(c.ratio(0.0), 0.0);
        assert_eq!(c.ratio(3.0), 0.0);
        assert_eq!(c.ratio(20.0), 1.0);
        assert_eq!(c.ratio(500.0), 1.0);
    }

    #[test]
    fn decreasing_curve_flips_ratio() {
        let c = DistanceCurve::new("volume", 2.0, 15.0, 0.0, 1.0, Direction::Decreasing).unwrap();
        assert_eq!(c.ratio(1.0), 1.0);
        assert_eq!(c.ratio(15.0), 0.0);
        assert!((c.ratio(8.5) - 0.5).abs() < 1e-6);
        assert!((c.evaluate(8.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn lerp_clamps_and_is_exact_at_ends() {
        assert_eq!(lerp(-10_000.0, -1_000.0, 0.0), -10_000.0);
        assert_eq!(lerp(-10_000.0, -1_000.0, 1.0), -1_000.0);
        assert_eq!(lerp(0.2, 0.9, 2.0), 0.9);
        assert_eq!(lerp(0.2, 0.9, -1.0), 0.2);
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-6);
    }
}
