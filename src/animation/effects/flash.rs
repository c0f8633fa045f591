//! Flash-pulse policy.

use glam::Vec3;

use super::traits::Effect;
use crate::mobject::Mobject;
use crate::util::color::WHITE;
use crate::util::easing::RateFunction;

/// Configuration for [`Flash`].
///
/// Defaults: white pulse, compression factor 0.01, 0.1 second run time,
/// identity rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashConfig {
    /// Pulse color applied to the intermediate shape.
    pub color: Vec3,
    /// Peak blend factor reached at the midpoint of the pulse.
    pub slow_factor: f32,
    /// Total run duration in seconds.
    pub run_time: f32,
    /// Progress-remapping function.
    pub rate: RateFunction,
}

impl FlashConfig {
    /// Default peak blend factor.
    pub const DEFAULT_SLOW_FACTOR: f32 = 0.01;
    /// Default run duration in seconds.
    pub const DEFAULT_RUN_TIME: f32 = 0.1;

    /// Replace the pulse color.
    #[must_use]
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Replace the peak blend factor.
    #[must_use]
    pub fn with_slow_factor(mut self, slow_factor: f32) -> Self {
        self.slow_factor = slow_factor;
        self
    }

    /// Replace the run duration.
    #[must_use]
    pub fn with_run_time(mut self, run_time: f32) -> Self {
        self.run_time = run_time;
        self
    }

    /// Replace the rate function.
    #[must_use]
    pub fn with_rate(mut self, rate: RateFunction) -> Self {
        self.rate = rate;
        self
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            color: WHITE,
            slow_factor: Self::DEFAULT_SLOW_FACTOR,
            run_time: Self::DEFAULT_RUN_TIME,
            rate: RateFunction::DEFAULT,
        }
    }
}

/// Flash-pulse policy: the object bulges toward an expanded replica at
/// the midpoint of the run and returns to its start state at both ends.
#[derive(Debug, Clone)]
pub struct Flash {
    intermediate: Mobject,
    slow_factor: f32,
}

impl Flash {
    /// Build the pulse endpoint from the starting root point buffer: each
    /// point replicated into four copies offset by ±1 in x and y, in the
    /// pulse color. Fixed at construction, independent of later target
    /// mutation.
    #[must_use]
    pub fn new(target: &Mobject, config: &FlashConfig) -> Self {
        let mut points = Vec::with_capacity(target.points.len() * 4);
        for point in &target.points {
            for x in [-1.0, 1.0] {
                for y in [-1.0, 1.0] {
                    points.push(*point + Vec3::new(x, y, 0.0));
                }
            }
        }
        let colors = vec![config.color; points.len()];
        Self {
            intermediate: Mobject::from_points_colors(points, colors),
            slow_factor: config.slow_factor,
        }
    }

    /// Remapped blend factor: a downward parabola that is 0 at both ends
    /// of the run and peaks at `slow_factor` at alpha = 0.5.
    #[must_use]
    pub fn shaped_alpha(&self, alpha: f32) -> f32 {
        self.slow_factor * (1.0 - 4.0 * (alpha - 0.5) * (alpha - 0.5))
    }
}

impl Effect for Flash {
    fn apply(&self, target: &mut Mobject, start: &Mobject, alpha: f32) {
        let shaped = self.shaped_alpha(alpha);
        target.interpolate_between(start, &self.intermediate, shaped);
    }

    fn name(&self) -> &'static str {
        "flash"
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{Effect, Flash, FlashConfig, Mobject};

    fn flash_for(m: &Mobject) -> Flash {
        Flash::new(m, &FlashConfig::default())
    }

    #[test]
    fn test_shaped_alpha_parabola() {
        let m = Mobject::from_points(vec![Vec3::ZERO]);
        let flash = flash_for(&m);

        assert!(flash.shaped_alpha(0.0).abs() < 1e-7);
        assert!((flash.shaped_alpha(0.5) - 0.01).abs() < 1e-7);
        assert!(flash.shaped_alpha(1.0).abs() < 1e-7);
    }

    #[test]
    fn test_endpoints_reduce_to_start_state() {
        let mut m = Mobject::from_points(vec![Vec3::X, Vec3::Y]);
        let start = m.clone();
        let flash = flash_for(&m);

        flash.apply(&mut m, &start, 0.0);
        assert_eq!(m.points, start.points);
        flash.apply(&mut m, &start, 1.0);
        assert_eq!(m.points, start.points);
    }

    #[test]
    fn test_midpoint_bulges_toward_intermediate() {
        let mut m = Mobject::from_points(vec![Vec3::ZERO]);
        let start = m.clone();
        let flash = flash_for(&m);

        flash.apply(&mut m, &start, 0.5);
        // First replica of the origin sits at (-1, -1, 0); blend 0.01
        let expected = Vec3::new(-0.01, -0.01, 0.0);
        assert!((m.points[0] - expected).length() < 1e-6);
    }

    #[test]
    fn test_intermediate_is_fixed_at_construction() {
        let mut m = Mobject::from_points(vec![Vec3::ZERO]);
        let start = m.clone();
        let flash = flash_for(&m);

        // Mutating the live target later must not move the pulse endpoint
        m.points[0] = Vec3::splat(100.0);
        flash.apply(&mut m, &start, 0.5);
        assert!((m.points[0] - Vec3::new(-0.01, -0.01, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_midpoint_tints_toward_pulse_color() {
        let red = Vec3::new(1.0, 0.0, 0.0);
        let m = Mobject::from_points_colors(vec![Vec3::ZERO], vec![red]);
        let mut probe = m.clone();
        let flash = flash_for(&m);

        flash.apply(&mut probe, &m, 0.5);
        // 1% of the way from red toward the white pulse color
        let expected = Vec3::new(1.0, 0.01, 0.01);
        assert!((probe.colors[0] - expected).length() < 1e-6);
        assert_eq!(probe.points.len(), 1);
    }
}
