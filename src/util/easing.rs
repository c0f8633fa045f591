//! Rate-shaping functions for animation progress.
//!
//! A rate function remaps linear progress to eased progress before the
//! update policy runs. All variants are pure: the same input always yields
//! the same output, which the animation core relies on for deterministic
//! frame sampling.

/// Rate-shaping function variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateFunction {
    /// Identity (no shaping). The default for every animation variant.
    Linear,
    /// Cubic smoothstep `3t² - 2t³` (ease-in-out).
    Smooth,
    /// Accelerating start: the first half of [`RateFunction::Smooth`],
    /// rescaled to cover `[0, 1]`.
    RushInto,
    /// Decelerating finish: the second half of [`RateFunction::Smooth`],
    /// rescaled to cover `[0, 1]`.
    RushFrom,
    /// Rises smoothly to 1 at the midpoint and returns to 0 at the end.
    ThereAndBack,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: `c1·3t(1-t)² + c2·3(1-t)t² + t³`
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl RateFunction {
    /// Default rate function: identity, per the animation base contract.
    pub const DEFAULT: RateFunction = RateFunction::Linear;

    /// Evaluate the rate function at progress `t`.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            RateFunction::Linear => t,
            RateFunction::Smooth => smoothstep(t),
            RateFunction::RushInto => 2.0 * smoothstep(t / 2.0),
            RateFunction::RushFrom => 2.0 * smoothstep(t / 2.0 + 0.5) - 1.0,
            RateFunction::ThereAndBack => {
                let folded = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
                smoothstep(folded)
            }
            RateFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for RateFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cubic smoothstep `3t² - 2t³` for t in `[0, 1]`.
#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::RateFunction;

    #[test]
    fn test_linear_is_identity() {
        let linear = RateFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.37), 0.37);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_smooth_endpoints_and_midpoint() {
        let smooth = RateFunction::Smooth;
        assert_eq!(smooth.evaluate(0.0), 0.0);
        assert_eq!(smooth.evaluate(0.5), 0.5);
        assert!((smooth.evaluate(1.0) - 1.0).abs() < 1e-6);
        // Ease-in-out: slow early movement
        assert!(smooth.evaluate(0.25) < 0.25);
        assert!(smooth.evaluate(0.75) > 0.75);
    }

    #[test]
    fn test_rush_into_endpoints() {
        let rush = RateFunction::RushInto;
        assert_eq!(rush.evaluate(0.0), 0.0);
        assert!((rush.evaluate(1.0) - 1.0).abs() < 1e-6);
        // Fast out of the gate relative to smooth
        assert!(rush.evaluate(0.25) > RateFunction::Smooth.evaluate(0.25));
    }

    #[test]
    fn test_rush_from_endpoints() {
        let rush = RateFunction::RushFrom;
        assert!(rush.evaluate(0.0).abs() < 1e-6);
        assert!((rush.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_there_and_back_returns_to_zero() {
        let tab = RateFunction::ThereAndBack;
        assert_eq!(tab.evaluate(0.0), 0.0);
        assert!((tab.evaluate(0.5) - 1.0).abs() < 1e-6);
        assert!(tab.evaluate(1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = RateFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        for f in [
            RateFunction::Linear,
            RateFunction::Smooth,
            RateFunction::RushInto,
            RateFunction::CubicHermite { c1: 0.33, c2: 1.0 },
        ] {
            assert_eq!(f.evaluate(-0.5), f.evaluate(0.0));
            assert_eq!(f.evaluate(1.5), f.evaluate(1.0));
        }
    }

    #[test]
    fn test_purity() {
        let f = RateFunction::Smooth;
        assert_eq!(f.evaluate(0.42), f.evaluate(0.42));
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(RateFunction::default(), RateFunction::Linear);
    }
}
