//! Fade-to-transparent and fade-from-transparent policies.
//!
//! Fades scale color intensity from the snapshot; they never blend toward
//! a black color constant — a half-faded red is a dim red.

use super::traits::Effect;
use crate::mobject::Mobject;
use crate::util::easing::RateFunction;

/// Timing configuration shared by the fade variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeConfig {
    /// Total run duration in seconds.
    pub run_time: f32,
    /// Progress-remapping function.
    pub rate: RateFunction,
}

impl FadeConfig {
    /// Default run duration in seconds.
    pub const DEFAULT_RUN_TIME: f32 = 1.0;

    /// Fade config with the given run duration and identity rate.
    #[must_use]
    pub fn new(run_time: f32) -> Self {
        Self {
            run_time,
            rate: RateFunction::DEFAULT,
        }
    }

    /// Replace the rate function.
    #[must_use]
    pub fn with_rate(mut self, rate: RateFunction) -> Self {
        self.rate = rate;
        self
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RUN_TIME)
    }
}

/// Restore the point buffer from the snapshot when a preceding
/// progressive reveal left the live buffer at a different length.
fn resync_points(node: &mut Mobject, start_node: &Mobject) {
    if node.points.len() != start_node.points.len() {
        node.points = start_node.points.clone();
    }
}

/// Fade-to-transparent: color intensity scales linearly to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct FadeOut;

impl Effect for FadeOut {
    fn apply_node(&self, node: &mut Mobject, start_node: &Mobject, alpha: f32) {
        resync_points(node, start_node);
        node.colors = start_node
            .colors
            .iter()
            .map(|c| *c * (1.0 - alpha))
            .collect();
    }

    fn name(&self) -> &'static str {
        "fade_out"
    }
}

/// Fade-from-transparent: color intensity scales linearly up from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct FadeIn;

impl Effect for FadeIn {
    fn apply_node(&self, node: &mut Mobject, start_node: &Mobject, alpha: f32) {
        resync_points(node, start_node);
        node.colors = start_node.colors.iter().map(|c| *c * alpha).collect();
    }

    fn name(&self) -> &'static str {
        "fade_in"
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{Effect, FadeIn, FadeOut, Mobject};

    fn colored_mobject() -> Mobject {
        Mobject::from_points_colors(
            vec![Vec3::ZERO, Vec3::X],
            vec![Vec3::new(1.0, 0.5, 0.25), Vec3::new(0.2, 0.4, 0.8)],
        )
    }

    #[test]
    fn test_fade_out_scales_colors_componentwise() {
        let mut m = colored_mobject();
        let start = m.clone();

        for p in [0.0, 0.25, 0.5, 1.0] {
            FadeOut.apply(&mut m, &start, p);
            for (faded, original) in m.colors.iter().zip(&start.colors) {
                assert_eq!(*faded, *original * (1.0 - p));
            }
        }
    }

    #[test]
    fn test_fade_in_scales_colors_componentwise() {
        let mut m = colored_mobject();
        let start = m.clone();

        for p in [0.0, 0.25, 0.5, 1.0] {
            FadeIn.apply(&mut m, &start, p);
            for (faded, original) in m.colors.iter().zip(&start.colors) {
                assert_eq!(*faded, *original * p);
            }
        }
    }

    #[test]
    fn test_fade_in_restores_shrunk_point_buffer() {
        let mut m = colored_mobject();
        let start = m.clone();
        m.points.truncate(1);

        FadeIn.apply(&mut m, &start, 0.5);
        assert_eq!(m.points, start.points);
    }

    #[test]
    fn test_fade_out_tolerates_shrunk_point_buffer() {
        let mut m = colored_mobject();
        let start = m.clone();
        m.points.clear();

        FadeOut.apply(&mut m, &start, 0.5);
        assert_eq!(m.points, start.points);
        assert_eq!(m.colors.len(), start.colors.len());
    }

    #[test]
    fn test_fades_apply_per_family_node() {
        let mut root = colored_mobject();
        root.add(colored_mobject());
        let start = root.clone();

        FadeOut.apply(&mut root, &start, 1.0);
        assert!(root.colors.iter().all(|c| *c == Vec3::ZERO));
        assert!(root.submobjects[0]
            .colors
            .iter()
            .all(|c| *c == Vec3::ZERO));
    }
}
