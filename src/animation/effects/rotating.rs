//! Rotate-toward-end policy.

use std::f32::consts::TAU;

use glam::Vec3;

use super::traits::Effect;
use crate::mobject::{Mobject, Pivot};
use crate::util::direction::{RIGHT, UP};
use crate::util::easing::RateFunction;

/// Configuration for [`Rotating`].
///
/// Defaults: one full turn over 20 seconds about the two principal
/// horizontal/vertical axes, pivoting at the object's own center, identity
/// rate. Default containers are built per instance; configs never share
/// backing storage.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatingConfig {
    /// Axis sequence used when `axis` is unset; rotations compose in
    /// order.
    pub axes: Vec<Vec3>,
    /// Single-axis override; takes precedence over `axes` when set.
    pub axis: Option<Vec3>,
    /// Total rotation magnitude in radians.
    pub radians: f32,
    /// Total run duration in seconds.
    pub run_time: f32,
    /// Progress-remapping function.
    pub rate: RateFunction,
    /// Pivot at the object's own center (true) or the scene origin
    /// (false).
    pub in_place: bool,
}

impl RotatingConfig {
    /// Default total rotation: one full turn.
    pub const DEFAULT_RADIANS: f32 = TAU;
    /// Default run duration in seconds.
    pub const DEFAULT_RUN_TIME: f32 = 20.0;

    /// Single-axis rotation config.
    #[must_use]
    pub fn about(axis: Vec3) -> Self {
        Self {
            axis: Some(axis),
            ..Self::default()
        }
    }

    /// Replace the axis sequence, clearing any single-axis override.
    #[must_use]
    pub fn with_axes(mut self, axes: Vec<Vec3>) -> Self {
        self.axes = axes;
        self.axis = None;
        self
    }

    /// Replace the total rotation magnitude.
    #[must_use]
    pub fn with_radians(mut self, radians: f32) -> Self {
        self.radians = radians;
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

    /// Pivot at the scene origin instead of the object's center.
    #[must_use]
    pub fn global_pivot(mut self) -> Self {
        self.in_place = false;
        self
    }
}

impl Default for RotatingConfig {
    fn default() -> Self {
        Self {
            axes: vec![RIGHT, UP],
            axis: None,
            radians: Self::DEFAULT_RADIANS,
            run_time: Self::DEFAULT_RUN_TIME,
            rate: RateFunction::DEFAULT,
            in_place: true,
        }
    }
}

/// Rotate-toward-end policy: reset every family node's points to the
/// snapshot, then rotate the whole family by `alpha·radians`.
///
/// The per-node reset before each hierarchical rotation keeps repeated
/// and out-of-order updates non-cumulative.
#[derive(Debug, Clone)]
pub struct Rotating {
    axes: Vec<Vec3>,
    axis: Option<Vec3>,
    radians: f32,
    in_place: bool,
}

impl Rotating {
    /// Extract the rotation parameters from a config (timing is owned by
    /// the animation).
    #[must_use]
    pub fn from_config(config: &RotatingConfig) -> Self {
        Self {
            axes: config.axes.clone(),
            axis: config.axis,
            radians: config.radians,
            in_place: config.in_place,
        }
    }
}

impl Effect for Rotating {
    fn apply(&self, target: &mut Mobject, start: &Mobject, alpha: f32) {
        target.for_each_family_pair(start, |_, node, start_node| {
            node.points = start_node.points.clone();
        });
        let pivot = if self.in_place {
            Pivot::Center
        } else {
            Pivot::Origin
        };
        let axes: &[Vec3] = self
            .axis
            .as_ref()
            .map_or(&self.axes, std::slice::from_ref);
        target.rotate(alpha * self.radians, axes, pivot);
    }

    fn name(&self) -> &'static str {
        "rotating"
    }
}
