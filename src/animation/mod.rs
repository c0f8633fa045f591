//! Animation core: a target mobject bound to a frozen starting snapshot
//! and a per-variant update policy.
//!
//! Constructed once, queried repeatedly: [`Animation::state_at`] maps a
//! progress value in `[0, 1]` to an in-place rewrite of the target's
//! buffers. Every update re-derives the buffers from the snapshot, so
//! calls may arrive in any order (timeline scrubbing) and repeated calls
//! with the same progress are identical.

pub mod effects;

use std::fmt;

use effects::{
    Effect, FadeConfig, FadeIn, FadeOut, Flash, FlashConfig, Homotopy,
    Rotating, RotatingConfig, ShowCreation, Stagger,
};
use glam::Vec3;

use crate::error::{ConfigError, UpdateError};
use crate::mobject::Mobject;
use crate::util::direction::{DOWN, RIGHT};
use crate::util::easing::RateFunction;

/// Run duration and rate shaping shared by every animation variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Total run duration in seconds.
    pub run_time: f32,
    /// Pure progress-remapping function applied before the update policy.
    pub rate: RateFunction,
}

impl Timing {
    /// Run duration used when a variant does not override it.
    pub const DEFAULT_RUN_TIME: f32 = 1.0;

    /// Timing with the given run duration and the identity rate function.
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

impl Default for Timing {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RUN_TIME)
    }
}

/// Binds one target [`Mobject`] (mutated in place) to one immutable
/// starting snapshot and an update policy.
///
/// The snapshot is a deep copy of the target's full family taken at
/// construction, owned exclusively by this animation and never mutated.
/// There is no terminal state — the caller stops querying past progress
/// 1.0.
pub struct Animation {
    mobject: Mobject,
    start: Mobject,
    effect: Box<dyn Effect>,
    run_time: f32,
    rate: RateFunction,
}

impl Animation {
    /// Bind `target` to `effect` with the given timing, deep-copying the
    /// target's full family into the starting snapshot.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn new(
        target: Mobject,
        effect: Box<dyn Effect>,
        timing: Timing,
    ) -> Result<Self, ConfigError> {
        if target.family_point_count() == 0 {
            return Err(ConfigError::EmptyTarget);
        }
        log::debug!(
            "constructing {} animation: {} family elements, {:.3}s run time",
            effect.name(),
            target.family_len(),
            timing.run_time
        );
        let start = target.clone();
        Ok(Self {
            mobject: target,
            start,
            effect,
            run_time: timing.run_time,
            rate: timing.rate,
        })
    }

    /// Rotation toward a total angle about one or more axes.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn rotating(
        target: Mobject,
        config: RotatingConfig,
    ) -> Result<Self, ConfigError> {
        let timing = Timing::new(config.run_time).with_rate(config.rate);
        let effect = Rotating::from_config(&config);
        Self::new(target, Box::new(effect), timing)
    }

    /// Linear fade of color intensity down to zero.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn fade_out(
        target: Mobject,
        config: FadeConfig,
    ) -> Result<Self, ConfigError> {
        let timing = Timing::new(config.run_time).with_rate(config.rate);
        Self::new(target, Box::new(FadeOut), timing)
    }

    /// Linear fade of color intensity up from zero.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn fade_in(
        target: Mobject,
        config: FadeConfig,
    ) -> Result<Self, ConfigError> {
        let timing = Timing::new(config.run_time).with_rate(config.rate);
        Self::new(target, Box::new(FadeIn), timing)
    }

    /// Progressive point-count reveal from nothing to the full buffers.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn show_creation(
        target: Mobject,
        timing: Timing,
    ) -> Result<Self, ConfigError> {
        Self::new(target, Box::new(ShowCreation), timing)
    }

    /// Staggered fade-in over points reordered along the down-right
    /// diagonal.
    ///
    /// Sorts the target's own point buffer before the snapshot is taken,
    /// then cascades a fade-in across the family in traversal order.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn shimmer_in(
        mut target: Mobject,
        config: FadeConfig,
    ) -> Result<Self, ConfigError> {
        target.sort_points(|p| p.dot(DOWN + RIGHT));
        let timing = Timing::new(config.run_time).with_rate(config.rate);
        Ok(Self::new(target, Box::new(FadeIn), timing)?.staggered())
    }

    /// Brief pulse bulging toward an expanded replica of the object.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn flash(
        target: Mobject,
        config: FlashConfig,
    ) -> Result<Self, ConfigError> {
        let timing = Timing::new(config.run_time).with_rate(config.rate);
        let effect = Flash::new(&target, &config);
        Self::new(target, Box::new(effect), timing)
    }

    /// Pointwise deformation through a caller-supplied field
    /// `f(point, t) -> point`.
    ///
    /// The field must be pure and total over its domain; the eased alpha
    /// passes through as `t` unchanged.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn homotopy<F>(
        target: Mobject,
        field: F,
        timing: Timing,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(Vec3, f32) -> Vec3 + 'static,
    {
        Self::new(target, Box::new(Homotopy::new(field)), timing)
    }

    /// Bind a custom update policy.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTarget`] if the target family holds no points.
    pub fn with_effect<E>(
        target: Mobject,
        effect: E,
        timing: Timing,
    ) -> Result<Self, ConfigError>
    where
        E: Effect + 'static,
    {
        Self::new(target, Box::new(effect), timing)
    }

    /// Wrap this animation's policy in the ordering/staggering wrapper:
    /// element `i` of `N` starts once global alpha exceeds `i/N` and
    /// completes by `(i+1)/N`, producing a cascading reveal.
    #[must_use]
    pub fn staggered(self) -> Self {
        let Self {
            mobject,
            start,
            effect,
            run_time,
            rate,
        } = self;
        Self {
            mobject,
            start,
            effect: Box::new(Stagger::new(effect)),
            run_time,
            rate,
        }
    }

    /// Compute the object state at `progress`, rewriting the target's
    /// buffers in place.
    ///
    /// Idempotent for a fixed progress: the update policy re-derives the
    /// buffers from the starting snapshot, never from the target's
    /// current state, so calls may be issued in any order.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::ProgressOutOfRange`] when `progress` is outside
    ///   `[0, 1]` (caller contract; not silently clamped)
    /// - [`UpdateError::TopologyMismatch`] when the target's family shape
    ///   no longer matches the snapshot
    pub fn state_at(&mut self, progress: f32) -> Result<(), UpdateError> {
        if !(0.0..=1.0).contains(&progress) {
            return Err(UpdateError::ProgressOutOfRange(progress));
        }
        if !self.mobject.same_topology(&self.start) {
            return Err(UpdateError::TopologyMismatch {
                expected: self.start.family_len(),
                found: self.mobject.family_len(),
            });
        }
        let alpha = self.rate.evaluate(progress);
        self.effect.apply(&mut self.mobject, &self.start, alpha);
        Ok(())
    }

    /// Total run duration in seconds.
    #[must_use]
    pub fn run_time(&self) -> f32 {
        self.run_time
    }

    /// Normalized progress for an elapsed wall-clock time, clamped to
    /// `[0, 1]`. Convenience for drivers stepping real time.
    #[must_use]
    pub fn progress_for(&self, elapsed: f32) -> f32 {
        if self.run_time <= 0.0 {
            return 1.0;
        }
        (elapsed / self.run_time).clamp(0.0, 1.0)
    }

    /// The animated target.
    #[must_use]
    pub fn mobject(&self) -> &Mobject {
        &self.mobject
    }

    /// Mutable access to the animated target.
    pub fn mobject_mut(&mut self) -> &mut Mobject {
        &mut self.mobject
    }

    /// Release the target, discarding the snapshot.
    #[must_use]
    pub fn into_mobject(self) -> Mobject {
        self.mobject
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("effect", &self.effect.name())
            .field("run_time", &self.run_time)
            .field("rate", &self.rate)
            .finish_non_exhaustive()
    }
}
