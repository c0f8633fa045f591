//! Field-driven point transport.

use std::fmt;

use glam::Vec3;

use super::traits::Effect;
use crate::mobject::Mobject;

/// Pointwise deformation through a caller-supplied field
/// `f(point, t) -> point`.
///
/// Applied to the root point buffer only, in order; nested submobjects
/// are untouched. Alpha passes straight through as the time parameter
/// `t` — rate shaping happens upstream in the animation. The field must
/// be pure and total over `R³ × [0, 1]`; non-finite outputs are a caller
/// error and are not handled here.
pub struct Homotopy {
    field: Box<dyn Fn(Vec3, f32) -> Vec3>,
}

impl Homotopy {
    /// Wrap a deformation field.
    #[must_use]
    pub fn new<F>(field: F) -> Self
    where
        F: Fn(Vec3, f32) -> Vec3 + 'static,
    {
        Self {
            field: Box::new(field),
        }
    }
}

impl Effect for Homotopy {
    fn apply(&self, target: &mut Mobject, start: &Mobject, alpha: f32) {
        target.points = start
            .points
            .iter()
            .map(|p| (self.field)(*p, alpha))
            .collect();
    }

    fn name(&self) -> &'static str {
        "homotopy"
    }
}

impl fmt::Debug for Homotopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Homotopy").finish_non_exhaustive()
    }
}
