//! Ordering/staggering wrapper delaying each element's progress.

use std::fmt;

use super::traits::Effect;
use crate::mobject::Mobject;

/// Wraps another policy so that the `i`-th of `N` family elements only
/// advances while global alpha crosses `[i/N, (i+1)/N]`:
/// `local = clamp(alpha·N - i, 0, 1)`.
///
/// Global alpha 0 leaves every element at its start state; 1 brings every
/// element to its end state — a left-to-right cascading reveal in family
/// traversal order.
pub struct Stagger {
    inner: Box<dyn Effect>,
}

impl Stagger {
    /// Wrap an inner policy.
    #[must_use]
    pub fn new(inner: Box<dyn Effect>) -> Self {
        Self { inner }
    }
}

impl Effect for Stagger {
    fn apply(&self, target: &mut Mobject, start: &Mobject, alpha: f32) {
        let n = target.family_len() as f32;
        target.for_each_family_pair(start, |i, node, start_node| {
            let local = (alpha * n - i as f32).clamp(0.0, 1.0);
            self.inner.apply_node(node, start_node, local);
        });
    }

    fn apply_node(&self, node: &mut Mobject, start_node: &Mobject, alpha: f32) {
        self.inner.apply_node(node, start_node, alpha);
    }

    fn name(&self) -> &'static str {
        "stagger"
    }
}

impl fmt::Debug for Stagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stagger")
            .field("inner", &self.inner.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{Effect, Mobject, Stagger};
    use crate::animation::effects::FadeIn;

    /// Root plus three children, each with one white point.
    fn four_element_family() -> Mobject {
        let mut root = Mobject::from_points(vec![Vec3::ZERO]);
        for i in 1..4 {
            root.add(Mobject::from_points(vec![Vec3::X * i as f32]));
        }
        root
    }

    fn intensity(node: &Mobject) -> f32 {
        node.colors[0].x
    }

    #[test]
    fn test_first_element_completes_by_quarter() {
        let mut m = four_element_family();
        let start = m.clone();
        let stagger = Stagger::new(Box::new(FadeIn));

        stagger.apply(&mut m, &start, 0.25);
        assert!((intensity(&m) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_last_element_untouched_below_three_quarters() {
        let mut m = four_element_family();
        let start = m.clone();
        let stagger = Stagger::new(Box::new(FadeIn));

        stagger.apply(&mut m, &start, 0.74);
        assert_eq!(intensity(&m.submobjects[2]), 0.0);
    }

    #[test]
    fn test_endpoints_cover_every_element() {
        let mut m = four_element_family();
        let start = m.clone();
        let stagger = Stagger::new(Box::new(FadeIn));

        stagger.apply(&mut m, &start, 0.0);
        for node in m.family() {
            assert_eq!(node.colors[0], Vec3::ZERO);
        }

        stagger.apply(&mut m, &start, 1.0);
        for node in m.family() {
            assert_eq!(node.colors[0], Vec3::ONE);
        }
    }

    #[test]
    fn test_cascade_runs_left_to_right() {
        let mut m = four_element_family();
        let start = m.clone();
        let stagger = Stagger::new(Box::new(FadeIn));

        stagger.apply(&mut m, &start, 0.5);
        let family = m.family();
        let levels: Vec<f32> =
            family.iter().map(|node| node.colors[0].x).collect();
        // Element 0 and 1 done, element 2 at 0, element 3 at 0
        assert_eq!(levels[0], 1.0);
        assert_eq!(levels[1], 1.0);
        assert_eq!(levels[2], 0.0);
        assert_eq!(levels[3], 0.0);
    }
}
