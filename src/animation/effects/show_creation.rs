//! Progressive point-count reveal.

use super::traits::Effect;
use crate::mobject::{Mobject, POINT_ATTRS};

/// Forward tolerance when converting `alpha·count` to a prefix length:
/// `0.7f32 · 10` sits just below 7, and reveal thresholds are far coarser
/// than this.
const COUNT_EPSILON: f32 = 1e-4;

/// Progressive reveal: at progress alpha each family node shows the first
/// `floor(alpha·start_count)` entries of every per-point buffer.
///
/// A prefix truncation, never a subsample. The visible point count is
/// monotonically non-decreasing in alpha, and alpha = 1 restores the full
/// buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowCreation;

impl Effect for ShowCreation {
    fn apply_node(&self, node: &mut Mobject, start_node: &Mobject, alpha: f32) {
        let new_count = (alpha * start_node.point_count() as f32
            + COUNT_EPSILON)
            .floor() as usize;
        for attr in POINT_ATTRS {
            (attr.copy_prefix)(node, start_node, new_count);
        }
    }

    fn name(&self) -> &'static str {
        "show_creation"
    }
}
