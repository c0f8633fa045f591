//! Core trait for animation update policies.

use crate::mobject::Mobject;

/// Defines how an animation rewrites the target's buffers at progress
/// `alpha`.
///
/// Implementations must re-derive the target state from the starting
/// snapshot on every call — never from the target's current (possibly
/// already-mutated) buffers. The same alpha must always produce the same
/// buffers; arbitrary-order frame sampling relies on this.
pub trait Effect {
    /// Rewrite the whole family at eased progress `alpha`.
    ///
    /// Default: walk (target, snapshot) family pairs in traversal order
    /// and apply [`Effect::apply_node`] to each.
    fn apply(&self, target: &mut Mobject, start: &Mobject, alpha: f32) {
        target.for_each_family_pair(start, |_, node, start_node| {
            self.apply_node(node, start_node, alpha);
        });
    }

    /// Rewrite a single family element at eased progress `alpha`.
    ///
    /// The staggering wrapper drives elements individually through this
    /// method. Policies that only make sense family-wide keep the no-op
    /// default and override [`Effect::apply`].
    fn apply_node(&self, node: &mut Mobject, start_node: &Mobject, alpha: f32) {
        let _ = (node, start_node, alpha);
    }

    /// Short name for logging and Debug output.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
