//! Statically declared per-point attribute descriptors.
//!
//! Progressive-reveal animations must truncate every buffer that scales
//! with point count. Rather than discovering those buffers at runtime,
//! each one is declared here with an accessor pair; [`POINT_ATTRS`] is the
//! complete list for [`Mobject`].

use glam::Vec3;

use super::Mobject;

/// Accessor pair for one per-point buffer on a mobject node.
#[derive(Debug, Clone, Copy)]
pub struct PointAttr {
    /// Attribute name, for diagnostics.
    pub name: &'static str,
    /// Borrow the buffer from a node.
    pub get: fn(&Mobject) -> &[Vec3],
    /// Replace the destination node's buffer with the first `n` entries
    /// of the source node's buffer (clamped to the source length).
    pub copy_prefix: fn(&mut Mobject, &Mobject, usize),
}

fn get_points(node: &Mobject) -> &[Vec3] {
    &node.points
}

fn copy_points_prefix(dst: &mut Mobject, src: &Mobject, n: usize) {
    dst.points = src.points[..n.min(src.points.len())].to_vec();
}

fn get_colors(node: &Mobject) -> &[Vec3] {
    &node.colors
}

fn copy_colors_prefix(dst: &mut Mobject, src: &Mobject, n: usize) {
    dst.colors = src.colors[..n.min(src.colors.len())].to_vec();
}

/// Every per-point buffer a [`Mobject`] carries.
pub const POINT_ATTRS: &[PointAttr] = &[
    PointAttr {
        name: "points",
        get: get_points,
        copy_prefix: copy_points_prefix,
    },
    PointAttr {
        name: "colors",
        get: get_colors,
        copy_prefix: copy_colors_prefix,
    },
];
