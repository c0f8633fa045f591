//! Mutable geometric scene entities ("mobjects").
//!
//! A [`Mobject`] owns an ordered point buffer, a parallel color buffer, and
//! an ordered list of nested submobjects recursively forming its family
//! tree. Animations rewrite these buffers in place; the mobject itself
//! knows nothing about time or progress.

mod attrs;

pub use attrs::{PointAttr, POINT_ATTRS};

use glam::{Mat3, Vec3};

use crate::util::color::WHITE;
use crate::util::direction::ORIGIN;

/// Rotation pivot selection for [`Mobject::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivot {
    /// Rotate about the family's own center (mean of all points).
    #[default]
    Center,
    /// Rotate about the scene origin.
    Origin,
}

/// A mutable geometric scene entity with point and color buffers and an
/// ordered family of nested sub-entities.
///
/// `Clone` produces the full-family deep copy used for animation
/// snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mobject {
    /// Ordered 3D coordinates owned by this node (children own theirs).
    pub points: Vec<Vec3>,
    /// Ordered RGB triples, parallel to `points` unless an animation
    /// deliberately resizes one buffer.
    pub colors: Vec<Vec3>,
    /// Nested child entities in fixed traversal order.
    pub submobjects: Vec<Mobject>,
}

impl Mobject {
    /// Empty mobject with no points, colors, or children.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mobject from a point buffer, colored white.
    #[must_use]
    pub fn from_points(points: Vec<Vec3>) -> Self {
        let colors = vec![WHITE; points.len()];
        Self {
            points,
            colors,
            submobjects: Vec::new(),
        }
    }

    /// Mobject from explicit point and color buffers.
    #[must_use]
    pub fn from_points_colors(points: Vec<Vec3>, colors: Vec<Vec3>) -> Self {
        Self {
            points,
            colors,
            submobjects: Vec::new(),
        }
    }

    /// Append a child to the family.
    pub fn add(&mut self, child: Mobject) {
        self.submobjects.push(child);
    }

    /// Number of points owned by this node.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Preorder traversal of self plus all nested submobjects
    /// (self-inclusive, fixed order).
    #[must_use]
    pub fn family(&self) -> Vec<&Mobject> {
        let mut out = Vec::with_capacity(self.family_len());
        self.collect_family(&mut out);
        out
    }

    fn collect_family<'a>(&'a self, out: &mut Vec<&'a Mobject>) {
        out.push(self);
        for child in &self.submobjects {
            child.collect_family(out);
        }
    }

    /// Number of elements in the family (self-inclusive).
    #[must_use]
    pub fn family_len(&self) -> usize {
        1 + self
            .submobjects
            .iter()
            .map(Mobject::family_len)
            .sum::<usize>()
    }

    /// Total number of points across the whole family.
    #[must_use]
    pub fn family_point_count(&self) -> usize {
        self.point_count()
            + self
                .submobjects
                .iter()
                .map(Mobject::family_point_count)
                .sum::<usize>()
    }

    /// Whether two family trees share the same shape (same submobject
    /// count at every level). Buffer lengths are not compared.
    #[must_use]
    pub fn same_topology(&self, other: &Mobject) -> bool {
        self.submobjects.len() == other.submobjects.len()
            && self
                .submobjects
                .iter()
                .zip(&other.submobjects)
                .all(|(a, b)| a.same_topology(b))
    }

    /// Paired preorder walk over (mutable node, reference node), passing
    /// each element's family index.
    ///
    /// The two trees must share the same shape; see
    /// [`Mobject::same_topology`].
    pub fn for_each_family_pair<F>(&mut self, reference: &Mobject, mut f: F)
    where
        F: FnMut(usize, &mut Mobject, &Mobject),
    {
        let mut index = 0;
        self.walk_pairs(reference, &mut index, &mut f);
    }

    fn walk_pairs<F>(&mut self, reference: &Mobject, index: &mut usize, f: &mut F)
    where
        F: FnMut(usize, &mut Mobject, &Mobject),
    {
        f(*index, self, reference);
        *index += 1;
        for (child, ref_child) in
            self.submobjects.iter_mut().zip(&reference.submobjects)
        {
            child.walk_pairs(ref_child, index, f);
        }
    }

    /// Visit every family node mutably in preorder.
    pub fn for_each_node_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut Mobject),
    {
        f(self);
        for child in &mut self.submobjects {
            child.for_each_node_mut(f);
        }
    }

    /// Mean of all family points, or the origin for an empty family.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        let total = self.family_point_count();
        if total == 0 {
            return ORIGIN;
        }
        let mut sum = Vec3::ZERO;
        for node in self.family() {
            for point in &node.points {
                sum += *point;
            }
        }
        sum / total as f32
    }

    /// Rotate every point in the family by `radians` about each axis in
    /// `axes` (rotations composed in order) around the selected pivot.
    ///
    /// Axes must be non-zero; they are normalized before use.
    pub fn rotate(&mut self, radians: f32, axes: &[Vec3], pivot: Pivot) {
        let rotation = axes.iter().fold(Mat3::IDENTITY, |acc, axis| {
            Mat3::from_axis_angle(axis.normalize(), radians) * acc
        });
        let pivot_point = match pivot {
            Pivot::Center => self.center(),
            Pivot::Origin => ORIGIN,
        };
        self.for_each_node_mut(&mut |node| {
            for point in &mut node.points {
                *point = pivot_point + rotation * (*point - pivot_point);
            }
        });
    }

    /// Three-way blend: the own (root) buffers become `a·(1-t) + b·t`
    /// componentwise for points and colors.
    ///
    /// When a buffer of `b` differs in length from `a`'s, index `i` of `a`
    /// blends toward index `i·b_len/a_len` of `b` (nearest-start
    /// sampling) — exact for integer-factor replication.
    pub fn interpolate_between(&mut self, a: &Mobject, b: &Mobject, t: f32) {
        self.points = blend_buffers(&a.points, &b.points, t);
        self.colors = blend_buffers(&a.colors, &b.colors, t);
    }

    /// Sort the own point buffer ascending by a scalar key, carrying the
    /// color buffer through the same permutation when it is parallel.
    /// Ties resolve arbitrarily.
    pub fn sort_points<K>(&mut self, key: K)
    where
        K: Fn(Vec3) -> f32,
    {
        let mut order: Vec<usize> = (0..self.points.len()).collect();
        order.sort_unstable_by(|&i, &j| {
            key(self.points[i]).total_cmp(&key(self.points[j]))
        });
        if self.colors.len() == order.len() {
            self.colors = order.iter().map(|&i| self.colors[i]).collect();
        }
        self.points = order.iter().map(|&i| self.points[i]).collect();
    }
}

/// Componentwise `a·(1-t) + b·t` with nearest-start index mapping when
/// the buffer lengths differ.
fn blend_buffers(a: &[Vec3], b: &[Vec3], t: f32) -> Vec<Vec3> {
    if b.is_empty() {
        return a.to_vec();
    }
    a.iter()
        .enumerate()
        .map(|(i, point)| point.lerp(b[i * b.len() / a.len()], t))
        .collect()
}
