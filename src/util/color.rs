//! Named color constants (RGB triples with components in `[0, 1]`).

use glam::Vec3;

/// Full-intensity white.
pub const WHITE: Vec3 = Vec3::ONE;
/// Zero-intensity black.
pub const BLACK: Vec3 = Vec3::ZERO;
