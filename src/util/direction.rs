//! Named direction constants for the scene coordinate system.
//!
//! Right-handed frame: x grows rightward, y grows upward, z grows out of
//! the screen.

use glam::Vec3;

/// The scene origin.
pub const ORIGIN: Vec3 = Vec3::ZERO;
/// Unit vector pointing right (+x).
pub const RIGHT: Vec3 = Vec3::X;
/// Unit vector pointing left (-x).
pub const LEFT: Vec3 = Vec3::NEG_X;
/// Unit vector pointing up (+y).
pub const UP: Vec3 = Vec3::Y;
/// Unit vector pointing down (-y).
pub const DOWN: Vec3 = Vec3::NEG_Y;
/// Unit vector pointing out of the screen (+z).
pub const OUT: Vec3 = Vec3::Z;
/// Unit vector pointing into the screen (-z).
pub const IN: Vec3 = Vec3::NEG_Z;
