//! Crate-level error types.

use std::fmt;

/// Errors raised while constructing an animation or handling timing
/// presets.
///
/// Fatal to the animation instance (or preset operation) that raised them;
/// other animations are unaffected.
#[derive(Debug)]
pub enum ConfigError {
    /// The target mobject family holds no points at all.
    EmptyTarget,
    /// TOML preset parsing/serialization failure.
    PresetParse(String),
    /// Preset file I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTarget => {
                write!(f, "animation target holds no points")
            }
            Self::PresetParse(msg) => {
                write!(f, "preset parse error: {msg}")
            }
            Self::Io(e) => write!(f, "preset I/O error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Update-time precondition violations.
///
/// These indicate a driver or upstream-animation bug; the core never
/// retries and the error propagates to the caller unchanged.
#[derive(Debug)]
pub enum UpdateError {
    /// Progress fell outside the `[0, 1]` caller contract. Out-of-range
    /// progress is rejected, never silently clamped.
    ProgressOutOfRange(f32),
    /// The target's family shape no longer matches the starting snapshot.
    TopologyMismatch {
        /// Family element count of the starting snapshot.
        expected: usize,
        /// Family element count of the live target.
        found: usize,
    },
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgressOutOfRange(p) => {
                write!(f, "progress {p} outside [0, 1]")
            }
            Self::TopologyMismatch { expected, found } => write!(
                f,
                "family topology diverged from snapshot: expected {expected} elements, found {found}"
            ),
        }
    }
}

impl std::error::Error for UpdateError {}
