//! Update policies: per-variant strategies rewriting the target's buffers
//! at a given eased progress.
//!
//! Policies are decoupled from timing — [`crate::animation::Animation`]
//! owns run duration and rate shaping; a policy only maps (snapshot,
//! alpha) to new buffer contents.

mod fade;
mod flash;
mod homotopy;
mod rotating;
mod show_creation;
mod stagger;
mod traits;

pub use fade::{FadeConfig, FadeIn, FadeOut};
pub use flash::{Flash, FlashConfig};
pub use homotopy::Homotopy;
pub use rotating::{Rotating, RotatingConfig};
pub use show_creation::ShowCreation;
pub use stagger::Stagger;
pub use traits::Effect;
