// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Deterministic frame-sampled animation engine for hierarchical geometric
//! scene objects.
//!
//! Kinema animates "mobjects" — mutable scene entities holding point and
//! color buffers, possibly nested into a family tree — by mapping a
//! normalized progress value in `[0, 1]` to an in-place rewrite of the
//! target's buffers. Every update re-derives the buffers from an immutable
//! starting snapshot taken at construction, so a renderer may sample frames
//! at any time resolution, in any order, and reproduce identical output.
//!
//! # Key entry points
//!
//! - [`animation::Animation`] - binds a target to a frozen snapshot and an
//!   update policy; [`animation::Animation::state_at`] computes the object
//!   state for a progress value
//! - [`mobject::Mobject`] - the point/color buffer holder and its family
//!   tree
//! - [`util::easing::RateFunction`] - pure progress-remapping curves
//! - [`defaults::Defaults`] - TOML-backed timing presets
//!
//! # Architecture
//!
//! An external driver converts wall-clock time into progress and calls
//! [`animation::Animation::state_at`]; the animation shapes progress
//! through its rate function and hands the eased alpha to its update policy
//! ([`animation::effects::Effect`]), which rewrites the target's buffers
//! from the snapshot. Rasterization, encoding, and scene management live
//! outside this crate.

pub mod animation;
pub mod defaults;
pub mod error;
pub mod mobject;
pub mod util;
