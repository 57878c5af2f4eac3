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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on known-good values
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::wildcard_imports))]

//! Pointer and wheel manipulation of a 3D door model.
//!
//! Doorkit turns raw pointer and wheel events into a smoothed transform
//! (position, yaw, uniform scale) for a single scene object: drag to pan on
//! a plane facing the camera, drag with the other button to spin about the
//! vertical axis, scroll to zoom around the point under the cursor.
//!
//! # Key entry points
//!
//! - [`DoorController`] - owns the interaction state and the mounted object
//! - [`input::InputRouter`] - event → state transitions
//! - [`integrator::TransformIntegrator`] - per-frame smoothing
//! - [`camera::ScreenProjector`] - the ray-casting seam to the renderer
//! - [`options::Options`] - gesture tuning, bindings and TOML presets
//!
//! # Architecture
//!
//! Input callbacks and the frame tick share one
//! [`input::InteractionState`]. Callbacks only set gesture flags and
//! targets; the tick alone writes the object's transform, so event-rate
//! updates never race frame-rate smoothing. Both entry points take
//! `&mut self` and are serialized by the caller.

pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod integrator;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use controller::DoorController;
pub use error::DoorkitError;
pub use input::{EventResponse, InputEvent, MouseButton};
pub use scene::{Manipulable, ObjectTransform};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
