//! Screen-to-world projection.
//!
//! The controller only needs to know where a pointer ray meets the pan
//! plane. [`ScreenProjector`] is that seam; [`PerspectiveCamera`] is a
//! ready-made implementation for hosts without their own ray caster.

/// Perspective camera implementing [`ScreenProjector`].
pub mod core;
/// Rays, planes, viewports and the projector trait.
pub mod projection;

pub use self::core::PerspectiveCamera;
pub use projection::{Plane, Ray, ScreenProjector, Viewport};
