//! The manipulated scene object.
//!
//! Asset loading and the scene graph live in the host. The controller sees
//! the door through [`Manipulable`]; [`ObjectTransform`] is the plain-data
//! implementation a renderer can read a model matrix from.

mod object;

pub use object::{Manipulable, ObjectTransform};
