// SPDX-License-Identifier: MPL-2.0
//! UI state value types
//!
//! Plain state shared by the lightbox view: zoom, rotation, drag tracking and
//! the combined transform. None of these types know about widgets.

pub mod drag;
pub mod rotation;
pub mod transform;
pub mod zoom;

pub use drag::DragState;
pub use rotation::RotationAngle;
pub use transform::Transform;
pub use zoom::{ZoomScale, ZoomStep};
