// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Grab-and-move panning as a two-state machine. A drag lives from pointer
//! press until pointer release or until the pointer leaves the surface.

use iced::{Point, Vector};

/// Pan gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `grab` is the pointer position minus the pan offset at press time.
    Dragging { grab: Vector },
}

impl DragState {
    /// Starts a drag at `pointer` while the image sits at `offset`.
    pub fn start(&mut self, pointer: Point, offset: Vector) {
        *self = DragState::Dragging {
            grab: Vector::new(pointer.x - offset.x, pointer.y - offset.y),
        };
    }

    /// Ends the drag (pointer up or pointer leave). Idempotent.
    pub fn stop(&mut self) {
        *self = DragState::Idle;
    }

    /// New pan offset for `pointer`, or `None` when idle.
    ///
    /// No inertia and no clamping to the image bounds.
    #[must_use]
    pub fn offset_at(&self, pointer: Point) -> Option<Vector> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { grab } => Some(Vector::new(pointer.x - grab.x, pointer.y - grab.y)),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
