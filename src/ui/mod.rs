// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": components own their state, update
//! through `handle_message`, and hand side effects back to the application.
//!
//! - [`lightbox`] - Full-screen media lightbox
//! - [`state`] - View transform pieces (zoom, rotation, drag)
//! - [`notifications`] - Toast notifications for non-fatal problems
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod lightbox;
pub mod notifications;
pub mod state;
pub mod styles;
