// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox over a gallery list.
//!
//! The lightbox shows one item at a time, wraps around at both ends, and
//! offers zoom, pan and rotation for images, favorites, a slideshow and
//! sharing. Hosts drive it through [`State::handle_message`] and react to
//! the returned [`Effect`].

pub mod component;
pub mod navigation;
pub mod shortcuts;
pub mod slideshow;
pub mod view;

pub use component::{Effect, LightboxSettings, Message, State, PLAYER_ERROR_KEY};
pub use navigation::ViewIndex;
pub use shortcuts::Shortcut;
pub use slideshow::{Slideshow, TimerHandle};
pub use view::{view, ViewEnv};
