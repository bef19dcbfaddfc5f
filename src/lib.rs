// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a full-screen media lightbox built with the Iced GUI framework.
//!
//! It shows one image or video at a time from a gallery list, with wrapping
//! navigation, zoom/pan/rotate, a slideshow, persistent favorites and sharing.

pub mod app;
pub mod config;
pub mod error;
pub mod favorites;
pub mod i18n;
pub mod media;
pub mod share;
pub mod ui;
