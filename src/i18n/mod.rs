// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the lightbox.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. The active locale is picked from the `--lang` flag, then the
//! `[general] language` setting, then the OS locale, then `en-US`.

pub mod fluent;
