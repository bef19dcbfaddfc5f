// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-fatal problems.
//!
//! Favorites that cannot be saved or loaded and unreadable configuration
//! surface here instead of interrupting the lightbox.
//!
//! - Duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - At most [`MAX_VISIBLE`] toasts at once, the rest are queued
//! - Rendered bottom-right, above the media

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
