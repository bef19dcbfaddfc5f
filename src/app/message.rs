// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::MediaKind;
use crate::ui::lightbox;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`; component messages are
/// forwarded through their own variants.
#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Gallery list, in display order.
    pub media: Vec<String>,
    /// 1-based page number.
    pub page: usize,
    /// Items per page; `None` uses `[gallery] items_per_page`.
    pub per_page: Option<usize>,
    /// Index within the page.
    pub index: usize,
    /// `None` detects the kind from the first item.
    pub kind: Option<MediaKind>,
}
