// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use crate::ui::lightbox;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes keyboard events no widget captured to the lightbox.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if !matches!(event, event::Event::Keyboard(_)) {
            return None;
        }

        match status {
            event::Status::Ignored => Some(Message::Lightbox(lightbox::Message::RawEvent {
                window: window_id,
                event,
            })),
            event::Status::Captured => None,
        }
    })
}

/// Periodic tick for notification auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Slideshow timer of the lightbox.
pub fn create_slideshow_subscription(lightbox: &lightbox::State) -> Subscription<Message> {
    lightbox.subscription().map(Message::Lightbox)
}
