// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the lightbox, localization and toasts together.
//!
//! The `App` owns the lightbox component and translates its effects into
//! runtime actions: closing the window and showing notifications.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::favorites::{FavoritesStore, JsonFileStore, MemoryStore};
use crate::i18n::fluent::I18n;
use crate::media::{MediaKind, MediaList, PageCursor};
use crate::share::ShareService;
use crate::ui::lightbox::{self, Effect, LightboxSettings, ViewEnv};
use crate::ui::notifications::{self, Notification, Toast};
use iced::widget::Stack;
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    lightbox: lightbox::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.lightbox.current_index())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and favorites from disk, then opens the lightbox.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let store: Arc<dyn FavoritesStore> = match JsonFileStore::in_data_dir(None) {
            Some(store) => {
                log::debug!("Favorites stored in {}", store.path().display());
                Arc::new(store)
            }
            None => {
                log::warn!("No data directory available; favorites will not persist");
                Arc::new(MemoryStore::new())
            }
        };

        let app = Self::with_parts(flags, &config, config_warning, store, ShareService::system());
        (app, Task::none())
    }

    /// Builds the application from already-resolved collaborators.
    pub fn with_parts(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
        store: Arc<dyn FavoritesStore>,
        share: ShareService,
    ) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let kind = flags.kind.unwrap_or_else(|| {
            flags
                .media
                .first()
                .map(|first| MediaKind::detect(first))
                .unwrap_or_default()
        });
        let cursor = PageCursor {
            page: flags.page,
            per_page: flags.per_page.unwrap_or_else(|| config.items_per_page()),
            index_in_page: flags.index,
        };

        let (lightbox, favorites_warning) = lightbox::State::new(
            MediaList::from(flags.media),
            kind,
            cursor,
            store,
            share,
            LightboxSettings::from_config(config),
        );
        if let Some(notification) = favorites_warning {
            notifications.push(notification);
        }

        log::info!(
            "Lightbox opened on {} of {} {kind} item(s)",
            lightbox
                .current_index()
                .map_or_else(|| "nothing".to_string(), |i| (i + 1).to_string()),
            lightbox.items().len()
        );

        Self {
            i18n,
            lightbox,
            notifications,
        }
    }

    /// `"<file> (<i>/<n>) - <app>"`, or just the app name when empty.
    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (self.lightbox.current_name(), self.lightbox.current_index()) {
            (Some(name), Some(index)) => format!(
                "{name} ({}/{}) - {app_name}",
                index + 1,
                self.lightbox.items().len()
            ),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_slideshow_subscription(&self.lightbox),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Lightbox(lightbox_message) => {
                let (effect, task) = self.lightbox.handle_message(lightbox_message, &self.i18n);
                let task = task.map(Message::Lightbox);
                match effect {
                    Effect::None => task,
                    Effect::ShowNotification(notification) => {
                        self.notifications.push(notification);
                        task
                    }
                    Effect::Close => {
                        log::info!("Lightbox closed");
                        Task::batch([task, iced::exit()])
                    }
                }
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let lightbox = lightbox::view(&self.lightbox, ViewEnv { i18n: &self.i18n })
            .map(Message::Lightbox);
        let toasts = Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(lightbox)
            .push(toasts)
            .into()
    }

    #[must_use]
    pub fn lightbox(&self) -> &lightbox::State {
        &self.lightbox
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
