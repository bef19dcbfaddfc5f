// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating state and update logic.

use super::navigation::ViewIndex;
use super::shortcuts::Shortcut;
use super::slideshow::Slideshow;
use crate::config::Config;
use crate::favorites::{self, Favorites, FavoritesStore};
use crate::i18n::fluent::I18n;
use crate::media::{self, MediaKind, MediaList, PageCursor};
use crate::share::{self, ShareOutcome, ShareRequest, ShareService};
use crate::ui::notifications::Notification;
use crate::ui::state::{DragState, Transform, ZoomStep};
use iced::widget::image;
use iced::{event, window, Point, Subscription, Task};
use std::sync::Arc;
use std::time::Duration;

/// Shown when the system player could not be launched.
pub const PLAYER_ERROR_KEY: &str = "notification-player-error";

/// Messages emitted by lightbox widgets and routed host events.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    JumpTo(usize),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Rotate,
    ToggleFavorite,
    ToggleSlideshow,
    /// Tick from the slideshow timer of the given generation.
    SlideshowTick(u64),
    Share,
    ShareFinished(ShareOutcome),
    Close,
    BackdropPressed,
    SurfacePressed,
    SurfaceReleased,
    SurfaceExited,
    CursorMoved(Point),
    StripHovered(bool),
    OpenInPlayer,
    PlayerOpened(Result<(), String>),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Side effects the host must handle after an update.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Dismiss the lightbox.
    Close,
    ShowNotification(Notification),
}

/// Tunables read from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightboxSettings {
    pub zoom_step: ZoomStep,
    pub slideshow_interval: Duration,
}

impl LightboxSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            zoom_step: ZoomStep::new(config.zoom_step_percent()),
            slideshow_interval: config.slideshow_interval(),
        }
    }
}

impl Default for LightboxSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Complete lightbox state.
#[derive(Debug)]
pub struct State {
    items: MediaList,
    kind: MediaKind,
    /// Image handles, one per item; empty in video mode.
    handles: Vec<image::Handle>,
    index: Option<ViewIndex>,
    transform: Transform,
    drag: DragState,
    cursor: Option<Point>,
    favorites: Favorites,
    slideshow: Slideshow,
    share: ShareService,
    zoom_step: ZoomStep,
    strip_hovered: bool,
}

impl State {
    /// Opens the lightbox on the item addressed by `cursor`.
    ///
    /// Favorites are read once from `store`; if that fails the set starts
    /// empty and the returned notification should be shown.
    pub fn new(
        items: MediaList,
        kind: MediaKind,
        cursor: PageCursor,
        store: Arc<dyn FavoritesStore>,
        share: ShareService,
        settings: LightboxSettings,
    ) -> (Self, Option<Notification>) {
        let index = ViewIndex::new(cursor.global_index(), items.len());
        if index.is_none() {
            log::info!("Lightbox opened with an empty media list");
        }

        let handles = match kind {
            MediaKind::Image => items.iter().map(image::Handle::from_path).collect(),
            MediaKind::Video => Vec::new(),
        };

        let (favorites, load_error) = Favorites::load(store);
        let warning = load_error.map(|err| {
            Notification::warning(favorites::LOAD_ERROR_KEY).with_arg("reason", err.to_string())
        });

        let state = Self {
            items,
            kind,
            handles,
            index,
            transform: Transform::IDENTITY,
            drag: DragState::Idle,
            cursor: None,
            favorites,
            slideshow: Slideshow::new(settings.slideshow_interval),
            share,
            zoom_step: settings.zoom_step,
            strip_hovered: false,
        };
        (state, warning)
    }

    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::Next => {
                self.navigate(ViewIndex::next);
                self.slideshow.rearm();
                (Effect::None, Task::none())
            }
            Message::Previous => {
                self.navigate(ViewIndex::previous);
                self.slideshow.rearm();
                (Effect::None, Task::none())
            }
            Message::JumpTo(target) => {
                let mut moved = false;
                self.navigate(|index| moved = index.jump_to(target));
                if moved {
                    self.slideshow.rearm();
                }
                (Effect::None, Task::none())
            }
            Message::SlideshowTick(generation) => {
                if self.slideshow.accepts(generation) {
                    self.navigate(ViewIndex::next);
                } else {
                    log::debug!("Ignoring stale slideshow tick {generation}");
                }
                (Effect::None, Task::none())
            }
            Message::ToggleSlideshow => {
                if self.index.is_some() {
                    self.slideshow.toggle();
                }
                (Effect::None, Task::none())
            }
            Message::ZoomIn => {
                if self.accepts_transform() {
                    self.transform.zoom_in(self.zoom_step);
                }
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                if self.accepts_transform() {
                    self.transform.zoom_out(self.zoom_step);
                }
                (Effect::None, Task::none())
            }
            Message::ResetZoom => {
                if self.accepts_transform() {
                    self.transform.reset();
                }
                (Effect::None, Task::none())
            }
            Message::Rotate => {
                if self.accepts_transform() {
                    self.transform.rotate();
                }
                (Effect::None, Task::none())
            }
            Message::ToggleFavorite => (self.toggle_favorite(), Task::none()),
            Message::Share => (Effect::None, self.share_current(i18n)),
            Message::ShareFinished(outcome) => {
                share::log_outcome(&outcome);
                (Effect::None, Task::none())
            }
            Message::Close | Message::BackdropPressed => (self.close(), Task::none()),
            Message::SurfacePressed => {
                if self.accepts_transform() {
                    if let Some(pointer) = self.cursor {
                        self.drag.start(pointer, self.transform.offset);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::SurfaceReleased | Message::SurfaceExited => {
                self.drag.stop();
                (Effect::None, Task::none())
            }
            Message::CursorMoved(position) => {
                self.cursor = Some(position);
                if let Some(offset) = self.drag.offset_at(position) {
                    self.transform.offset = offset;
                }
                (Effect::None, Task::none())
            }
            Message::StripHovered(hovered) => {
                self.strip_hovered = hovered;
                (Effect::None, Task::none())
            }
            Message::OpenInPlayer => (Effect::None, self.open_in_player()),
            Message::PlayerOpened(result) => match result {
                Ok(()) => (Effect::None, Task::none()),
                Err(err) => (
                    Effect::ShowNotification(
                        Notification::error(PLAYER_ERROR_KEY).with_arg("reason", err),
                    ),
                    Task::none(),
                ),
            },
            Message::RawEvent { event, .. } => self.handle_raw_event(&event, i18n),
        }
    }

    /// Slideshow timer, alive only while the slideshow runs.
    pub fn subscription(&self) -> Subscription<Message> {
        self.slideshow.subscription(Message::SlideshowTick)
    }

    fn handle_raw_event(&mut self, event: &event::Event, i18n: &I18n) -> (Effect, Task<Message>) {
        let event::Event::Keyboard(keyboard_event) = event else {
            return (Effect::None, Task::none());
        };

        let message = match Shortcut::from_event(keyboard_event) {
            Some(Shortcut::Close) => Message::Close,
            Some(Shortcut::Next) => Message::Next,
            Some(Shortcut::Previous) => Message::Previous,
            Some(Shortcut::ZoomIn) => Message::ZoomIn,
            Some(Shortcut::ZoomOut) => Message::ZoomOut,
            Some(Shortcut::Rotate) => Message::Rotate,
            Some(Shortcut::ToggleFavorite) => Message::ToggleFavorite,
            None => return (Effect::None, Task::none()),
        };
        self.handle_message(message, i18n)
    }

    /// Applies `step` to the index; any navigation resets the view transform.
    fn navigate(&mut self, step: impl FnOnce(&mut ViewIndex)) {
        let Some(index) = self.index.as_mut() else {
            return;
        };
        step(index);
        self.transform.reset();
        self.drag.stop();
    }

    fn accepts_transform(&self) -> bool {
        self.kind.is_image() && self.index.is_some()
    }

    fn toggle_favorite(&mut self) -> Effect {
        let Some(locator) = self.current_locator().map(str::to_owned) else {
            return Effect::None;
        };

        let toggled = self.favorites.toggle(&locator);
        log::debug!(
            "{} {locator} favorites",
            if toggled.is_favorite { "Added to" } else { "Removed from" }
        );

        match toggled.save_error {
            Some(err) => Effect::ShowNotification(
                Notification::warning(favorites::SAVE_ERROR_KEY)
                    .with_arg("reason", err.to_string()),
            ),
            None => Effect::None,
        }
    }

    fn share_current(&self, i18n: &I18n) -> Task<Message> {
        let Some(request) = self.share_request(i18n) else {
            return Task::none();
        };
        Task::perform(
            self.share.clone().share_in_background(request),
            Message::ShareFinished,
        )
    }

    /// Request for the current item: a 1-based localized title and its locator.
    pub(crate) fn share_request(&self, i18n: &I18n) -> Option<ShareRequest> {
        let index = self.current_index()?;
        let locator = self.current_locator()?;
        let position = (index + 1).to_string();
        Some(ShareRequest {
            title: i18n.tr_with_args("share-title", &[("index", position.as_str())]),
            url: locator.to_string(),
        })
    }

    fn open_in_player(&self) -> Task<Message> {
        if self.kind.is_image() {
            return Task::none();
        }
        let Some(locator) = self.current_locator().map(str::to_owned) else {
            return Task::none();
        };

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    open::that(&locator).map_err(|err| format!("{locator}: {err}"))
                })
                .await
                .unwrap_or_else(|err| Err(err.to_string()))
            },
            Message::PlayerOpened,
        )
    }

    fn close(&mut self) -> Effect {
        self.slideshow.stop();
        self.drag.stop();
        Effect::Close
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn items(&self) -> &MediaList {
        &self.items
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// `None` when the media list is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.index.map(ViewIndex::current)
    }

    #[must_use]
    pub fn current_locator(&self) -> Option<&str> {
        self.current_index().and_then(|index| self.items.get(index))
    }

    /// Display name of the current item, for the window title.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.current_locator().map(media::display_name)
    }

    #[must_use]
    pub fn is_favorite(&self, locator: &str) -> bool {
        self.favorites.contains(locator)
    }

    #[must_use]
    pub fn is_current_favorite(&self) -> bool {
        self.current_locator()
            .is_some_and(|locator| self.favorites.contains(locator))
    }

    #[must_use]
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_slideshow_running(&self) -> bool {
        self.slideshow.is_running()
    }

    #[must_use]
    pub fn is_strip_visible(&self) -> bool {
        self.strip_hovered
    }

    pub(super) fn handle(&self, index: usize) -> Option<&image::Handle> {
        self.handles.get(index)
    }
}
