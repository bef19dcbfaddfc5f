// SPDX-License-Identifier: MPL-2.0
use iced::keyboard::{self, key::Named, Key, Location, Modifiers};
use iced::{event, window, Point};
use iced_lightbox::config::{self, Config, GeneralConfig};
use iced_lightbox::error::ShareError;
use iced_lightbox::favorites::{FavoritesStore, JsonFileStore, MemoryStore};
use iced_lightbox::i18n::fluent::I18n;
use iced_lightbox::media::{MediaKind, MediaList, PageCursor};
use iced_lightbox::share::{ClipboardWriter, ShareOutcome, ShareRequest, ShareService};
use iced_lightbox::ui::lightbox::{Effect, LightboxSettings, Message, State};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Default)]
struct FakeClipboard {
    written: Mutex<Vec<String>>,
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        self.written
            .lock()
            .map_err(|_| ShareError::Clipboard("poisoned".into()))?
            .push(text.to_string());
        Ok(())
    }
}

fn i18n() -> I18n {
    I18n::new(Some("en-US".into()), &Config::default())
}

fn open(items: &[&str], index_in_page: usize, store: Arc<dyn FavoritesStore>) -> State {
    let (state, warning) = State::new(
        MediaList::new(items.iter().map(|s| (*s).to_string())),
        MediaKind::Image,
        PageCursor {
            page: 1,
            per_page: 20,
            index_in_page,
        },
        store,
        ShareService::new(None, Arc::new(FakeClipboard::default())),
        LightboxSettings::default(),
    );
    assert!(warning.is_none());
    state
}

fn send(state: &mut State, i18n: &I18n, message: Message) -> Effect {
    state.handle_message(message, i18n).0
}

fn key_press(key: Key) -> Message {
    Message::RawEvent {
        window: window::Id::unique(),
        event: event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        }),
    }
}

#[test]
fn previous_from_first_item_wraps_to_last() {
    let i18n = i18n();
    let mut state = open(&["A", "B", "C"], 0, Arc::new(MemoryStore::new()));

    send(&mut state, &i18n, Message::Previous);
    assert_eq!(state.current_index(), Some(2));
    assert_eq!(state.current_locator(), Some("C"));

    send(&mut state, &i18n, Message::Next);
    assert_eq!(state.current_index(), Some(0));
}

#[test]
fn toggling_twice_restores_persisted_set() {
    let i18n = i18n();
    let store = Arc::new(MemoryStore::new());
    let mut state = open(&["A", "B", "C"], 1, store.clone());

    send(&mut state, &i18n, Message::ToggleFavorite);
    assert!(state.is_favorite("B"));
    assert_eq!(store.raw().as_deref(), Some(r#"["B"]"#));

    send(&mut state, &i18n, Message::ToggleFavorite);
    assert!(!state.is_favorite("B"));
    assert_eq!(store.raw().as_deref(), Some("[]"));
}

#[test]
fn favorites_persisted_by_one_session_load_in_the_next() {
    let i18n = i18n();
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = Arc::new(JsonFileStore::new(dir.path().join("favorites.json")));

    let mut first = open(&["A", "B"], 0, store.clone());
    send(&mut first, &i18n, Message::ToggleFavorite);
    drop(first);

    let second = open(&["A", "B"], 1, store);
    assert!(second.is_favorite("A"));
    assert!(!second.is_current_favorite());
}

#[test]
fn zoom_steps_are_exact_and_capped() {
    let i18n = i18n();
    let mut state = open(&["A"], 0, Arc::new(MemoryStore::new()));

    for _ in 0..5 {
        send(&mut state, &i18n, Message::ZoomIn);
    }
    assert_eq!(state.transform().scale.as_factor(), 1.5);

    for _ in 0..40 {
        send(&mut state, &i18n, Message::ZoomIn);
    }
    assert_eq!(state.transform().scale.as_factor(), 4.0);

    for _ in 0..60 {
        send(&mut state, &i18n, Message::ZoomOut);
    }
    assert_eq!(state.transform().scale.as_factor(), 0.5);
}

#[test]
fn four_rotations_return_to_upright() {
    let i18n = i18n();
    let mut state = open(&["A"], 0, Arc::new(MemoryStore::new()));

    for expected in [90, 180, 270, 0] {
        send(&mut state, &i18n, Message::Rotate);
        assert_eq!(state.transform().rotation.degrees(), expected);
    }
}

#[test]
fn every_navigation_resets_the_transform() {
    let i18n = i18n();
    let mut state = open(&["A", "B", "C"], 0, Arc::new(MemoryStore::new()));

    for navigation in [Message::Next, Message::Previous, Message::JumpTo(2)] {
        send(&mut state, &i18n, Message::ZoomIn);
        send(&mut state, &i18n, Message::Rotate);
        send(&mut state, &i18n, Message::CursorMoved(Point::new(5.0, 5.0)));
        send(&mut state, &i18n, Message::SurfacePressed);
        send(&mut state, &i18n, Message::CursorMoved(Point::new(25.0, 5.0)));
        assert!(!state.transform().is_identity());

        send(&mut state, &i18n, navigation);
        assert!(state.transform().is_identity());
    }
    assert_eq!(state.current_index(), Some(2));
}

#[test]
fn slideshow_advances_once_per_tick_until_stopped() {
    let i18n = i18n();
    let mut state = open(&["A", "B", "C"], 0, Arc::new(MemoryStore::new()));

    send(&mut state, &i18n, Message::ToggleSlideshow);
    assert!(state.is_slideshow_running());

    send(&mut state, &i18n, Message::SlideshowTick(1));
    assert_eq!(state.current_index(), Some(1));
    send(&mut state, &i18n, Message::SlideshowTick(1));
    assert_eq!(state.current_index(), Some(2));

    send(&mut state, &i18n, Message::ToggleSlideshow);
    assert!(!state.is_slideshow_running());

    // A tick already in flight when the timer was released does nothing.
    send(&mut state, &i18n, Message::SlideshowTick(1));
    assert_eq!(state.current_index(), Some(2));
}

#[test]
fn restarted_slideshow_ignores_ticks_from_the_old_timer() {
    let i18n = i18n();
    let mut state = open(&["A", "B", "C"], 0, Arc::new(MemoryStore::new()));

    send(&mut state, &i18n, Message::ToggleSlideshow);
    send(&mut state, &i18n, Message::ToggleSlideshow);
    send(&mut state, &i18n, Message::ToggleSlideshow);

    send(&mut state, &i18n, Message::SlideshowTick(1));
    assert_eq!(state.current_index(), Some(0));
    send(&mut state, &i18n, Message::SlideshowTick(2));
    assert_eq!(state.current_index(), Some(1));
}

#[test]
fn empty_list_ignores_everything_but_close() {
    let i18n = i18n();
    let store = Arc::new(MemoryStore::new());
    let mut state = open(&[], 0, store.clone());
    assert_eq!(state.current_index(), None);

    for message in [
        Message::Next,
        Message::Previous,
        Message::JumpTo(0),
        Message::ZoomIn,
        Message::Rotate,
        Message::ToggleFavorite,
        Message::ToggleSlideshow,
    ] {
        assert!(matches!(send(&mut state, &i18n, message), Effect::None));
    }

    assert_eq!(state.current_index(), None);
    assert!(state.transform().is_identity());
    assert!(!state.is_slideshow_running());
    assert_eq!(store.raw(), None);

    assert!(matches!(
        send(&mut state, &i18n, Message::Close),
        Effect::Close
    ));
}

#[test]
fn start_index_past_the_end_is_clamped() {
    let state = open(&["A", "B"], 7, Arc::new(MemoryStore::new()));
    assert_eq!(state.current_index(), Some(1));
}

#[test]
fn keyboard_drives_the_lightbox() {
    let i18n = i18n();
    let store = Arc::new(MemoryStore::new());
    let mut state = open(&["A", "B", "C"], 0, store.clone());

    send(&mut state, &i18n, key_press(Key::Named(Named::ArrowRight)));
    assert_eq!(state.current_index(), Some(1));

    send(&mut state, &i18n, key_press(Key::Named(Named::ArrowLeft)));
    send(&mut state, &i18n, key_press(Key::Named(Named::ArrowLeft)));
    assert_eq!(state.current_index(), Some(2));

    send(&mut state, &i18n, key_press(Key::Character("+".into())));
    assert_eq!(state.transform().scale.percent(), 110.0);
    send(&mut state, &i18n, key_press(Key::Character("-".into())));
    assert_eq!(state.transform().scale.percent(), 100.0);

    send(&mut state, &i18n, key_press(Key::Character("r".into())));
    assert_eq!(state.transform().rotation.degrees(), 90);

    send(&mut state, &i18n, key_press(Key::Character("f".into())));
    assert!(state.is_favorite("C"));
    assert_eq!(store.raw().as_deref(), Some(r#"["C"]"#));

    let effect = send(&mut state, &i18n, key_press(Key::Named(Named::Escape)));
    assert!(matches!(effect, Effect::Close));
}

#[test]
fn clipboard_fallback_receives_the_locator() {
    let clipboard = Arc::new(FakeClipboard::default());
    let service = ShareService::new(None, clipboard.clone());
    let title = i18n().tr_with_args("share-title", &[("index", "3")]);
    assert_eq!(title, "Shared Image 3");

    let outcome = service.share(&ShareRequest {
        title,
        url: "https://example.org/c.jpg".into(),
    });

    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(
        clipboard.written.lock().unwrap().as_slice(),
        ["https://example.org/c.jpg".to_string()]
    );
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(
        I18n::new(None, &loaded).current_locale().to_string(),
        "en-US"
    );

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("lightbox-slideshow-start"), "Diaporama");
}
