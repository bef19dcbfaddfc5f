// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox navigation and favorites.
//!
//! Measures the performance of:
//! - Wraparound navigation over a large gallery
//! - Favorite toggling, including serialization to the store

use criterion::{criterion_group, criterion_main, Criterion};
use iced_lightbox::config::Config;
use iced_lightbox::favorites::{Favorites, MemoryStore};
use iced_lightbox::i18n::fluent::I18n;
use iced_lightbox::media::{MediaKind, MediaList, PageCursor};
use iced_lightbox::share::ShareService;
use iced_lightbox::ui::lightbox::{LightboxSettings, Message, State, ViewIndex};
use std::hint::black_box;
use std::sync::Arc;

const GALLERY_LEN: usize = 10_000;

fn gallery() -> MediaList {
    MediaList::new((0..GALLERY_LEN).map(|i| format!("/gallery/img-{i:05}.jpg")))
}

/// Pure index arithmetic, crossing the wrap boundary every lap.
fn bench_view_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("view_index_next_lap", |b| {
        b.iter(|| {
            let Some(mut index) = ViewIndex::new(0, GALLERY_LEN) else {
                return;
            };
            for _ in 0..GALLERY_LEN {
                index.next();
            }
            black_box(index.current());
        });
    });

    group.finish();
}

/// Full update path: message dispatch plus transform reset.
fn bench_lightbox_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let i18n = I18n::new(Some("en-US".into()), &Config::default());

    let (mut state, _) = State::new(
        gallery(),
        MediaKind::Video,
        PageCursor::default(),
        Arc::new(MemoryStore::new()),
        ShareService::default(),
        LightboxSettings::default(),
    );

    group.bench_function("previous_wraparound", |b| {
        b.iter(|| {
            let _ = state.handle_message(Message::Previous, &i18n);
            black_box(state.current_index());
        });
    });

    group.finish();
}

/// Toggle on and off again; each toggle rewrites the whole set.
fn bench_favorites(c: &mut Criterion) {
    let mut group = c.benchmark_group("favorites");

    let (mut favorites, _) = Favorites::load(Arc::new(MemoryStore::new()));
    for locator in gallery().iter().take(500) {
        favorites.toggle(locator);
    }

    group.bench_function("toggle_with_500_favorites", |b| {
        b.iter(|| {
            black_box(favorites.toggle("/gallery/extra.jpg"));
            black_box(favorites.toggle("/gallery/extra.jpg"));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_view_index,
    bench_lightbox_messages,
    bench_favorites
);
criterion_main!(benches);
