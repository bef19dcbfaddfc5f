// SPDX-License-Identifier: MPL-2.0
//! Media list handed to the lightbox by its host.
//!
//! The list is externally owned and read-only: the lightbox only ever reads
//! locators out of it. A single [`MediaKind`] applies to the whole list.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// File extensions treated as video when the kind is not given explicitly.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm", "ogv"];

/// Whether the lightbox shows images or videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Guesses the kind from a locator's file extension.
    #[must_use]
    pub fn detect(locator: &str) -> Self {
        let is_video = Path::new(locator)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                VIDEO_EXTENSIONS
                    .iter()
                    .any(|video| video.eq_ignore_ascii_case(ext))
            });
        if is_video {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    #[must_use]
    pub fn is_image(self) -> bool {
        self == MediaKind::Image
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Error returned when parsing an unknown media kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMediaKind(pub String);

impl fmt::Display for UnknownMediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown media type '{}' (expected image or video)", self.0)
    }
}

impl std::error::Error for UnknownMediaKind {}

impl FromStr for MediaKind {
    type Err = UnknownMediaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(UnknownMediaKind(s.to_string())),
        }
    }
}

/// Ordered, immutable list of media locators.
///
/// Cloning is cheap; clones share the same backing storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaList(Arc<[String]>);

impl MediaList {
    pub fn new(locators: impl IntoIterator<Item = String>) -> Self {
        Self(locators.into_iter().collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for MediaList {
    fn from(locators: Vec<String>) -> Self {
        Self(locators.into())
    }
}

/// Pagination inputs describing where the lightbox opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// 1-based page number. Page 0 is read as page 1.
    pub page: usize,
    pub per_page: usize,
    pub index_in_page: usize,
}

impl PageCursor {
    /// Global offset: `(page - 1) * per_page + index_in_page`.
    #[must_use]
    pub fn global_index(self) -> usize {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .saturating_add(self.index_in_page)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: crate::config::DEFAULT_ITEMS_PER_PAGE,
            index_in_page: 0,
        }
    }
}

/// Returns the last path component of a locator, for titles and video tiles.
#[must_use]
pub fn display_name(locator: &str) -> &str {
    locator
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(locator)
}
