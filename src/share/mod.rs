// SPDX-License-Identifier: MPL-2.0
//! Best-effort sharing of the current media locator.
//!
//! Two tiers: a native share sheet when the platform offers one, otherwise the
//! locator is copied to the system clipboard. Every failure ends up in the log;
//! none is reported to the user.

use crate::error::ShareError;
use std::sync::Arc;

/// What gets shared: a human title and the item's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub url: String,
}

/// How a share attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share sheet.
    Shared,
    /// Copied to the clipboard.
    Copied,
    Failed(ShareError),
}

/// Platform share sheet.
pub trait ShareSheet: Send + Sync {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Text clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Clipboard backed by `arboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShareError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }
}

/// Native share sheet of the running platform, if there is one.
///
/// Desktop targets expose none, so sharing falls back to the clipboard.
/// Embedders can provide their own through [`ShareService::new`].
#[must_use]
pub fn native_share_sheet() -> Option<Arc<dyn ShareSheet>> {
    None
}

/// Share capability handed to the lightbox.
#[derive(Clone)]
pub struct ShareService {
    sheet: Option<Arc<dyn ShareSheet>>,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl std::fmt::Debug for ShareService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareService")
            .field("has_share_sheet", &self.sheet.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ShareService {
    fn default() -> Self {
        Self::system()
    }
}

impl ShareService {
    pub fn new(sheet: Option<Arc<dyn ShareSheet>>, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self { sheet, clipboard }
    }

    /// Platform share sheet (when available) with the system clipboard as fallback.
    pub fn system() -> Self {
        Self::new(native_share_sheet(), Arc::new(SystemClipboard))
    }

    #[must_use]
    pub fn has_share_sheet(&self) -> bool {
        self.sheet.is_some()
    }

    /// Runs the share synchronously. Blocking; call off the UI thread.
    ///
    /// The clipboard is only used when no share sheet exists. A failing share
    /// sheet is not retried through the clipboard.
    pub fn share(&self, request: &ShareRequest) -> ShareOutcome {
        let result = match &self.sheet {
            Some(sheet) => sheet.share(request).map(|()| ShareOutcome::Shared),
            None => self
                .clipboard
                .write_text(&request.url)
                .map(|()| ShareOutcome::Copied),
        };
        result.unwrap_or_else(ShareOutcome::Failed)
    }

    /// Runs the share on tokio's blocking pool.
    pub async fn share_in_background(self, request: ShareRequest) -> ShareOutcome {
        tokio::task::spawn_blocking(move || self.share(&request))
            .await
            .unwrap_or_else(|err| ShareOutcome::Failed(ShareError::Interrupted(err.to_string())))
    }
}

/// Writes the outcome of a share attempt to the log.
pub fn log_outcome(outcome: &ShareOutcome) {
    match outcome {
        ShareOutcome::Shared => log::info!("Shared via share sheet"),
        ShareOutcome::Copied => log::info!("Link copied to clipboard!"),
        ShareOutcome::Failed(err) => log::error!("Share failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Clipboard("no display".into()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct CancelledSheet;

    impl ShareSheet for CancelledSheet {
        fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
            Err(ShareError::Cancelled)
        }
    }

    struct AcceptingSheet;

    impl ShareSheet for AcceptingSheet {
        fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
            Ok(())
        }
    }

    fn request() -> ShareRequest {
        ShareRequest {
            title: "Shared Image 2".into(),
            url: "/pics/b.png".into(),
        }
    }

    #[test]
    fn without_share_sheet_copies_url() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let service = ShareService::new(None, clipboard.clone());

        assert_eq!(service.share(&request()), ShareOutcome::Copied);
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["/pics/b.png"]);
    }

    #[test]
    fn share_sheet_is_preferred_over_clipboard() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let service = ShareService::new(Some(Arc::new(AcceptingSheet)), clipboard.clone());

        assert_eq!(service.share(&request()), ShareOutcome::Shared);
        assert!(clipboard.written.lock().unwrap().is_empty());
    }

    #[test]
    fn failures_are_reported_as_outcomes() {
        let broken = Arc::new(RecordingClipboard {
            fail: true,
            ..Default::default()
        });
        let service = ShareService::new(None, broken);
        assert!(matches!(
            service.share(&request()),
            ShareOutcome::Failed(ShareError::Clipboard(_))
        ));

        let cancelled = ShareService::new(
            Some(Arc::new(CancelledSheet)),
            Arc::new(RecordingClipboard::default()),
        );
        assert_eq!(
            cancelled.share(&request()),
            ShareOutcome::Failed(ShareError::Cancelled)
        );
    }

    #[tokio::test]
    async fn background_share_completes() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let service = ShareService::new(None, clipboard.clone());

        let outcome = service.share_in_background(request()).await;
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.written.lock().unwrap().len(), 1);
    }
}
