// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for the bounds and defaults
//! used across the lightbox. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Scale bounds (as percentages) and zoom step bounds
//! - **Slideshow**: Auto-advance period
//! - **Gallery**: Pagination defaults
//! - **Notifications**: Toast tick cadence

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Identity scale (100% = 1.0).
pub const DEFAULT_ZOOM_PERCENT: f32 = 100.0;

/// Minimum allowed scale (0.5).
pub const MIN_ZOOM_PERCENT: f32 = 50.0;

/// Maximum allowed scale (4.0).
pub const MAX_ZOOM_PERCENT: f32 = 400.0;

/// Default zoom step for zoom in/out operations (0.1).
pub const DEFAULT_ZOOM_STEP_PERCENT: f32 = 10.0;

/// Minimum allowed zoom step percentage.
pub const MIN_ZOOM_STEP_PERCENT: f32 = 1.0;

/// Maximum allowed zoom step percentage.
pub const MAX_ZOOM_STEP_PERCENT: f32 = 100.0;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default slideshow period in milliseconds.
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u64 = 3000;

/// Minimum slideshow period in milliseconds.
pub const MIN_SLIDESHOW_INTERVAL_MS: u64 = 1000;

/// Maximum slideshow period in milliseconds.
pub const MAX_SLIDESHOW_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of gallery items per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Largest accepted page size.
pub const MAX_ITEMS_PER_PAGE: usize = 10_000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Tick cadence for toast auto-dismiss checks (in milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_PERCENT > 0.0);
    assert!(MIN_ZOOM_PERCENT < DEFAULT_ZOOM_PERCENT);
    assert!(MAX_ZOOM_PERCENT > DEFAULT_ZOOM_PERCENT);
    assert!(MIN_ZOOM_STEP_PERCENT > 0.0);
    assert!(MAX_ZOOM_STEP_PERCENT > MIN_ZOOM_STEP_PERCENT);
    assert!(DEFAULT_ZOOM_STEP_PERCENT >= MIN_ZOOM_STEP_PERCENT);
    assert!(DEFAULT_ZOOM_STEP_PERCENT <= MAX_ZOOM_STEP_PERCENT);

    // Slideshow validation
    assert!(MIN_SLIDESHOW_INTERVAL_MS > 0);
    assert!(MAX_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS <= MAX_SLIDESHOW_INTERVAL_MS);

    // Gallery validation
    assert!(DEFAULT_ITEMS_PER_PAGE > 0);
    assert!(DEFAULT_ITEMS_PER_PAGE <= MAX_ITEMS_PER_PAGE);

    assert!(NOTIFICATION_TICK_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(DEFAULT_ZOOM_PERCENT, 100.0);
        assert_eq!(MIN_ZOOM_PERCENT / 100.0, 0.5);
        assert_eq!(MAX_ZOOM_PERCENT / 100.0, 4.0);
    }

    #[test]
    fn zoom_step_defaults_are_valid() {
        assert_eq!(DEFAULT_ZOOM_STEP_PERCENT, 10.0);
        assert!(DEFAULT_ZOOM_STEP_PERCENT >= MIN_ZOOM_STEP_PERCENT);
        assert!(DEFAULT_ZOOM_STEP_PERCENT <= MAX_ZOOM_STEP_PERCENT);
    }

    #[test]
    fn slideshow_defaults_are_valid() {
        assert_eq!(DEFAULT_SLIDESHOW_INTERVAL_MS, 3000);
        assert!(DEFAULT_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
        assert!(DEFAULT_SLIDESHOW_INTERVAL_MS <= MAX_SLIDESHOW_INTERVAL_MS);
    }

    #[test]
    fn gallery_defaults_are_valid() {
        assert_eq!(DEFAULT_ITEMS_PER_PAGE, 20);
    }
}
