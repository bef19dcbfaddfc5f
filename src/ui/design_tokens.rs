// SPDX-License-Identifier: MPL-2.0
//! Design tokens of the lightbox.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Overlay opacity levels (white-on-black controls)
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Control and thumbnail sizes
//! - **Typography**: Font size scale
//! - **Border** / **Radius** / **Shadow**
//!
//! ```
//! use iced_lightbox::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let control_bg = Color { a: opacity::CONTROL, ..palette::WHITE };
//! assert!(control_bg.a < 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Current-thumbnail highlight.
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);

    /// Favorite accent (heart, active favorite button).
    pub const FAVORITE_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const FAVORITE_600: Color = Color::from_rgb(0.863, 0.149, 0.149);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Resting white overlay behind toolbar and arrow buttons.
    pub const CONTROL: f32 = 0.2;
    /// Hovered white overlay.
    pub const CONTROL_HOVER: f32 = 0.4;
    pub const CONTROL_PRESSED: f32 = 0.5;
    /// Thumbnail strip backdrop.
    pub const STRIP: f32 = 0.5;
    /// Full-window backdrop.
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Glyph size inside round icon buttons.
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 28.0;

    /// Thumbnail tile (3:2).
    pub const THUMBNAIL_WIDTH: f32 = 96.0;
    pub const THUMBNAIL_HEIGHT: f32 = 64.0;

    /// Height of the hover zone that reveals the thumbnail strip.
    pub const STRIP_HEIGHT: f32 = 80.0;

    /// Clearance above the strip for the zoom controls.
    pub const ZOOM_CONTROLS_BOTTOM: f32 = 88.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Thumbnail highlight and toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CONTROL_HOVER > opacity::CONTROL);
    assert!(opacity::CONTROL_PRESSED > opacity::CONTROL_HOVER);

    assert!(sizing::STRIP_HEIGHT > sizing::THUMBNAIL_HEIGHT);
    assert!(sizing::ZOOM_CONTROLS_BOTTOM >= sizing::STRIP_HEIGHT);

    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
