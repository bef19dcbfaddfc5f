// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Translucent white control on the dark backdrop (toolbar, arrows, zoom bar).
///
/// `corner` is the border radius: [`radius::FULL`] for round buttons,
/// [`radius::MD`] for the zoom bar.
pub fn control(corner: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::CONTROL_HOVER,
            button::Status::Pressed => opacity::CONTROL_PRESSED,
            button::Status::Active | button::Status::Disabled => opacity::CONTROL,
        };
        let text_color = if matches!(status, button::Status::Disabled) {
            Color { a: 0.5, ..WHITE }
        } else {
            WHITE
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color,
            border: Border {
                radius: corner.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Favorite toggle while the current item is a favorite.
pub fn favorite_active(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::FAVORITE_600,
        _ => palette::FAVORITE_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Thumbnail tile; the frame carries the highlight, the button stays bare.
pub fn thumbnail(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Small borderless button (toast dismiss).
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::CONTROL,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::CONTROL_PRESSED,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_brightens_on_hover() {
        let style = control(radius::FULL);
        let active = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);

        let alpha = |s: &button::Style| match s.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected a color background"),
        };
        assert!(alpha(&hovered) > alpha(&active));
        assert_eq!(active.text_color, WHITE);
    }

    #[test]
    fn favorite_active_uses_favorite_accent() {
        let style = favorite_active(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::FAVORITE_500))
        );
    }

    #[test]
    fn dismiss_is_transparent_at_rest() {
        let style = dismiss(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
    }
}
