// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window dark backdrop behind the media.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Translucent band behind the thumbnail strip.
pub fn strip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::STRIP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Thumbnail frame; the current item gets a highlighted border.
pub fn thumbnail_frame(is_current: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            color: if is_current {
                palette::PRIMARY_500
            } else {
                Color::TRANSPARENT
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if is_current { shadow::MD } else { shadow::NONE },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Poster card shown in place of a video.
pub fn poster(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Toast card with a severity-colored accent border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
