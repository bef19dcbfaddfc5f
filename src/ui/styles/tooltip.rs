// SPDX-License-Identifier: MPL-2.0
//! Tooltips for the icon-only lightbox controls.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Light label over the dark backdrop.
pub fn tooltip_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.98,
            ..Color::from_rgb(0.95, 0.95, 0.95)
        })),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color { a: 0.3, ..palette::GRAY_400 },
        },
        shadow: shadow::MD,
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Wraps `content` with a styled tooltip reading `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_contrasts_with_backdrop() {
        let style = tooltip_container(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("expected a color background")
        };
        assert!((bg.r + bg.g + bg.b) / 3.0 > 0.5);
        assert_eq!(style.text_color, Some(palette::GRAY_900));
    }
}
