// SPDX-License-Identifier: MPL-2.0
//! Lightbox layout.
//!
//! Layers, bottom to top: the media stage on the backdrop, the position
//! counter and toolbar, the side arrows, the zoom bar (image mode) and the
//! hover-revealed thumbnail strip.

use super::component::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::{self, MediaKind};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, image, mouse_area, pin, tooltip, Column, Container, Row, Scrollable, Space, Stack,
    Text,
};
use iced::{mouse, ContentFit, Element, Length, Radians, Rotation};

/// Read-only context for rendering.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, env: ViewEnv<'_>) -> Element<'a, Message> {
    let i18n = env.i18n;

    let Some(index) = state.current_index() else {
        return empty_state(i18n);
    };

    let stage = match state.kind() {
        MediaKind::Image => image_stage(state, index),
        MediaKind::Video => video_stage(state, i18n),
    };

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(stage)
        .push(top_bar(state, index, i18n))
        .push(arrows(i18n));

    if state.kind().is_image() {
        stack = stack.push(zoom_controls(state, i18n));
    }

    stack = stack.push(thumbnail_strip(state, index));

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    let message = Container::new(Text::new(i18n.tr("lightbox-empty")).size(typography::TITLE_MD))
        .center(Length::Fill);

    let toolbar = Container::new(close_button(i18n))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::MD);

    Container::new(Stack::new().push(message).push(toolbar))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

/// Pannable, zoomable image surface. The pin applies the pan offset; the
/// image widget scales and rotates around its center.
fn image_stage(state: &State, index: usize) -> Element<'_, Message> {
    let transform = state.transform();

    let media: Element<'_, Message> = match state.handle(index) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .scale(transform.scale.as_factor())
            .rotation(Rotation::Floating(Radians(transform.rotation.radians())))
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let panned = pin(media).x(transform.offset.x).y(transform.offset.y);

    let interaction = if state.drag().is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(
        Container::new(panned)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true),
    )
    .on_press(Message::SurfacePressed)
    .on_release(Message::SurfaceReleased)
    .on_exit(Message::SurfaceExited)
    .on_move(Message::CursorMoved)
    .interaction(interaction)
    .into()
}

/// Poster card for the current video. Pressing the backdrop around it closes.
fn video_stage<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let name = state.current_name().unwrap_or_default();

    let play = button(Text::new(i18n.tr("lightbox-play-video")).size(typography::BODY_LG))
        .on_press(Message::OpenInPlayer)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::control(radius::MD));

    let poster = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new("\u{25B6}").size(sizing::ICON_LG * 2.0))
            .push(Text::new(name).size(typography::BODY_LG))
            .push(play),
    )
    .padding(spacing::XL)
    .style(styles::container::poster);

    // The poster reports an interaction so presses on it never reach the backdrop.
    let poster = mouse_area(poster).interaction(mouse::Interaction::Idle);

    let backdrop = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
        .on_press(Message::BackdropPressed);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(Container::new(poster).center(Length::Fill))
        .into()
}

fn top_bar<'a>(state: &State, index: usize, i18n: &I18n) -> Element<'a, Message> {
    let counter = Text::new(format!("{}/{}", index + 1, state.items().len()))
        .size(typography::BODY_LG)
        .color(palette::WHITE);

    let favorite_label = if state.is_current_favorite() {
        i18n.tr("lightbox-favorite-remove")
    } else {
        i18n.tr("lightbox-favorite-add")
    };
    let favorite = button(glyph(if state.is_current_favorite() {
        "\u{2665}"
    } else {
        "\u{2661}"
    }))
    .on_press(Message::ToggleFavorite)
    .padding(spacing::XS);
    let favorite = if state.is_current_favorite() {
        favorite.style(styles::button::favorite_active)
    } else {
        favorite.style(styles::button::control(radius::FULL))
    };

    let slideshow_label = if state.is_slideshow_running() {
        i18n.tr("lightbox-slideshow-pause")
    } else {
        i18n.tr("lightbox-slideshow-start")
    };
    let slideshow = button(Text::new(slideshow_label).size(typography::BODY))
        .on_press(Message::ToggleSlideshow)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::control(radius::FULL));

    let toolbar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(control_with_tip(
            "\u{2934}",
            Message::Share,
            i18n.tr("lightbox-share"),
        ))
        .push(styles::tooltip::styled(
            favorite,
            favorite_label,
            tooltip::Position::Bottom,
        ))
        .push(slideshow)
        .push(close_button(i18n));

    Row::new()
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(toolbar)
        .into()
}

fn arrows<'a>(i18n: &I18n) -> Element<'a, Message> {
    let arrow = |label: &'static str, message: Message, tip: String| {
        styles::tooltip::styled(
            button(Text::new(label).size(typography::TITLE_MD))
                .on_press(message)
                .padding(spacing::SM)
                .style(styles::button::control(radius::FULL)),
            tip,
            tooltip::Position::Bottom,
        )
    };

    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(arrow("\u{25C0}", Message::Previous, i18n.tr("lightbox-previous")))
        .push(Space::new().width(Length::Fill))
        .push(arrow("\u{25B6}", Message::Next, i18n.tr("lightbox-next")))
        .into()
}

fn zoom_controls<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let scale = state.transform().scale;
    let zoom_button = |label: &'static str, message: Option<Message>, tip: String| {
        styles::tooltip::styled(
            button(glyph(label))
                .on_press_maybe(message)
                .padding(spacing::XS)
                .style(styles::button::control(radius::MD)),
            tip,
            tooltip::Position::Top,
        )
    };

    let reset = button(Text::new(i18n.tr("lightbox-zoom-reset")).size(typography::BODY))
        .on_press(Message::ResetZoom)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::control(radius::MD));

    let bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(zoom_button(
            "\u{2212}",
            (!scale.is_min()).then_some(Message::ZoomOut),
            i18n.tr("lightbox-zoom-out"),
        ))
        .push(reset)
        .push(zoom_button(
            "+",
            (!scale.is_max()).then_some(Message::ZoomIn),
            i18n.tr("lightbox-zoom-in"),
        ))
        .push(zoom_button(
            "\u{27F3}",
            Some(Message::Rotate),
            i18n.tr("lightbox-rotate"),
        ));

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(iced::Padding {
            right: spacing::MD,
            bottom: sizing::ZOOM_CONTROLS_BOTTOM,
            ..iced::Padding::ZERO
        })
        .into()
}

/// Bottom strip; the hover zone keeps its height while the strip is hidden.
fn thumbnail_strip(state: &State, current: usize) -> Element<'_, Message> {
    let content: Element<'_, Message> = if state.is_strip_visible() {
        let tiles: Vec<Element<'_, Message>> = state
            .items()
            .iter()
            .enumerate()
            .map(|(index, locator)| thumbnail(state, index, locator, index == current))
            .collect();

        Container::new(
            Scrollable::new(
                Row::with_children(tiles)
                    .spacing(spacing::XS)
                    .padding(spacing::XS)
                    .align_y(Vertical::Center),
            )
            .direction(Direction::Horizontal(Scrollbar::new().width(4.0).scroller_width(4.0)))
            .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STRIP_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::strip)
        .into()
    } else {
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::STRIP_HEIGHT))
            .into()
    };

    let zone = mouse_area(content)
        .on_enter(Message::StripHovered(true))
        .on_exit(Message::StripHovered(false));

    Container::new(zone)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}

fn thumbnail<'a>(
    state: &'a State,
    index: usize,
    locator: &'a str,
    is_current: bool,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match state.handle(index) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(
            Text::new(media::display_name(locator))
                .size(typography::CAPTION)
                .wrapping(iced::widget::text::Wrapping::Glyph),
        )
        .padding(spacing::XXS)
        .center(Length::Fill)
        .into(),
    };

    let mut tile = Stack::new()
        .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .push(
            Container::new(preview)
                .width(Length::Fill)
                .height(Length::Fill)
                .clip(true)
                .style(styles::container::thumbnail_frame(is_current)),
        );

    if state.is_favorite(locator) {
        tile = tile.push(
            Container::new(
                Text::new("\u{2665}")
                    .size(typography::BODY)
                    .color(palette::FAVORITE_500),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(spacing::XXS),
        );
    }

    button(tile)
        .on_press(Message::JumpTo(index))
        .padding(0.0)
        .style(styles::button::thumbnail)
        .into()
}

fn close_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    control_with_tip("\u{2715}", Message::Close, i18n.tr("lightbox-close"))
}

fn control_with_tip<'a>(label: &'static str, message: Message, tip: String) -> Element<'a, Message> {
    styles::tooltip::styled(
        button(glyph(label))
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::control(radius::FULL)),
        tip,
        tooltip::Position::Bottom,
    )
    .into()
}

fn glyph<'a>(label: &'static str) -> Text<'a> {
    Text::new(label)
        .size(sizing::ICON_MD)
        .width(Length::Fixed(sizing::ICON_LG))
        .center()
}
