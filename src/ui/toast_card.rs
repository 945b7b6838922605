// SPDX-License-Identifier: MPL-2.0
//! Card widget rendering a single toast.
//!
//! Cards show an intent-colored icon glyph, the title, optional message and
//! timestamp lines, an optional action button, a dismiss button, and the
//! countdown progress bar along the bottom edge. The `filled` variant uses
//! the solid intent shade as the card background.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::overlay::Message;
use crate::toast::{Intent, Lifecycle, Toast};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Accent color for an intent.
#[must_use]
pub fn accent_color(intent: Intent) -> Color {
    match intent {
        Intent::Default => palette::BRAND_500,
        Intent::Success => palette::SUCCESS_500,
        Intent::Warning => palette::WARNING_500,
        Intent::Danger => palette::DANGER_500,
    }
}

/// Darker active shade, used as the filled card background.
#[must_use]
pub fn active_color(intent: Intent) -> Color {
    match intent {
        Intent::Default => palette::BRAND_700,
        Intent::Success => palette::SUCCESS_700,
        Intent::Warning => palette::WARNING_700,
        Intent::Danger => palette::DANGER_700,
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Everything the card needs to render one toast.
pub struct ViewContext<'a> {
    pub toast: &'a Toast,
    pub lifecycle: Option<&'a Lifecycle>,
    pub now: Instant,
}

/// Toast card widget.
pub struct ToastCard;

impl ToastCard {
    /// Renders a single toast card.
    pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
        let toast = ctx.toast;
        let alpha = ctx.lifecycle.map_or(1.0, |lifecycle| lifecycle.opacity(ctx.now));
        let progress = ctx.lifecycle.map_or(1.0, |lifecycle| lifecycle.progress(ctx.now));
        let accent = accent_color(toast.intent);
        let filled = toast.filled;
        let fill_background = active_color(toast.intent);
        // Evicted and exiting toasts no longer accept input.
        let interactive = !toast.exceeded && !toast.exiting;

        let icon_color = if filled { palette::WHITE } else { accent };
        let icon = Text::new(toast.icon.to_string())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(icon_color, alpha)),
            });

        let title = Text::new(toast.title.as_str())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(
                    if filled {
                        palette::WHITE
                    } else {
                        theme.palette().text
                    },
                    alpha,
                )),
            });

        let subtle = if filled {
            palette::GRAY_200
        } else {
            palette::GRAY_400
        };

        let mut info = Column::new().spacing(spacing::XXS).push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icon)
                .push(title),
        );
        if !toast.message.is_empty() {
            info = info.push(
                Text::new(toast.message.as_str())
                    .size(typography::CAPTION)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(faded(subtle, alpha)),
                    }),
            );
        }
        if let Some(timestamp) = &toast.timestamp {
            info = info.push(
                Text::new(timestamp.as_str())
                    .size(typography::CAPTION)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(faded(subtle, alpha)),
                    }),
            );
        }

        let mut controls = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if let Some(action) = &toast.action {
            let label_color = if filled { fill_background } else { palette::WHITE };
            let action_background = if filled { palette::WHITE } else { accent };
            let mut action_button = button(
                Text::new(action.label.as_str())
                    .size(typography::BODY_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(faded(label_color, alpha)),
                    }),
            )
            .padding(spacing::XXS)
            .style(move |_theme: &Theme, _status: button::Status| button::Style {
                background: Some(iced::Background::Color(faded(action_background, alpha))),
                text_color: faded(label_color, alpha),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            });
            if interactive {
                action_button =
                    action_button.on_press(Message::ActionPressed(toast.id, toast.position));
            }
            controls = controls.push(action_button);
        }

        let mut dismiss = button(
            Text::new("✕")
                .size(typography::BODY_SM)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(
                        if filled {
                            palette::WHITE
                        } else {
                            theme.palette().text
                        },
                        alpha,
                    )),
                }),
        )
        .padding(spacing::XXS)
        .style(dismiss_button_style);
        if interactive {
            dismiss = dismiss.on_press(Message::Dismiss(toast.id, toast.position));
        }
        controls = controls.push(dismiss);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(info).width(Length::Fill))
            .push(controls);

        let bar_color = if filled { palette::WHITE } else { accent };
        let bar_width = (toast.size.max_width() - 2.0 * spacing::SM) * progress;
        let bar = Container::new(text(""))
            .width(Length::Fixed(bar_width.max(0.0)))
            .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(faded(bar_color, alpha))),
                ..Default::default()
            });

        let content = Column::new().spacing(spacing::XS).push(header).push(bar);

        Container::new(content)
            .width(Length::Fixed(toast.size.max_width()))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent, filled, fill_background, alpha))
            .into()
    }
}

/// Style function for the card container.
fn card_style(
    theme: &Theme,
    accent: Color,
    filled: bool,
    fill_background: Color,
    alpha: f32,
) -> container::Style {
    let background = if filled {
        fill_background
    } else {
        theme.extended_palette().background.base.color
    };

    container::Style {
        background: Some(iced::Background::Color(faded(background, alpha))),
        border: iced::Border {
            color: faded(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, alpha),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_style_uses_accent_border() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = card_style(&theme, accent, false, palette::SUCCESS_700, 1.0);
        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn filled_card_uses_active_shade_background() {
        let theme = Theme::Dark;
        let style = card_style(
            &theme,
            palette::DANGER_500,
            true,
            palette::DANGER_700,
            1.0,
        );
        match style.background {
            Some(iced::Background::Color(color)) => assert_eq!(color, palette::DANGER_700),
            _ => panic!("filled card must have a solid background"),
        }
    }

    #[test]
    fn faded_card_scales_alpha() {
        let theme = Theme::Dark;
        let style = card_style(
            &theme,
            palette::BRAND_500,
            false,
            palette::BRAND_700,
            0.5,
        );
        assert!((style.border.color.a - 0.5).abs() < 1e-5);
    }

    #[test]
    fn every_intent_has_distinct_accent() {
        let accents: Vec<Color> = Intent::ALL.into_iter().map(accent_color).collect();
        for (i, a) in accents.iter().enumerate() {
            for b in accents.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
