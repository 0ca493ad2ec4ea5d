// ui/dialog.rs - Blocking Confirmation Prompts
//
// Replaces the platform alert sheet: a scrim over the current screen with a
// card holding the message and its cancel/confirm pair. Tapping the scrim is
// equivalent to cancel.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text};
use iced::{Background, Border, Element, Length, Padding};

use super::palette::Palette;
use super::style;

/// Contents of a pending confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub destructive: bool,
}

impl ConfirmDialog {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            confirm_label: "OK".to_string(),
            destructive: false,
        }
    }

    pub fn destructive(
        title: impl Into<String>,
        body: impl Into<String>,
        confirm_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            confirm_label: confirm_label.into(),
            destructive: true,
        }
    }

    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        palette: &'static Palette,
        on_confirm: Message,
        on_cancel: Message,
    ) -> Element<'a, Message> {
        let confirm_style: Box<
            dyn Fn(&iced::Theme, button::Status) -> button::Style,
        > = if self.destructive {
            Box::new(style::danger_button(palette))
        } else {
            Box::new(style::primary_button(palette))
        };

        let buttons = row![
            button(text("Cancel").size(14))
                .padding(Padding::from([10, 24]))
                .style(style::ghost_button(palette))
                .on_press(on_cancel),
            button(text(self.confirm_label.as_str()).size(14))
                .padding(Padding::from([10, 24]))
                .style(confirm_style)
                .on_press(on_confirm),
        ]
        .spacing(12);

        container(
            column![
                text(self.title.as_str()).size(17).color(palette.text_primary),
                text(self.body.as_str()).size(13).color(palette.text_secondary),
                container(buttons).width(Length::Fill).align_x(iced::alignment::Horizontal::Right),
            ]
            .spacing(16),
        )
        .padding(20)
        .width(Length::Fixed(320.0))
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.bg_surface)),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
    }
}

/// Layer `overlay` over `base` behind a scrim. A press on the scrim emits
/// `on_scrim`.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    overlay: impl Into<Element<'a, Message>>,
    palette: &'static Palette,
    on_scrim: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(
                center(opaque(overlay)).style(move |_| container::Style {
                    background: Some(Background::Color(palette.scrim)),
                    ..Default::default()
                })
            )
            .on_press(on_scrim)
        )
    ]
    .into()
}
