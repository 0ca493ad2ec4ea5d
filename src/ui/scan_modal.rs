// ui/scan_modal.rs - Scan Type Selection
//
// Stateless presentational modal body: two scan choices, nothing else. The
// caller owns the visibility flag and wires the scrim to its close message;
// each choice emits exactly one message.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Padding};

use super::palette::Palette;
use super::style;

pub fn view<'a, Message: Clone + 'a>(
    palette: &'static Palette,
    on_ticket: Message,
    on_book: Message,
) -> Element<'a, Message> {
    let choice = |title: &'a str, subtitle: &'a str, glyph: &'a str, message: Message| {
        button(
            row![
                container(text(glyph).size(20).color(palette.accent))
                    .padding(Padding::from([8, 10]))
                    .style(move |_| container::Style {
                        background: Some(iced::Background::Color(palette.bg_raised)),
                        border: iced::Border {
                            radius: 8.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
                column![
                    text(title).size(14).color(palette.text_primary),
                    text(subtitle).size(12).color(palette.text_secondary),
                ]
                .spacing(2),
            ]
            .spacing(12)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(12)
        .style(style::row_button(palette))
        .on_press(message)
    };

    container(
        column![
            text("What are you scanning?").size(16).color(palette.text_primary),
            choice(
                "Single ticket",
                "Check or redeem one ticket",
                "[|]",
                on_ticket,
            ),
            choice(
                "Ticket book",
                "Receive a full pack into inventory",
                "[#]",
                on_book,
            ),
            text("Tap outside to close").size(11).color(palette.text_muted),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fixed(320.0))
    .style(move |_| container::Style {
        background: Some(iced::Background::Color(palette.bg_surface)),
        border: iced::Border {
            color: palette.border,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    })
    .into()
}
