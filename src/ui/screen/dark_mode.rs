// ui/screen/dark_mode.rs - Appearance
//
// Three selectable rows for the theme mode. Selection persists first and
// applies after the write lands, so the previous mode survives a failed
// write.

use iced::widget::{column, container, radio, text};
use iced::{Element, Length};

use lottodesk::ThemeMode;

use crate::ui::palette::Palette;
use crate::ui::style;

#[derive(Debug, Clone)]
pub enum Message {
    Select(ThemeMode),
}

pub fn view(
    palette: &'static Palette,
    current: ThemeMode,
    system_is_dark: bool,
) -> Element<'static, Message> {
    let mut options = column![].spacing(4);
    for mode in ThemeMode::ALL {
        options = options.push(
            container(
                column![
                    radio(mode.label(), mode, Some(current), Message::Select)
                        .size(18)
                        .spacing(10),
                    text(mode.description()).size(11).color(palette.text_muted),
                ]
                .spacing(2),
            )
            .padding(10)
            .width(Length::Fill),
        );
    }

    let resolved = if current.is_dark(system_is_dark) {
        "dark"
    } else {
        "light"
    };

    column![
        container(options).width(Length::Fill).style(style::card(palette)),
        text(format!("Currently showing the {resolved} palette."))
            .size(12)
            .color(palette.text_secondary),
    ]
    .spacing(12)
    .into()
}
