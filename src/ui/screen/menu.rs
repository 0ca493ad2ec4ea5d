// ui/screen/menu.rs - Settings Menu (root screen)
//
// Entry point into every themed screen plus the scan action. Stateless; the
// app owns the navigation stack and the modal flag.

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Element, Length, Padding};

use lottodesk::models::StoreProfile;

use crate::ui::palette::Palette;
use crate::ui::style;

/// Destinations reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    EditStore,
    Organizations,
    Payments,
    PrivacySecurity,
    ChangePassword,
    DarkMode,
    HelpSupport,
    Terms,
}

impl Entry {
    fn glyph(self) -> &'static str {
        match self {
            Entry::EditStore => "[S]",
            Entry::Organizations => "[O]",
            Entry::Payments => "[P]",
            Entry::PrivacySecurity => "[L]",
            Entry::ChangePassword => "[K]",
            Entry::DarkMode => "[D]",
            Entry::HelpSupport => "[?]",
            Entry::Terms => "[T]",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Entry::EditStore => "Store profile",
            Entry::Organizations => "Organizations",
            Entry::Payments => "Payment methods",
            Entry::PrivacySecurity => "Privacy & security",
            Entry::ChangePassword => "Change password",
            Entry::DarkMode => "Appearance",
            Entry::HelpSupport => "Help & support",
            Entry::Terms => "Terms of service",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(Entry),
    Scan,
}

const SECTIONS: [(&str, &[Entry]); 3] = [
    ("Store", &[Entry::EditStore, Entry::Organizations, Entry::Payments]),
    (
        "Account",
        &[Entry::PrivacySecurity, Entry::ChangePassword, Entry::DarkMode],
    ),
    ("About", &[Entry::HelpSupport, Entry::Terms]),
];

pub fn view<'a>(palette: &'static Palette, store: &'a StoreProfile) -> Element<'a, Message> {
    // Store identity card at the top, like the account header of the
    // mobile layout.
    let store_card = container(
        row![
            container(text("[*]").size(22).color(palette.accent))
                .padding(Padding::from([10, 12]))
                .style(move |_| container::Style {
                    background: Some(iced::Background::Color(palette.bg_raised)),
                    border: iced::Border {
                        radius: 10.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            column![
                text(store.name.as_str()).size(16).color(palette.text_primary),
                text(store.license.as_str()).size(12).color(palette.text_muted),
            ]
            .spacing(2),
            horizontal_space(),
            text(if store.active { "Open" } else { "Closed" })
                .size(12)
                .color(if store.active { palette.success } else { palette.danger }),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .padding(14)
    .width(Length::Fill)
    .style(style::card(palette));

    let entry_row = |entry: Entry| {
        button(
            row![
                text(entry.glyph()).size(13).color(palette.accent),
                text(entry.label()).size(14).color(palette.text_primary),
                horizontal_space(),
                text(">").size(13).color(palette.text_muted),
            ]
            .spacing(12)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([12, 14]))
        .style(style::row_button(palette))
        .on_press(Message::Open(entry))
    };

    let mut body = column![store_card].spacing(8);
    for (heading, entries) in SECTIONS {
        body = body.push(
            text(heading)
                .size(12)
                .color(palette.text_muted),
        );
        let mut section = column![].spacing(0);
        for &entry in entries {
            section = section.push(entry_row(entry));
        }
        body = body.push(container(section).width(Length::Fill).style(style::card(palette)));
    }

    let scan_button = button(
        row![
            text("[/]").size(14),
            text("Scan").size(14),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .padding(Padding::from([12, 28]))
    .style(style::primary_button(palette))
    .on_press(Message::Scan);

    column![
        body,
        container(scan_button)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    ]
    .spacing(16)
    .into()
}
