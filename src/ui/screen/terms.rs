// ui/screen/terms.rs - Terms of Service
//
// Static legal copy. The acknowledge button just navigates back; nothing is
// recorded.

use iced::widget::{button, column, container, text};
use iced::{Element, Length, Padding};

use crate::ui::palette::Palette;
use crate::ui::style;

const SECTIONS: [(&str, &str); 4] = [
    (
        "1. Acceptance of terms",
        "By using LottoDesk you agree to these terms and to your state \
         lottery's retailer agreement. If you do not agree, do not use the \
         app.",
    ),
    (
        "2. Retailer responsibilities",
        "You are responsible for the accuracy of inventory counts entered in \
         the app and for safeguarding activated ticket books. The app is a \
         record-keeping aid and does not replace your lottery terminal.",
    ),
    (
        "3. Data",
        "Inventory data stays on your device unless you enable sync. \
         Anonymized diagnostics are sent only if you opt in under Privacy & \
         Security.",
    ),
    (
        "4. Changes",
        "We may update these terms. Material changes are announced in the \
         app at least 14 days before they take effect.",
    ),
];

#[derive(Debug, Clone)]
pub enum Message {
    Acknowledge,
}

pub fn view(palette: &'static Palette) -> Element<'static, Message> {
    let mut body = column![
        text("Last updated: March 2026")
            .size(11)
            .color(palette.text_muted),
    ]
    .spacing(12);

    for (heading, copy) in SECTIONS {
        body = body.push(
            column![
                text(heading).size(13).color(palette.text_primary),
                text(copy).size(12).color(palette.text_secondary),
            ]
            .spacing(4),
        );
    }

    column![
        container(body).padding(16).width(Length::Fill).style(style::card(palette)),
        button(text("I have read the terms").size(14))
            .width(Length::Fill)
            .padding(Padding::from([12, 0]))
            .style(style::primary_button(palette))
            .on_press(Message::Acknowledge),
    ]
    .spacing(12)
    .into()
}
