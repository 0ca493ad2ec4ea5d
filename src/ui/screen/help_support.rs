// ui/screen/help_support.rs - Help & Support
//
// Expandable FAQ plus contact actions. Contact buttons only dispatch a URI
// to the OS; there is no in-app messaging.

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Element, Length, Padding};

use crate::ui::palette::Palette;
use crate::ui::style;

const FAQ: [(&str, &str); 5] = [
    (
        "How do I receive a new ticket book?",
        "Use Scan from the home screen and choose \"Ticket book\", then scan \
         the pack barcode. The book is added to your active inventory.",
    ),
    (
        "Why is a game missing from my inventory?",
        "Games are listed once at least one book has been activated. Settled \
         or returned books drop off after the weekly invoice.",
    ),
    (
        "How do I change the store that appears on reports?",
        "Open Store profile from the home screen and edit the store details. \
         Changes apply to reports generated afterwards.",
    ),
    (
        "When is commission paid out?",
        "Commission follows your state lottery's invoice cycle, usually \
         weekly. The exact schedule is shown on your organization page.",
    ),
    (
        "Can I use the app on more than one device?",
        "Yes. Sign in with the same retailer account; inventory counts sync \
         when both devices are online.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Email,
    Phone,
    Website,
}

impl Contact {
    pub fn uri(self) -> &'static str {
        match self {
            Contact::Email => "mailto:support@lottodesk.app",
            Contact::Phone => "tel:+18005550123",
            Contact::Website => "https://lottodesk.app/help",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Contact::Email => "Email support",
            Contact::Phone => "Call us",
            Contact::Website => "Help center",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle(usize),
    Contact(Contact),
}

pub enum Event {
    OpenUri(&'static str),
}

#[derive(Debug, Default)]
pub struct State {
    expanded: Option<usize>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Toggle(index) => {
                // Tapping the open question closes it.
                self.expanded = if self.expanded == Some(index) {
                    None
                } else {
                    Some(index)
                };
                None
            }
            Message::Contact(contact) => Some(Event::OpenUri(contact.uri())),
        }
    }

    pub fn view(&self, palette: &'static Palette) -> Element<'_, Message> {
        let mut faq = column![].spacing(0);
        for (index, (question, answer)) in FAQ.iter().enumerate() {
            let open = self.expanded == Some(index);
            faq = faq.push(
                button(
                    row![
                        text(*question).size(13).color(palette.text_primary),
                        horizontal_space(),
                        text(if open { "-" } else { "+" })
                            .size(14)
                            .color(palette.accent),
                    ]
                    .spacing(8)
                    .align_y(iced::Alignment::Center),
                )
                .width(Length::Fill)
                .padding(Padding::from([12, 14]))
                .style(style::row_button(palette))
                .on_press(Message::Toggle(index)),
            );
            if open {
                faq = faq.push(
                    container(text(*answer).size(12).color(palette.text_secondary))
                        .padding(Padding::from([0, 14]))
                        .width(Length::Fill),
                );
            }
        }

        let contact_button = |contact: Contact| {
            button(text(contact.label()).size(13))
                .padding(Padding::from([10, 16]))
                .style(style::ghost_button(palette))
                .on_press(Message::Contact(contact))
        };

        column![
            text("Frequently asked").size(12).color(palette.text_muted),
            container(faq).width(Length::Fill).style(style::card(palette)),
            text("Still stuck?").size(12).color(palette.text_muted),
            row![
                contact_button(Contact::Email),
                contact_button(Contact::Phone),
                contact_button(Contact::Website),
            ]
            .spacing(8),
        ]
        .spacing(12)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = State::new();
        assert!(state.update(Message::Toggle(2)).is_none());
        assert_eq!(state.expanded, Some(2));
        state.update(Message::Toggle(2));
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn contact_emits_matching_uri() {
        let mut state = State::new();
        match state.update(Message::Contact(Contact::Email)) {
            Some(Event::OpenUri(uri)) => assert_eq!(uri, "mailto:support@lottodesk.app"),
            None => panic!("expected uri event"),
        }
    }
}
