// ui/screen/edit_store.rs - Store Profile Editor
//
// Form bound to the store record handed over as the navigation payload.
// Edits stay local; a passing save confirms and hands the record back to the
// app.

use iced::widget::{button, checkbox, column, container, text, text_input};
use iced::{Element, Length, Padding};

use lottodesk::models::StoreProfile;

use crate::ui::palette::Palette;
use crate::ui::style;

#[derive(Debug)]
pub struct State {
    store: StoreProfile,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    AddressChanged(String),
    PhoneChanged(String),
    EmailChanged(String),
    ManagerChanged(String),
    LicenseChanged(String),
    ActiveToggled(bool),
    Submit,
}

pub enum Event {
    Saved(StoreProfile),
}

impl State {
    /// `store` is the params payload from the caller.
    pub fn new(store: StoreProfile) -> Self {
        Self { store, error: None }
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::NameChanged(v) => self.store.name = v,
            Message::AddressChanged(v) => self.store.address = v,
            Message::PhoneChanged(v) => self.store.phone = v,
            Message::EmailChanged(v) => self.store.email = v,
            Message::ManagerChanged(v) => self.store.manager = v,
            Message::LicenseChanged(v) => self.store.license = v,
            Message::ActiveToggled(v) => self.store.active = v,
            Message::Submit => match self.store.validate() {
                Ok(()) => {
                    self.error = None;
                    return Some(Event::Saved(self.store.clone()));
                }
                Err(message) => self.error = Some(message),
            },
        }
        None
    }

    pub fn view(&self, palette: &'static Palette) -> Element<'_, Message> {
        let field = |label: &'static str, value: &str, on_input: fn(String) -> Message| {
            column![
                text(label).size(12).color(palette.text_secondary),
                text_input("", value).padding(10).size(14).on_input(on_input),
            ]
            .spacing(4)
        };

        let details = container(
            column![
                field("Store name", &self.store.name, Message::NameChanged),
                field("Address", &self.store.address, Message::AddressChanged),
                field("Phone", &self.store.phone, Message::PhoneChanged),
                field("Email", &self.store.email, Message::EmailChanged),
            ]
            .spacing(12),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::card(palette));

        let management = container(
            column![
                field("Manager", &self.store.manager, Message::ManagerChanged),
                field("Lottery license", &self.store.license, Message::LicenseChanged),
                checkbox("Store is open for business", self.store.active)
                    .on_toggle(Message::ActiveToggled)
                    .size(18)
                    .spacing(10),
            ]
            .spacing(12),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::card(palette));

        let mut content = column![details, management].spacing(12);

        if let Some(error) = &self.error {
            content = content.push(text(format!("! {error}")).size(12).color(palette.danger));
        }

        content
            .push(
                button(text("Save changes").size(14))
                    .width(Length::Fill)
                    .padding(Padding::from([12, 0]))
                    .style(style::primary_button(palette))
                    .on_press(Message::Submit),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_with_blank_name_sets_error() {
        let mut state = State::new(StoreProfile::sample());
        state.update(Message::NameChanged(String::new()));
        assert!(state.update(Message::Submit).is_none());
        assert_eq!(state.error.as_deref(), Some("Store name is required"));
    }

    #[test]
    fn submit_returns_edited_store() {
        let mut state = State::new(StoreProfile::sample());
        state.update(Message::ManagerChanged("Lee Park".to_string()));
        state.update(Message::ActiveToggled(false));
        match state.update(Message::Submit) {
            Some(Event::Saved(store)) => {
                assert_eq!(store.manager, "Lee Park");
                assert!(!store.active);
            }
            None => panic!("expected save event"),
        }
    }
}
