// ui/screen/change_password.rs - Change Password
//
// Three secure inputs with local validation. There is no credential backend;
// passing validation is success and the app confirms then pops the screen.

use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length, Padding};

use crate::ui::palette::Palette;
use crate::ui::style;

#[derive(Debug, Default)]
pub struct State {
    current: String,
    new: String,
    confirm: String,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    CurrentChanged(String),
    NewChanged(String),
    ConfirmChanged(String),
    Submit,
}

pub enum Event {
    Saved,
}

/// Validate the password triple, reporting the first failing field.
pub fn validate(current: &str, new: &str, confirm: &str) -> Result<(), String> {
    if current.is_empty() {
        return Err("Current password is required".to_string());
    }
    if new.len() < 8 {
        return Err("New password must be at least 8 characters".to_string());
    }
    if new == current {
        return Err("New password must differ from the current one".to_string());
    }
    if confirm != new {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::CurrentChanged(value) => self.current = value,
            Message::NewChanged(value) => self.new = value,
            Message::ConfirmChanged(value) => self.confirm = value,
            Message::Submit => match validate(&self.current, &self.new, &self.confirm) {
                Ok(()) => {
                    self.error = None;
                    return Some(Event::Saved);
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
                text_input("", value)
                    .secure(true)
                    .padding(10)
                    .size(14)
                    .on_input(on_input),
            ]
            .spacing(4)
        };

        let form = container(
            column![
                field("Current password", &self.current, Message::CurrentChanged),
                field("New password", &self.new, Message::NewChanged),
                field("Confirm new password", &self.confirm, Message::ConfirmChanged),
                text("Use at least 8 characters.")
                    .size(11)
                    .color(palette.text_muted),
            ]
            .spacing(12),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::card(palette));

        let mut content = column![form].spacing(12);

        if let Some(error) = &self.error {
            content = content.push(
                text(format!("! {error}")).size(12).color(palette.danger),
            );
        }

        content
            .push(
                button(text("Update password").size(14))
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
    fn first_failing_field_wins() {
        assert_eq!(
            validate("", "short", "short").unwrap_err(),
            "Current password is required"
        );
        assert_eq!(
            validate("old-secret", "short", "short").unwrap_err(),
            "New password must be at least 8 characters"
        );
        assert_eq!(
            validate("old-secret", "old-secret", "old-secret").unwrap_err(),
            "New password must differ from the current one"
        );
        assert_eq!(
            validate("old-secret", "new-secret", "other").unwrap_err(),
            "Passwords do not match"
        );
    }

    #[test]
    fn valid_triple_passes() {
        assert!(validate("old-secret", "new-secret", "new-secret").is_ok());
    }

    #[test]
    fn submit_surfaces_error_then_event() {
        let mut state = State::new();
        state.update(Message::CurrentChanged("old-secret".to_string()));
        state.update(Message::NewChanged("new".to_string()));
        state.update(Message::ConfirmChanged("new".to_string()));
        assert!(state.update(Message::Submit).is_none());
        assert!(state.error.is_some());

        state.update(Message::NewChanged("new-secret".to_string()));
        state.update(Message::ConfirmChanged("new-secret".to_string()));
        assert!(matches!(state.update(Message::Submit), Some(Event::Saved)));
        assert!(state.error.is_none());
    }
}
