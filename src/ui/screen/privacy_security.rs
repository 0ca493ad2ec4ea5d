// ui/screen/privacy_security.rs - Privacy & Security
//
// Local preference toggles, the clear-cache action, and a shortcut to the
// password screen. Clearing the cache is destructive and always preserves
// the theme preference.

use iced::widget::{button, checkbox, column, container, horizontal_space, row, text};
use iced::{Element, Length, Padding};

use crate::ui::palette::Palette;
use crate::ui::style;

#[derive(Debug)]
pub struct State {
    biometric: bool,
    two_factor: bool,
    crash_reports: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    BiometricToggled(bool),
    TwoFactorToggled(bool),
    CrashReportsToggled(bool),
    ChangePassword,
    ClearCache,
}

pub enum Event {
    GoChangePassword,
    ConfirmClearCache,
}

impl State {
    pub fn new() -> Self {
        Self {
            biometric: true,
            two_factor: false,
            crash_reports: true,
        }
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::BiometricToggled(v) => self.biometric = v,
            Message::TwoFactorToggled(v) => self.two_factor = v,
            Message::CrashReportsToggled(v) => self.crash_reports = v,
            Message::ChangePassword => return Some(Event::GoChangePassword),
            Message::ClearCache => return Some(Event::ConfirmClearCache),
        }
        None
    }

    pub fn view(&self, palette: &'static Palette) -> Element<'_, Message> {
        let toggle_row = |label: &'static str,
                          hint: &'static str,
                          value: bool,
                          on_toggle: fn(bool) -> Message| {
            column![
                checkbox(label, value).on_toggle(on_toggle).size(18).spacing(10),
                text(hint).size(11).color(palette.text_muted),
            ]
            .spacing(2)
        };

        let security = container(
            column![
                toggle_row(
                    "Biometric unlock",
                    "Use fingerprint or face unlock instead of the PIN",
                    self.biometric,
                    Message::BiometricToggled,
                ),
                toggle_row(
                    "Two-factor sign-in",
                    "Require a code from your phone when signing in",
                    self.two_factor,
                    Message::TwoFactorToggled,
                ),
                button(
                    row![
                        text("Change password").size(13).color(palette.text_primary),
                        horizontal_space(),
                        text(">").size(13).color(palette.text_muted),
                    ]
                    .align_y(iced::Alignment::Center),
                )
                .width(Length::Fill)
                .padding(Padding::from([10, 0]))
                .style(style::row_button(palette))
                .on_press(Message::ChangePassword),
            ]
            .spacing(14),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::card(palette));

        let privacy = container(
            column![
                toggle_row(
                    "Share crash reports",
                    "Send anonymized crash data to help fix problems",
                    self.crash_reports,
                    Message::CrashReportsToggled,
                ),
                button(text("Clear cached data").size(13))
                    .padding(Padding::from([10, 16]))
                    .style(style::danger_button(palette))
                    .on_press(Message::ClearCache),
                text("Your theme preference is kept.")
                    .size(11)
                    .color(palette.text_muted),
            ]
            .spacing(14),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::card(palette));

        column![
            text("Security").size(12).color(palette.text_muted),
            security,
            text("Privacy").size(12).color(palette.text_muted),
            privacy,
        ]
        .spacing(12)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_update_local_state() {
        let mut state = State::new();
        assert!(state.update(Message::TwoFactorToggled(true)).is_none());
        assert!(state.two_factor);
    }

    #[test]
    fn clear_cache_requires_confirmation() {
        let mut state = State::new();
        assert!(matches!(
            state.update(Message::ClearCache),
            Some(Event::ConfirmClearCache)
        ));
    }
}
