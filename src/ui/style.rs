// ui/style.rs - Shared Widget Styles
//
// Style closures repeated across screens. One-off styles stay inline at the
// call site; anything used by three or more screens lives here.

use iced::widget::{button, container};
use iced::{Background, Border, Shadow, Theme};

use super::palette::Palette;

/// Rounded surface card used for grouped form sections and list rows.
pub fn card(palette: &'static Palette) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(palette.bg_surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

/// Filled accent button for the main action of a screen.
pub fn primary_button(
    palette: &'static Palette,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => palette.accent_hover,
            button::Status::Disabled => palette.bg_raised,
            _ => palette.accent,
        };
        let text_color = if matches!(status, button::Status::Disabled) {
            palette.text_muted
        } else {
            palette.text_on_accent
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
        }
    }
}

/// Filled red button for destructive confirmations.
pub fn danger_button(
    palette: &'static Palette,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => palette.danger_hover,
            _ => palette.danger,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: palette.text_on_accent,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Bordered neutral button: cancel actions, secondary choices.
pub fn ghost_button(
    palette: &'static Palette,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => palette.bg_raised,
            _ => palette.bg_surface,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: palette.text_secondary,
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Transparent row button that highlights on hover; used for tappable list
/// entries such as the settings menu and FAQ headers.
pub fn row_button(palette: &'static Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => palette.bg_raised,
            _ => iced::Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: palette.text_primary,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
