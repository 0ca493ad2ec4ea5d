// ui/palette.rs - Color Palettes
//
// Static color tables consumed by every screen. One light table, one dark
// table; the active one is picked from the resolved theme mode.

use iced::Color;

/// Named colors for one appearance.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_surface: Color,
    pub bg_raised: Color,

    pub accent: Color,
    pub accent_hover: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub danger_hover: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_accent: Color,

    pub border: Color,
    pub scrim: Color,
}

pub const DARK: Palette = Palette {
    bg_primary: Color::from_rgb(0.09, 0.09, 0.12),
    bg_surface: Color::from_rgb(0.12, 0.12, 0.16),
    bg_raised: Color::from_rgb(0.16, 0.16, 0.22),

    accent: Color::from_rgb(0.35, 0.55, 0.95),
    accent_hover: Color::from_rgb(0.45, 0.65, 1.0),
    success: Color::from_rgb(0.2, 0.75, 0.45),
    warning: Color::from_rgb(0.95, 0.7, 0.25),
    danger: Color::from_rgb(0.9, 0.3, 0.35),
    danger_hover: Color::from_rgb(1.0, 0.4, 0.45),

    text_primary: Color::from_rgba(1.0, 1.0, 1.0, 0.95),
    text_secondary: Color::from_rgba(1.0, 1.0, 1.0, 0.6),
    text_muted: Color::from_rgba(1.0, 1.0, 1.0, 0.4),
    text_on_accent: Color::WHITE,

    border: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
    scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.65),
};

pub const LIGHT: Palette = Palette {
    bg_primary: Color::from_rgb(0.97, 0.97, 0.98),
    bg_surface: Color::WHITE,
    bg_raised: Color::from_rgb(0.93, 0.94, 0.96),

    accent: Color::from_rgb(0.2, 0.42, 0.85),
    accent_hover: Color::from_rgb(0.28, 0.5, 0.92),
    success: Color::from_rgb(0.12, 0.6, 0.35),
    warning: Color::from_rgb(0.8, 0.55, 0.1),
    danger: Color::from_rgb(0.8, 0.2, 0.25),
    danger_hover: Color::from_rgb(0.9, 0.3, 0.35),

    text_primary: Color::from_rgba(0.0, 0.0, 0.0, 0.9),
    text_secondary: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
    text_muted: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
    text_on_accent: Color::WHITE,

    border: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
    scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
};

impl Palette {
    /// Pick the table for a resolved dark flag.
    pub fn for_mode(is_dark: bool) -> &'static Palette {
        if is_dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// Badge color for an organization status.
    pub fn status_color(&self, status: lottodesk::models::OrgStatus) -> Color {
        use lottodesk::models::OrgStatus;
        match status {
            OrgStatus::Active => self.success,
            OrgStatus::Pending => self.warning,
            OrgStatus::Suspended => self.danger,
        }
    }
}
