//! LottoDesk - Retail Lottery Inventory Companion
//!
//! Single-window presentation layer:
//! - Settings menu (root) navigating to the themed screens
//! - In-app navigation stack with params carried in screen constructors
//! - Reusable confirmation dialog and the scan-type selection modal
//! - Theme preference persisted through the key-value store

use std::path::PathBuf;

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{keyboard, Element, Length, Padding, Size, Subscription, Task, Theme};

use log::{error, info, warn};

use lottodesk::models::StoreProfile;
use lottodesk::storage::{self, KeyValueStore};
use lottodesk::theme::{system_prefers_dark, ThemeMode};

mod ui;

use ui::dialog::{self, ConfirmDialog};
use ui::palette::Palette;
use ui::scan_modal;
use ui::screen::{
    change_password, dark_mode, edit_store, help_support, menu, organizations, payments,
    privacy_security, terms,
};
use ui::style;

// ============================================================================
// Navigation
// ============================================================================

/// One entry on the navigation stack. Screens with local state carry it in
/// their variant; params travel through the constructors.
enum Screen {
    Menu,
    ChangePassword(change_password::State),
    DarkMode,
    EditStore(edit_store::State),
    HelpSupport(help_support::State),
    Organizations(organizations::State),
    Payments(payments::State),
    PrivacySecurity(privacy_security::State),
    Terms,
}

impl Screen {
    fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "LottoDesk",
            Screen::ChangePassword(_) => "Change password",
            Screen::DarkMode => "Appearance",
            Screen::EditStore(_) => "Store profile",
            Screen::HelpSupport(_) => "Help & support",
            Screen::Organizations(_) => "Organizations",
            Screen::Payments(_) => "Payment methods",
            Screen::PrivacySecurity(_) => "Privacy & security",
            Screen::Terms => "Terms of service",
        }
    }
}

/// What to do when the active confirmation dialog is confirmed.
#[derive(Debug, Clone)]
enum DialogAction {
    Dismiss,
    PopScreen,
    DeleteCard(u32),
    ClearCache,
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone)]
enum Message {
    // Screen messages
    Menu(menu::Message),
    ChangePassword(change_password::Message),
    DarkMode(dark_mode::Message),
    EditStore(edit_store::Message),
    HelpSupport(help_support::Message),
    Organizations(organizations::Message),
    Payments(payments::Message),
    PrivacySecurity(privacy_security::Message),
    Terms(terms::Message),

    // Navigation and overlays
    Back,
    EscapePressed,
    DialogConfirmed,
    DialogDismissed,
    ScanTicket,
    ScanBook,
    CloseScanModal,

    // Theme persistence
    ThemeSaved(Result<ThemeMode, String>),
}

// ============================================================================
// Application State
// ============================================================================

struct LottoDeskApp {
    screens: Vec<Screen>,

    store_profile: StoreProfile,

    store_path: PathBuf,
    store: KeyValueStore,
    mode: ThemeMode,
    system_dark: bool,

    dialog: Option<(ConfirmDialog, DialogAction)>,
    scan_modal_open: bool,
    notice: Option<String>,
}

impl LottoDeskApp {
    fn new() -> (Self, Task<Message>) {
        let store_path = KeyValueStore::default_path();
        let store = KeyValueStore::open(&store_path);
        let mode = store.theme_mode();
        let system_dark = system_prefers_dark();
        info!("LottoDesk starting, theme mode: {mode}, system dark: {system_dark}");

        let app = Self {
            screens: vec![Screen::Menu],
            store_profile: StoreProfile::sample(),
            store_path,
            store,
            mode,
            system_dark,
            dialog: None,
            scan_modal_open: false,
            notice: None,
        };

        (app, Task::none())
    }

    fn palette(&self) -> &'static Palette {
        Palette::for_mode(self.mode.is_dark(self.system_dark))
    }

    fn push(&mut self, screen: Screen) {
        self.notice = None;
        self.screens.push(screen);
    }

    fn pop(&mut self) {
        if self.screens.len() > 1 {
            self.screens.pop();
            self.notice = None;
        }
    }

    fn open_entry(&mut self, entry: menu::Entry) {
        let screen = match entry {
            menu::Entry::EditStore => {
                // The store record is the params payload for the editor.
                Screen::EditStore(edit_store::State::new(self.store_profile.clone()))
            }
            menu::Entry::Organizations => Screen::Organizations(organizations::State::new()),
            menu::Entry::Payments => Screen::Payments(payments::State::new()),
            menu::Entry::PrivacySecurity => {
                Screen::PrivacySecurity(privacy_security::State::new())
            }
            menu::Entry::ChangePassword => Screen::ChangePassword(change_password::State::new()),
            menu::Entry::DarkMode => Screen::DarkMode,
            menu::Entry::HelpSupport => Screen::HelpSupport(help_support::State::new()),
            menu::Entry::Terms => Screen::Terms,
        };
        self.push(screen);
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(msg) => match msg {
                menu::Message::Open(entry) => self.open_entry(entry),
                menu::Message::Scan => self.scan_modal_open = true,
            },

            Message::ChangePassword(msg) => {
                if let Some(Screen::ChangePassword(state)) = self.screens.last_mut() {
                    if let Some(change_password::Event::Saved) = state.update(msg) {
                        self.dialog = Some((
                            ConfirmDialog::info(
                                "Password updated",
                                "Your password has been changed.",
                            ),
                            DialogAction::PopScreen,
                        ));
                    }
                }
            }

            Message::DarkMode(dark_mode::Message::Select(mode)) => {
                if mode != self.mode {
                    info!("Theme change requested: {mode}");
                    // State is applied in ThemeSaved, after the write lands.
                    return Task::perform(
                        storage::persist_theme_mode(self.store_path.clone(), mode),
                        Message::ThemeSaved,
                    );
                }
            }

            Message::EditStore(msg) => {
                if let Some(Screen::EditStore(state)) = self.screens.last_mut() {
                    if let Some(edit_store::Event::Saved(profile)) = state.update(msg) {
                        info!("Store profile updated: {}", profile.name);
                        self.store_profile = profile;
                        self.dialog = Some((
                            ConfirmDialog::info("Store updated", "Your changes have been saved."),
                            DialogAction::PopScreen,
                        ));
                    }
                }
            }

            Message::HelpSupport(msg) => {
                if let Some(Screen::HelpSupport(state)) = self.screens.last_mut() {
                    if let Some(help_support::Event::OpenUri(uri)) = state.update(msg) {
                        open_uri(uri);
                    }
                }
            }

            Message::Organizations(msg) => {
                if let Some(Screen::Organizations(state)) = self.screens.last_mut() {
                    state.update(msg);
                }
            }

            Message::Payments(msg) => {
                if let Some(Screen::Payments(state)) = self.screens.last_mut() {
                    match state.update(msg) {
                        Some(payments::Event::Added { holder }) => {
                            self.dialog = Some((
                                ConfirmDialog::info(
                                    "Card saved",
                                    format!("The card for {holder} is ready to use."),
                                ),
                                DialogAction::Dismiss,
                            ));
                        }
                        Some(payments::Event::ConfirmDelete { id, label }) => {
                            self.dialog = Some((
                                ConfirmDialog::destructive(
                                    "Remove payment method",
                                    format!("Remove {label}? This cannot be undone."),
                                    "Remove",
                                ),
                                DialogAction::DeleteCard(id),
                            ));
                        }
                        None => {}
                    }
                }
            }

            Message::PrivacySecurity(msg) => {
                if let Some(Screen::PrivacySecurity(state)) = self.screens.last_mut() {
                    match state.update(msg) {
                        Some(privacy_security::Event::GoChangePassword) => {
                            self.push(Screen::ChangePassword(change_password::State::new()));
                        }
                        Some(privacy_security::Event::ConfirmClearCache) => {
                            self.dialog = Some((
                                ConfirmDialog::destructive(
                                    "Clear cached data",
                                    "All locally cached data will be removed. Your theme \
                                     preference is kept.",
                                    "Clear",
                                ),
                                DialogAction::ClearCache,
                            ));
                        }
                        None => {}
                    }
                }
            }

            Message::Terms(terms::Message::Acknowledge) => self.pop(),

            Message::Back => self.pop(),

            Message::EscapePressed => {
                // Escape closes the topmost layer: dialog, then modal, then
                // the screen itself.
                if self.dialog.is_some() {
                    self.dialog = None;
                } else if self.scan_modal_open {
                    self.scan_modal_open = false;
                } else {
                    self.pop();
                }
            }

            Message::DialogConfirmed => {
                if let Some((_, action)) = self.dialog.take() {
                    match action {
                        DialogAction::Dismiss => {}
                        DialogAction::PopScreen => self.pop(),
                        DialogAction::DeleteCard(id) => {
                            if let Some(Screen::Payments(state)) = self.screens.last_mut() {
                                state.remove(id);
                            }
                        }
                        DialogAction::ClearCache => {
                            let removed = self.store.clear_cache();
                            if let Err(e) = self.store.save() {
                                error!("Failed to persist cache clear: {e:#}");
                            }
                            self.notice = Some(format!("Removed {removed} cached entries"));
                        }
                    }
                }
            }

            Message::DialogDismissed => self.dialog = None,

            Message::ScanTicket => {
                self.scan_modal_open = false;
                info!("Scan type selected: single ticket");
                self.notice = Some("Single ticket scan selected".to_string());
            }

            Message::ScanBook => {
                self.scan_modal_open = false;
                info!("Scan type selected: ticket book");
                self.notice = Some("Ticket book scan selected".to_string());
            }

            Message::CloseScanModal => self.scan_modal_open = false,

            Message::ThemeSaved(Ok(mode)) => {
                self.mode = mode;
                // Keep the in-memory mirror in sync so a later cache clear
                // does not resurrect the old mode.
                self.store.set_theme_mode(mode);
            }

            Message::ThemeSaved(Err(e)) => {
                // Previous mode stays in effect; nothing to roll back.
                error!("Theme mode not saved: {e}");
                self.notice = Some("Could not save the theme preference".to_string());
            }
        }

        Task::none()
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    fn view(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let top = match self.screens.last() {
            Some(screen) => screen,
            None => {
                return container(text("Loading..."))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
        };

        let body: Element<'_, Message> = match top {
            Screen::Menu => menu::view(palette, &self.store_profile).map(Message::Menu),
            Screen::ChangePassword(state) => state.view(palette).map(Message::ChangePassword),
            Screen::DarkMode => {
                dark_mode::view(palette, self.mode, self.system_dark).map(Message::DarkMode)
            }
            Screen::EditStore(state) => state.view(palette).map(Message::EditStore),
            Screen::HelpSupport(state) => state.view(palette).map(Message::HelpSupport),
            Screen::Organizations(state) => state.view(palette).map(Message::Organizations),
            Screen::Payments(state) => state.view(palette).map(Message::Payments),
            Screen::PrivacySecurity(state) => state.view(palette).map(Message::PrivacySecurity),
            Screen::Terms => terms::view(palette).map(Message::Terms),
        };

        let mut content = column![
            self.view_header(palette),
            scrollable(container(body).padding(16).width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        ];

        if let Some(notice) = &self.notice {
            content = content.push(
                container(text(notice.as_str()).size(12).color(palette.text_secondary))
                    .padding(Padding::from([8, 16]))
                    .width(Length::Fill),
            );
        }

        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(iced::Background::Color(palette.bg_primary)),
                ..Default::default()
            });

        if let Some((dialog, _)) = &self.dialog {
            return dialog::modal(
                base,
                dialog.view(palette, Message::DialogConfirmed, Message::DialogDismissed),
                palette,
                Message::DialogDismissed,
            );
        }

        if self.scan_modal_open {
            return dialog::modal(
                base,
                scan_modal::view(palette, Message::ScanTicket, Message::ScanBook),
                palette,
                Message::CloseScanModal,
            );
        }

        base.into()
    }

    fn view_header(&self, palette: &'static Palette) -> Element<'_, Message> {
        let title = text(self.screens.last().map(Screen::title).unwrap_or("LottoDesk"))
            .size(16)
            .color(palette.text_primary);

        let mut bar = row![].spacing(8).align_y(iced::Alignment::Center);
        if self.screens.len() > 1 {
            bar = bar.push(
                button(text("<").size(16))
                    .padding(Padding::from([4, 12]))
                    .style(style::row_button(palette))
                    .on_press(Message::Back),
            );
        }
        bar = bar.push(title).push(horizontal_space());

        container(bar)
            .padding(Padding::from([10, 12]))
            .width(Length::Fill)
            .style(move |_| container::Style {
                background: Some(iced::Background::Color(palette.bg_surface)),
                border: iced::Border {
                    color: palette.border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn title(&self) -> String {
        match self.screens.last() {
            Some(Screen::Menu) | None => "LottoDesk".to_string(),
            Some(screen) => format!("LottoDesk - {}", screen.title()),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::EscapePressed),
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        let palette = self.palette();
        Theme::custom(
            "LottoDesk".to_string(),
            iced::theme::Palette {
                background: palette.bg_primary,
                text: palette.text_primary,
                primary: palette.accent,
                success: palette.success,
                danger: palette.danger,
            },
        )
    }
}

// ============================================================================
// OS Integration
// ============================================================================

/// Hand a URI (mailto:, tel:, https:) to the OS. Fire-and-forget; a failure
/// is logged and the user simply stays where they are.
fn open_uri(uri: &str) {
    #[cfg(target_os = "windows")]
    let spawned = std::process::Command::new("cmd").args(["/C", "start", uri]).spawn();

    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(uri).spawn();

    #[cfg(all(unix, not(target_os = "macos")))]
    let spawned = std::process::Command::new("xdg-open").arg(uri).spawn();

    match spawned {
        Ok(_) => info!("Dispatched {uri}"),
        Err(e) => warn!("Failed to open {uri}: {e}"),
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("LottoDesk starting...");

    iced::application(LottoDeskApp::title, LottoDeskApp::update, LottoDeskApp::view)
        .subscription(LottoDeskApp::subscription)
        .theme(LottoDeskApp::theme)
        .window_size(Size::new(420.0, 780.0))
        .run_with(LottoDeskApp::new)
}
