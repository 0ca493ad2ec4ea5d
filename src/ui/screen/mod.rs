// ui/screen/mod.rs - Screens
//
// One module per screen, Elm-style: local `State`, a `Message` enum, and an
// `Event` enum for whatever must bubble up to the app (navigation, dialogs,
// URI dispatch). Screens style themselves from the active palette and know
// nothing about the navigation stack.

pub mod change_password;
pub mod dark_mode;
pub mod edit_store;
pub mod help_support;
pub mod menu;
pub mod organizations;
pub mod payments;
pub mod privacy_security;
pub mod terms;
