//! LottoDesk - Retail Lottery Inventory Companion
//!
//! This library holds the UI-independent core: domain models, the theme
//! preference, and the key-value preference store.

pub mod models;
pub mod storage;
pub mod theme;

// Re-export commonly used types
pub use storage::{KeyValueStore, THEME_MODE_KEY};
pub use theme::ThemeMode;
