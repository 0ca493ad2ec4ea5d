// ui/mod.rs - Presentation Layer
//
// Palette tables, shared styles, overlay components, and one module per
// screen. Everything renders from the active palette; no widget reads the
// preference store directly.

pub mod dialog;
pub mod palette;
pub mod scan_modal;
pub mod screen;
pub mod sparkline;
pub mod style;
