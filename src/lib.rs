//! codepane - a code editor pane with debounced change reporting
//!
//! Modules:
//! - kernel: debounced value store, editor shell, settings, error-text helpers
//! - ui: container styling and themes
//! - tui: terminal text surface (crossterm + ratatui), behind the `tui` feature

pub mod kernel;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;
