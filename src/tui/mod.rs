//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the shell and store can be driven by other hosts
//! without pulling in terminal crates.

pub mod session;
pub mod surface;

pub use session::{AlternateScreen, ScreenSession};
pub use surface::{SurfaceError, TerminalSurface};
