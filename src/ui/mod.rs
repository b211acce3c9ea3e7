//! Frontend-independent presentation: container styling and editor themes.

pub mod style;
pub mod theme;
