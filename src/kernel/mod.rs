//! Headless core: the debounced code store, the editor shell and its helpers.

pub mod clock;
pub mod config;
pub mod debounce;
pub mod diagnostics;
pub mod props;
pub mod runtime;
pub mod shell;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{EditorSettings, SettingsError};
pub use debounce::{DebounceInterval, DebouncedValue, DEFAULT_DEBOUNCE_MS};
pub use diagnostics::{assert_unreachable, format_babel_error, frame_error};
pub use runtime::DebounceTask;
pub use shell::{Dimension, EditorProps, EditorShell, SurfaceOptions, TextSurface};
