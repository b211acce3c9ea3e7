//! Editor shell: binds a text surface to a debounced code value.
//!
//! Edits reported by the surface land in the local copy right away; the owner's
//! `on_change` only hears about them once typing pauses for the debounce interval.

use super::clock::{Clock, SystemClock};
use super::debounce::{DebounceInterval, DebouncedValue};
use crate::ui::style::{get_styles, BoxSizing, Length, Overflow, Presentation, StyleObject};
use std::time::Instant;

pub const DEFAULT_LANGUAGE: &str = "javascript";
pub const DEFAULT_THEME: &str = "vs-dark";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorProps {
    pub code: Option<String>,
    pub placeholder: Option<String>,
    pub language: Option<String>,
    pub theme: Option<String>,
    pub test_id: Option<String>,
    pub class_name: Option<String>,
    pub code_debounce_interval: Option<u64>,
}

impl EditorProps {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.code_debounce_interval = Some(ms);
        self
    }

    pub fn language(&self) -> &str {
        non_empty(self.language.as_deref()).unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn theme(&self) -> &str {
        non_empty(self.theme.as_deref()).unwrap_or(DEFAULT_THEME)
    }

    pub fn debounce_interval(&self) -> DebounceInterval {
        DebounceInterval::from_option(self.code_debounce_interval)
    }

    /// Text the surface starts with: the code, else the placeholder, else nothing.
    pub fn initial_text(&self) -> &str {
        non_empty(self.code.as_deref())
            .or_else(|| non_empty(self.placeholder.as_deref()))
            .unwrap_or("")
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Percent(u16),
    Cells(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub width: Dimension,
    pub height: Dimension,
    pub language: String,
    pub theme: String,
    pub minimap: bool,
    pub context_menu: bool,
    pub default_value: String,
}

impl SurfaceOptions {
    pub fn from_props(props: &EditorProps) -> Self {
        Self {
            width: Dimension::Percent(100),
            height: Dimension::Percent(100),
            language: props.language().to_string(),
            theme: props.theme().to_string(),
            minimap: false,
            context_menu: false,
            default_value: props.initial_text().to_string(),
        }
    }
}

/// The text-editing widget the shell drives.
pub trait TextSurface {
    type Error: std::error::Error;

    fn init(&mut self, options: &SurfaceOptions) -> Result<(), Self::Error>;

    /// Replaces the whole text. Must not be reported back through `take_change`.
    fn set_value(&mut self, text: &str);

    fn value(&self) -> String;

    /// Full text after user edits since the last call, if any.
    fn take_change(&mut self) -> Option<String>;
}

pub fn container_style() -> StyleObject {
    StyleObject::default()
        .box_sizing(BoxSizing::BorderBox)
        .padding_x(Length::Px(4))
        .max_width(Length::Auto)
        .overflow(Overflow::Hidden)
        .border_radius(Length::Px(5))
}

pub struct EditorShell<S, F, C = SystemClock> {
    store: DebouncedValue<String, F, C>,
    surface: S,
    options: SurfaceOptions,
    container: Presentation,
    test_id: Option<String>,
}

impl<S, F> EditorShell<S, F, SystemClock>
where
    S: TextSurface,
    F: FnMut(String),
{
    pub fn mount(props: EditorProps, on_change: F, surface: S) -> Result<Self, S::Error> {
        Self::mount_with_clock(props, on_change, surface, SystemClock)
    }
}

impl<S, F, C> EditorShell<S, F, C>
where
    S: TextSurface,
    F: FnMut(String),
    C: Clock,
{
    pub fn mount_with_clock(
        props: EditorProps,
        on_change: F,
        mut surface: S,
        clock: C,
    ) -> Result<Self, S::Error> {
        let options = SurfaceOptions::from_props(&props);
        if let Err(e) = surface.init(&options) {
            tracing::error!(
                error = %e,
                language = %options.language,
                theme = %options.theme,
                "text surface failed to initialize"
            );
            return Err(e);
        }

        let interval = props.debounce_interval();
        let container = get_styles(&container_style(), props.class_name.as_deref());
        let code = props.code.unwrap_or_default();
        tracing::debug!(
            language = %options.language,
            theme = %options.theme,
            debounce_ms = interval.as_millis(),
            "editor mounted"
        );

        Ok(Self {
            store: DebouncedValue::with_clock(code, on_change, interval, clock),
            surface,
            options,
            container,
            test_id: props.test_id,
        })
    }

    pub fn code(&self) -> &str {
        self.store.value()
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn container(&self) -> &Presentation {
        &self.container
    }

    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_pending(&self) -> bool {
        self.store.is_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.store.next_deadline()
    }

    /// Change event from the surface.
    pub fn on_surface_change(&mut self, text: String) {
        self.store.set_value(text);
    }

    /// Drains edits the surface has accumulated. Returns `true` if there were any.
    pub fn pump_surface(&mut self) -> bool {
        let mut changed = false;
        while let Some(text) = self.surface.take_change() {
            self.on_surface_change(text);
            changed = true;
        }
        changed
    }

    /// New canonical code from the owner. Overwrites local edits and the surface.
    pub fn set_code(&mut self, code: String) -> bool {
        if !self.store.sync_external(code) {
            return false;
        }
        let current = self.store.value();
        if self.surface.value() != *current {
            self.surface.set_value(current);
        }
        true
    }

    pub fn tick(&mut self) -> bool {
        self.store.poll()
    }

    pub fn flush(&mut self) -> bool {
        self.store.flush()
    }

    /// Tears the shell down without committing pending edits.
    pub fn unmount(mut self) -> S {
        if self.store.cancel() {
            tracing::debug!("editor unmounted with an uncommitted edit");
        }
        self.surface
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/shell.rs"]
mod tests;
