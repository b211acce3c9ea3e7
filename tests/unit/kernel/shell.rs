use super::*;
use crate::kernel::clock::ManualClock;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct InitFailed;

impl fmt::Display for InitFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface init failed")
    }
}

impl std::error::Error for InitFailed {}

#[derive(Default)]
struct FakeSurface {
    text: String,
    options: Option<SurfaceOptions>,
    edits: Vec<String>,
    fail_init: bool,
}

impl FakeSurface {
    fn type_text(&mut self, s: &str) {
        self.text.push_str(s);
        self.edits.push(self.text.clone());
    }
}

impl TextSurface for FakeSurface {
    type Error = InitFailed;

    fn init(&mut self, options: &SurfaceOptions) -> Result<(), InitFailed> {
        if self.fail_init {
            return Err(InitFailed);
        }
        self.text = options.default_value.clone();
        self.options = Some(options.clone());
        Ok(())
    }

    fn set_value(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn value(&self) -> String {
        self.text.clone()
    }

    fn take_change(&mut self) -> Option<String> {
        if self.edits.is_empty() {
            None
        } else {
            Some(self.edits.remove(0))
        }
    }
}

fn mount(
    props: EditorProps,
) -> (
    EditorShell<FakeSurface, impl FnMut(String), ManualClock>,
    ManualClock,
    Rc<RefCell<Vec<String>>>,
) {
    let clock = ManualClock::new();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    let shell = EditorShell::mount_with_clock(
        props,
        move |v: String| sink.borrow_mut().push(v),
        FakeSurface::default(),
        clock.clone(),
    )
    .expect("mount");
    (shell, clock, changes)
}

#[test]
fn test_props_defaults() {
    let props = EditorProps::default();
    assert_eq!(props.language(), "javascript");
    assert_eq!(props.theme(), "vs-dark");
    assert_eq!(props.debounce_interval().as_millis(), 250);
    assert_eq!(props.initial_text(), "");

    let props = EditorProps::new("x")
        .with_language("")
        .with_theme("vs")
        .with_debounce_ms(0);
    assert_eq!(props.language(), "javascript");
    assert_eq!(props.theme(), "vs");
    assert_eq!(props.debounce_interval().as_millis(), 250);
}

#[test]
fn test_initial_text_falls_back_to_placeholder() {
    let props = EditorProps::new("").with_placeholder("// type here");
    assert_eq!(props.initial_text(), "// type here");

    let props = EditorProps::new("let a = 1;").with_placeholder("// type here");
    assert_eq!(props.initial_text(), "let a = 1;");

    let props = EditorProps::default().with_placeholder("");
    assert_eq!(props.initial_text(), "");
}

#[test]
fn test_mount_configures_surface() {
    let (shell, _clock, _changes) = mount(
        EditorProps::new("")
            .with_placeholder("// hello")
            .with_language("typescript")
            .with_test_id("code-editor")
            .with_class_name("wide"),
    );

    let options = shell.surface().options.as_ref().expect("init called");
    assert_eq!(options.width, Dimension::Percent(100));
    assert_eq!(options.height, Dimension::Percent(100));
    assert!(!options.minimap);
    assert!(!options.context_menu);
    assert_eq!(options.language, "typescript");
    assert_eq!(options.theme, "vs-dark");
    assert_eq!(shell.surface().text, "// hello");

    assert_eq!(shell.code(), "");
    assert_eq!(shell.test_id(), Some("code-editor"));
    assert!(shell.container().has_class("wide"));
    assert!(shell.container().style.is_rounded());
}

#[test]
fn test_mount_propagates_surface_failure() {
    let surface = FakeSurface {
        fail_init: true,
        ..FakeSurface::default()
    };
    let result = EditorShell::mount(EditorProps::default(), |_v: String| {}, surface);
    assert!(result.is_err());
}

#[test]
fn test_typing_burst_reports_once_after_pause() {
    let (mut shell, clock, changes) = mount(EditorProps::new("").with_debounce_ms(100));

    for chunk in ["c", "o", "n", "s", "t"] {
        shell.surface_mut().type_text(chunk);
        assert!(shell.pump_surface());
        clock.advance_ms(20);
        assert!(!shell.tick());
    }
    assert_eq!(shell.code(), "const");
    assert!(changes.borrow().is_empty());

    clock.advance_ms(100);
    assert!(shell.tick());
    assert_eq!(*changes.borrow(), vec!["const".to_string()]);
}

#[test]
fn test_set_code_resyncs_store_and_surface() {
    let (mut shell, clock, changes) = mount(EditorProps::new("a"));

    shell.on_surface_change("ab".to_string());
    clock.advance_ms(100);
    assert!(shell.set_code("reset".to_string()));

    assert_eq!(shell.code(), "reset");
    assert_eq!(shell.surface().text, "reset");
    assert!(!shell.is_pending());

    clock.advance_ms(1000);
    assert!(!shell.tick());
    assert!(changes.borrow().is_empty());

    assert!(!shell.set_code("reset".to_string()));
}

#[test]
fn test_unmount_discards_pending_change() {
    let (mut shell, clock, changes) = mount(EditorProps::new(""));
    shell.on_surface_change("draft".to_string());

    let surface = shell.unmount();
    clock.advance_ms(1000);

    assert_eq!(surface.text, "");
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_pump_without_edits_is_quiet() {
    let (mut shell, _clock, _changes) = mount(EditorProps::new("x"));
    assert!(!shell.pump_surface());
    assert!(shell.next_deadline().is_none());
}
