//! codepane: edit a file in a terminal pane, saving once typing pauses.

use codepane::kernel::config::load_default_settings;
use codepane::kernel::shell::{EditorProps, EditorShell};
use codepane::tui::session::restore_on_panic;
use codepane::tui::{AlternateScreen, ScreenSession, TerminalSurface};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};
use std::{env, fs, io};

mod logging;

const PLACEHOLDER: &str = "// start typing, Ctrl-Q to quit";
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Owns the canonical text: whatever was last written to disk.
struct Owner {
    path: Option<PathBuf>,
    committed: Option<String>,
    status: String,
}

impl Owner {
    fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            committed: None,
            status: String::new(),
        }
    }

    fn commit(&mut self, code: String) {
        match &self.path {
            Some(path) => match fs::write(path, &code) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), bytes = code.len(), "saved");
                    self.status = format!("saved {} bytes", code.len());
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "save failed");
                    self.status = format!("save failed: {}", e);
                }
            },
            None => {
                self.status = format!("{} chars (not saved)", code.chars().count());
            }
        }
        self.committed = Some(code);
    }

    fn title(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[scratch]".to_string())
    }
}

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let path = env::args_os().nth(1).map(PathBuf::from);
    let code = match &path {
        Some(p) => read_or_empty(p)?,
        None => String::new(),
    };

    let settings = load_default_settings().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "settings ignored");
        Default::default()
    });
    let mut props = EditorProps::new(code).with_placeholder(PLACEHOLDER);
    if let Some(language) = path.as_deref().and_then(language_for_path) {
        props = props.with_language(language);
    }
    settings.apply(&mut props);

    let owner = Rc::new(RefCell::new(Owner::new(path)));
    let sink = owner.clone();
    let mut shell = EditorShell::mount(
        props,
        move |code: String| sink.borrow_mut().commit(code),
        TerminalSurface::new(),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    restore_on_panic();
    let mut session = ScreenSession::start(AlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &mut shell, &owner);
    session.end()?;
    result
}

fn run<B, F>(
    terminal: &mut Terminal<B>,
    shell: &mut EditorShell<TerminalSurface, F>,
    owner: &RefCell<Owner>,
) -> io::Result<()>
where
    B: Backend,
    F: FnMut(String),
{
    loop {
        terminal.draw(|frame| draw(frame, shell, &owner.borrow()))?;

        let timeout = shell
            .next_deadline()
            .map(|d| d.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let quit = key.kind != KeyEventKind::Release
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('q');
                if quit {
                    shell.flush();
                    return Ok(());
                }
                if shell.surface_mut().handle_key(key) {
                    shell.pump_surface();
                }
            }
        }

        shell.tick();
        let committed = owner.borrow_mut().committed.take();
        if let Some(code) = committed {
            shell.set_code(code);
        }
    }
}

fn draw<F: FnMut(String)>(
    frame: &mut Frame,
    shell: &mut EditorShell<TerminalSurface, F>,
    owner: &Owner,
) {
    let [editor, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let container = shell.container().clone();
    shell
        .surface_mut()
        .render(editor, frame.buffer_mut(), &container);
    if let Some(pos) = shell.surface().cursor_screen_position() {
        frame.set_cursor_position(pos);
    }

    let state = if shell.is_pending() { "editing" } else { "idle" };
    let line = format!(" {}  [{}]  {}", owner.title(), state, owner.status);
    frame.render_widget(Paragraph::new(line), status);
}

fn read_or_empty(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}

fn language_for_path(path: &Path) -> Option<&'static str> {
    let language = match path.extension().and_then(|s| s.to_str())? {
        "rs" => "rust",
        "go" => "go",
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "json" => "json",
        "md" => "markdown",
        _ => return None,
    };
    Some(language)
}
