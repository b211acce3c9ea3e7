//! Terminal text surface: a rope-backed editing area rendered with ratatui.

use crate::kernel::shell::{Dimension, SurfaceOptions, TextSurface};
use crate::ui::style::Presentation;
use crate::ui::theme::{Color, Palette, ThemeKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color as RColor, Style as RStyle};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const PX_PER_CELL: u16 = 4;
const TAB: &str = "    ";
/// Chars looked at around the cursor when stepping over a grapheme.
const GRAPHEME_WINDOW: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    InvalidSize(Dimension),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::InvalidSize(d) => write!(f, "Invalid surface size: {:?}", d),
        }
    }
}

impl std::error::Error for SurfaceError {}

pub struct TerminalSurface {
    rope: Rope,
    cursor: usize,
    preferred_col: Option<usize>,
    scroll: usize,
    options: Option<SurfaceOptions>,
    palette: Palette,
    changed: bool,
    cursor_screen: Option<(u16, u16)>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: 0,
            preferred_col: None,
            scroll: 0,
            options: None,
            palette: ThemeKind::default().palette(),
            changed: false,
            cursor_screen: None,
        }
    }

    pub fn options(&self) -> Option<&SurfaceOptions> {
        self.options.as_ref()
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// (line, column) in chars.
    pub fn cursor(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.cursor);
        (line, self.cursor - self.rope.line_to_char(line))
    }

    /// Screen position of the cursor from the last render.
    pub fn cursor_screen_position(&self) -> Option<(u16, u16)> {
        self.cursor_screen
    }

    /// Returns `true` if the key edited the text or moved the cursor.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(ch) if plain => {
                let mut tmp = [0u8; 4];
                self.insert(ch.encode_utf8(&mut tmp));
                true
            }
            KeyCode::Enter => {
                self.insert("\n");
                true
            }
            KeyCode::Tab => {
                self.insert(TAB);
                true
            }
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_to(self.prev_boundary()),
            KeyCode::Right => self.move_to(self.next_boundary()),
            KeyCode::Up => self.move_vertical(-1),
            KeyCode::Down => self.move_vertical(1),
            KeyCode::Home => {
                let (line, _) = self.cursor();
                self.move_to(self.rope.line_to_char(line))
            }
            KeyCode::End => {
                let (line, _) = self.cursor();
                self.move_to(self.rope.line_to_char(line) + self.line_content_len(line))
            }
            _ => false,
        }
    }

    fn insert(&mut self, text: &str) {
        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
        self.preferred_col = None;
        self.changed = true;
    }

    fn delete_backward(&mut self) -> bool {
        let start = self.prev_boundary();
        if start == self.cursor {
            return false;
        }
        self.rope.remove(start..self.cursor);
        self.cursor = start;
        self.preferred_col = None;
        self.changed = true;
        true
    }

    fn delete_forward(&mut self) -> bool {
        let end = self.next_boundary();
        if end == self.cursor {
            return false;
        }
        self.rope.remove(self.cursor..end);
        self.preferred_col = None;
        self.changed = true;
        true
    }

    fn prev_boundary(&self) -> usize {
        let start = self.cursor.saturating_sub(GRAPHEME_WINDOW);
        let before = self.rope.slice(start..self.cursor).to_string();
        let len = before
            .graphemes(true)
            .next_back()
            .map_or(0, |g| g.chars().count());
        self.cursor - len
    }

    fn next_boundary(&self) -> usize {
        let end = (self.cursor + GRAPHEME_WINDOW).min(self.rope.len_chars());
        let after = self.rope.slice(self.cursor..end).to_string();
        let len = after.graphemes(true).next().map_or(0, |g| g.chars().count());
        self.cursor + len
    }

    fn move_to(&mut self, pos: usize) -> bool {
        self.preferred_col = None;
        if pos == self.cursor {
            return false;
        }
        self.cursor = pos;
        true
    }

    fn move_vertical(&mut self, delta: isize) -> bool {
        let (line, col) = self.cursor();
        let target = line as isize + delta;
        if target < 0 || target as usize >= self.rope.len_lines() {
            return false;
        }
        let target = target as usize;
        let want = *self.preferred_col.get_or_insert(col);
        let col = want.min(self.line_content_len(target));
        self.cursor = self.rope.line_to_char(target) + col;
        true
    }

    fn line_content_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    fn line_text(&self, line: usize) -> String {
        let len = self.line_content_len(line);
        self.rope.line(line).slice(..len).to_string()
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, container: &Presentation) {
        let Some(options) = self.options.as_ref() else {
            self.cursor_screen = None;
            return;
        };
        let area = Rect {
            width: scale(area.width, options.width),
            height: scale(area.height, options.height),
            ..area
        };

        let style = &container.style;
        let padding = Padding::new(
            style.padding_left.map_or(0, |l| l.cells(PX_PER_CELL)),
            style.padding_right.map_or(0, |l| l.cells(PX_PER_CELL)),
            0,
            0,
        );
        let border_type = if style.is_rounded() {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        let base = RStyle::default()
            .fg(to_ratatui(self.palette.fg))
            .bg(to_ratatui(self.palette.bg));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(RStyle::default().fg(to_ratatui(self.palette.border)))
            .title(format!(" {} · {} ", options.language, options.theme))
            .title_style(RStyle::default().fg(to_ratatui(self.palette.title)))
            .padding(padding)
            .style(base);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            self.cursor_screen = None;
            return;
        }

        let (line, col) = self.cursor();
        let height = inner.height as usize;
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }

        let last = (self.scroll + height).min(self.rope.len_lines());
        let lines: Vec<Line> = (self.scroll..last)
            .map(|l| Line::from(self.line_text(l).replace('\t', TAB)))
            .collect();
        Paragraph::new(lines).style(base).render(inner, buf);

        let prefix: String = self.rope.line(line).chars().take(col).collect();
        let x = prefix.replace('\t', TAB).width() as u16;
        self.cursor_screen = Some((
            inner.x + x.min(inner.width.saturating_sub(1)),
            inner.y + (line - self.scroll) as u16,
        ));
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface for TerminalSurface {
    type Error = SurfaceError;

    fn init(&mut self, options: &SurfaceOptions) -> Result<(), SurfaceError> {
        for dim in [options.width, options.height] {
            let valid = match dim {
                Dimension::Percent(p) => (1..=100).contains(&p),
                Dimension::Cells(c) => c > 0,
            };
            if !valid {
                return Err(SurfaceError::InvalidSize(dim));
            }
        }

        self.palette = match ThemeKind::from_id(&options.theme) {
            Some(kind) => kind.palette(),
            None => {
                tracing::warn!(theme = %options.theme, "unknown theme, using default");
                ThemeKind::default().palette()
            }
        };
        self.rope = Rope::from_str(&options.default_value);
        self.cursor = 0;
        self.preferred_col = None;
        self.scroll = 0;
        self.changed = false;
        self.options = Some(options.clone());
        Ok(())
    }

    fn set_value(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = self.cursor.min(self.rope.len_chars());
        self.preferred_col = None;
        self.changed = false;
    }

    fn value(&self) -> String {
        self.rope.to_string()
    }

    fn take_change(&mut self) -> Option<String> {
        if !self.changed {
            return None;
        }
        self.changed = false;
        Some(self.rope.to_string())
    }
}

fn scale(available: u16, dim: Dimension) -> u16 {
    match dim {
        Dimension::Percent(p) => (available as u32 * p.min(100) as u32 / 100) as u16,
        Dimension::Cells(c) => c.min(available),
    }
}

fn to_ratatui(color: Color) -> RColor {
    match color {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/surface.rs"]
mod tests;
