use std::io;

/// Switches the terminal into (and out of) the editor's screen mode.
pub trait ScreenMode {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlternateScreen;

impl ScreenMode for AlternateScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            cursor::SetCursorStyle::BlinkingBar
        )?;
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Run both steps even if the first one fails.
        let raw = disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape
        );
        raw.and(screen)
    }
}

/// Keeps the terminal in `M`'s mode until ended or dropped.
pub struct ScreenSession<M: ScreenMode> {
    mode: M,
    active: bool,
}

impl<M: ScreenMode> ScreenSession<M> {
    pub fn start(mode: M) -> io::Result<Self> {
        mode.enter()?;
        Ok(Self { mode, active: true })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn end(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.mode.leave()
    }
}

impl<M: ScreenMode> Drop for ScreenSession<M> {
    fn drop(&mut self) {
        let _ = self.end();
    }
}

/// Leaves the alternate screen before the previous panic hook prints.
pub fn restore_on_panic() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = AlternateScreen.leave();
        previous(info);
    }));
}

#[cfg(test)]
#[path = "../../tests/unit/tui/session.rs"]
mod tests;
