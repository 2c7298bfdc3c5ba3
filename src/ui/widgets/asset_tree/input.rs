//! Keyboard input handling and interactive loop.
//!
//! The loop waits on `event::poll` with a timeout equal to the time left
//! on a pending search, so debounced text is applied even without input.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use assetree::StatusFilter;

use super::menu::{ExplorerView, Mode, TreeAction, ViewEvent};

/// Poll interval while nothing is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent, mode: Mode) -> Option<TreeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(TreeAction::Quit),
            _ => None,
        };
    }

    match (mode, key.code) {
        (_, KeyCode::Up) => Some(TreeAction::Up),
        (_, KeyCode::Down) => Some(TreeAction::Down),
        (_, KeyCode::PageUp) => Some(TreeAction::PageUp),
        (_, KeyCode::PageDown) => Some(TreeAction::PageDown),

        (Mode::Search, KeyCode::Enter) => Some(TreeAction::SearchCommit),
        (Mode::Search, KeyCode::Esc) => Some(TreeAction::SearchCancel),
        (Mode::Search, KeyCode::Backspace) => Some(TreeAction::SearchBackspace),
        (Mode::Search, KeyCode::Char(c)) => Some(TreeAction::SearchInput(c)),
        (Mode::Search, _) => None,

        (Mode::Browse, KeyCode::Char('k')) => Some(TreeAction::Up),
        (Mode::Browse, KeyCode::Char('j')) => Some(TreeAction::Down),
        (Mode::Browse, KeyCode::Home | KeyCode::Char('g')) => Some(TreeAction::Home),
        (Mode::Browse, KeyCode::End | KeyCode::Char('G')) => Some(TreeAction::End),
        (Mode::Browse, KeyCode::Char(' ')) => Some(TreeAction::Toggle),
        (Mode::Browse, KeyCode::Right | KeyCode::Char('l')) => Some(TreeAction::Expand),
        (Mode::Browse, KeyCode::Left | KeyCode::Char('h')) => Some(TreeAction::Collapse),
        (Mode::Browse, KeyCode::Enter) => Some(TreeAction::Select),
        (Mode::Browse, KeyCode::Char('+')) => Some(TreeAction::ExpandAll),
        (Mode::Browse, KeyCode::Char('-')) => Some(TreeAction::CollapseAll),
        (Mode::Browse, KeyCode::Char('e')) => Some(TreeAction::StatusFlag(StatusFilter::Energy)),
        (Mode::Browse, KeyCode::Char('a')) => Some(TreeAction::StatusFlag(StatusFilter::Alert)),
        (Mode::Browse, KeyCode::Char('x')) => Some(TreeAction::ClearFilters),
        (Mode::Browse, KeyCode::Char('/')) => Some(TreeAction::StartSearch),
        (Mode::Browse, KeyCode::Char('c')) => Some(TreeAction::SwitchCompany),
        (Mode::Browse, KeyCode::Char('q') | KeyCode::Esc) => Some(TreeAction::Quit),
        (Mode::Browse, _) => None,
    }
}

/// Run the explorer until the user quits or asks for another company.
///
/// `draw` turns the view into screen lines for the given terminal size.
pub fn run_interactive<F>(view: &mut ExplorerView, mut draw: F) -> io::Result<ViewEvent>
where
    F: FnMut(&mut ExplorerView, u16, u16) -> Vec<String>,
{
    use crossterm::{cursor, execute, terminal};

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    let result = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)
        .and_then(|_| event_loop(view, &mut draw, &mut stdout));

    // Restore terminal
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn event_loop<F>(view: &mut ExplorerView, draw: &mut F, stdout: &mut io::Stdout) -> io::Result<ViewEvent>
where
    F: FnMut(&mut ExplorerView, u16, u16) -> Vec<String>,
{
    use crossterm::event::{self, Event, KeyEventKind};

    let mut dirty = true;
    loop {
        if dirty {
            let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
            paint(stdout, &draw(view, width, height))?;
            dirty = false;
        }

        let timeout = view
            .explorer()
            .next_deadline(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_to_action(key, view.mode()) {
                        match view.handle_action(action, Instant::now()) {
                            ViewEvent::Continue => dirty = true,
                            exit => return Ok(exit),
                        }
                    }
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        if view.tick(Instant::now()) {
            dirty = true;
        }
    }
}

fn paint(stdout: &mut io::Stdout, lines: &[String]) -> io::Result<()> {
    use crossterm::{cursor, queue, terminal};

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    for line in lines {
        write!(stdout, "{}\r\n", line)?;
    }
    stdout.flush()
}
