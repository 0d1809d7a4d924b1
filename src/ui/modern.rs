//! Full-screen TUI for the lyrics finder.
//!
//! Layout, top to bottom: navbar with the theme toggle, heading, search
//! input, a body showing the spinner, result list and lyrics panel as the
//! widget's `View` dictates, and a footer.
//!
//! The event loop uses `tokio::select!` over:
//! - one channel carrying keyboard/mouse input and completions of the
//!   background search and lyrics tasks
//! - a spinner tick that only runs while an operation is in flight

use crate::event::{AppEvent, spawn_lyrics, spawn_search};
use crate::lyrics::LyricsProvider;
use crate::search::{SearchProvider, SongEntry};
use crate::state::{LyricsWidget, Theme};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_INTERVAL: Duration = Duration::from_millis(100);
const LYRICS_PAGE: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

/// Work the event loop must start in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search,
    Select(SongEntry),
}

/// Screen-local state: focus, selection, scroll and hit areas. Everything the
/// finder itself knows lives in `LyricsWidget`.
#[derive(Debug)]
pub struct ModernUIState {
    pub focus: Focus,
    pub list: ListState,
    pub lyrics_scroll: u16,
    pub spinner_tick: usize,
    pub should_exit: bool,
    /// Inner area of the result list from the last draw.
    pub results_area: Option<Rect>,
    pub theme_button: Rect,
}

impl ModernUIState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Input,
            list: ListState::default(),
            lyrics_scroll: 0,
            spinner_tick: 0,
            should_exit: false,
            results_area: None,
            theme_button: Rect::default(),
        }
    }

    fn selected_song(&self, widget: &LyricsWidget) -> Option<SongEntry> {
        self.list
            .selected()
            .and_then(|i| widget.results().get(i))
            .cloned()
    }

    /// Route one terminal event. Returns the work to start, if any.
    pub fn handle_input(&mut self, event: Event, widget: &mut LyricsWidget) -> Option<Command> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key, widget),
            Event::Mouse(mouse) => self.handle_mouse(mouse, widget),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, widget: &mut LyricsWidget) -> Option<Command> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('c') if ctrl => self.should_exit = true,
            KeyCode::Char('t') if ctrl => widget.toggle_theme(),
            KeyCode::F(2) => widget.toggle_theme(),
            KeyCode::Char('u') if ctrl => {
                widget.clear_query();
                self.focus = Focus::Input;
            }
            KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(widget),
            KeyCode::PageDown => self.lyrics_scroll = self.lyrics_scroll.saturating_add(LYRICS_PAGE),
            KeyCode::PageUp => self.lyrics_scroll = self.lyrics_scroll.saturating_sub(LYRICS_PAGE),
            KeyCode::Enter => {
                return match self.focus {
                    Focus::Input => Some(Command::Search),
                    Focus::Results => self.selected_song(widget).map(Command::Select),
                };
            }
            _ => match self.focus {
                Focus::Input => self.edit_query(key, widget),
                Focus::Results => self.navigate(key, widget),
            },
        }
        None
    }

    fn edit_query(&mut self, key: KeyEvent, widget: &mut LyricsWidget) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => widget.push_char(c),
            KeyCode::Backspace => widget.pop_char(),
            KeyCode::Down if !widget.results().is_empty() => self.focus = Focus::Results,
            _ => {}
        }
    }

    fn navigate(&mut self, key: KeyEvent, widget: &mut LyricsWidget) {
        let len = widget.results().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.list.selected().is_none_or(|i| i + 1 < len) {
                    self.list.select_next();
                }
            }
            KeyCode::Home => self.list.select_first(),
            KeyCode::End if len > 0 => self.list.select(Some(len - 1)),
            // Typing goes back to the search box.
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focus = Focus::Input;
                widget.push_char(c);
            }
            KeyCode::Backspace => {
                self.focus = Focus::Input;
                widget.pop_char();
            }
            _ => {}
        }
    }

    fn cycle_focus(&mut self, widget: &LyricsWidget) {
        self.focus = match self.focus {
            Focus::Input if !widget.results().is_empty() => Focus::Results,
            _ => Focus::Input,
        };
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, widget: &mut LyricsWidget) -> Option<Command> {
        let at = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.theme_button.contains(at) {
                    widget.toggle_theme();
                    return None;
                }
                let area = self.results_area?;
                if !area.contains(at) {
                    return None;
                }
                let index = self.list.offset() + (at.y - area.y) as usize;
                let song = widget.results().get(index)?.clone();
                self.focus = Focus::Results;
                self.list.select(Some(index));
                Some(Command::Select(song))
            }
            MouseEventKind::ScrollDown => {
                self.lyrics_scroll = self.lyrics_scroll.saturating_add(1);
                None
            }
            MouseEventKind::ScrollUp => {
                self.lyrics_scroll = self.lyrics_scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    /// Apply a completion from a background task.
    pub fn apply_completion(&mut self, event: AppEvent, widget: &mut LyricsWidget) {
        match event {
            AppEvent::SearchDone(result) => {
                widget.finish_search(result);
                if widget.results().is_empty() {
                    self.list.select(None);
                } else {
                    self.list.select(Some(0));
                    self.focus = Focus::Results;
                }
            }
            AppEvent::LyricsDone { seq, result } => {
                if widget.finish_lyrics(seq, result) {
                    self.lyrics_scroll = 0;
                }
            }
            AppEvent::Input(_) => {}
        }
    }
}

/// Restores the terminal when the UI exits, including on error paths.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

/// Forward crossterm events from a dedicated OS thread. Blocking reads stay
/// off the async runtime; the thread ends once the receiver is dropped.
fn spawn_input_thread(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match crossterm::event::poll(Duration::from_millis(100)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if tx.blocking_send(AppEvent::Input(ev)).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "failed to read terminal event"),
                },
                Ok(false) => {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to poll terminal events");
                    thread::sleep(Duration::from_millis(100));
                }
            }
        }
    });
}

/// Run the interactive lyrics finder until the user quits.
pub async fn display_lyrics_modern(
    theme: Theme,
    initial_query: Option<String>,
    search: Arc<dyn SearchProvider>,
    lyrics: Arc<dyn LyricsProvider>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (tx, mut rx) = mpsc::channel(32);
    spawn_input_thread(tx.clone());

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut widget = LyricsWidget::new(theme);
    if let Some(query) = initial_query {
        widget.set_query(query);
    }
    let mut state = ModernUIState::new();
    let mut ticker = tokio::time::interval(SPINNER_INTERVAL);

    terminal.draw(|f| crate::ui::render::draw(f, &widget, &mut state))?;

    while !state.should_exit {
        let loading = widget.is_loading();
        tokio::select! {
            maybe_event = rx.recv() => match maybe_event {
                Some(AppEvent::Input(ev)) => match state.handle_input(ev, &mut widget) {
                    Some(Command::Search) => spawn_search(&mut widget, search.clone(), tx.clone()),
                    Some(Command::Select(song)) => {
                        spawn_lyrics(&mut widget, lyrics.clone(), song, tx.clone())
                    }
                    None => {}
                },
                Some(done) => state.apply_completion(done, &mut widget),
                None => state.should_exit = true,
            },

            _ = async {
                if loading {
                    ticker.tick().await;
                } else {
                    futures_util::future::pending::<()>().await;
                }
            } => {
                state.spinner_tick = state.spinner_tick.wrapping_add(1);
            }
        }
        terminal.draw(|f| crate::ui::render::draw(f, &widget, &mut state))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::catalog::catalog;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn with_results() -> (ModernUIState, LyricsWidget) {
        let mut state = ModernUIState::new();
        let mut widget = LyricsWidget::default();
        widget.set_query("Taylor Swift");
        widget.begin_search();
        state.apply_completion(AppEvent::SearchDone(Ok(catalog().to_vec())), &mut widget);
        (state, widget)
    }

    #[test]
    fn typing_and_enter_submit_a_search() {
        let mut state = ModernUIState::new();
        let mut widget = LyricsWidget::default();
        for c in "Red - x".chars() {
            assert_eq!(state.handle_input(key(KeyCode::Char(c)), &mut widget), None);
        }
        state.handle_input(key(KeyCode::Backspace), &mut widget);
        assert_eq!(widget.query(), "Red - ");
        assert_eq!(state.handle_input(key(KeyCode::Enter), &mut widget), Some(Command::Search));
    }

    #[test]
    fn search_completion_focuses_results() {
        let (state, widget) = with_results();
        assert_eq!(state.focus, Focus::Results);
        assert_eq!(state.list.selected(), Some(0));
        assert!(!widget.is_loading());
    }

    #[test]
    fn enter_on_results_selects_song() {
        let (mut state, mut widget) = with_results();
        for _ in 0..7 {
            state.handle_input(key(KeyCode::Down), &mut widget);
        }
        assert_eq!(
            state.handle_input(key(KeyCode::Enter), &mut widget),
            Some(Command::Select(SongEntry::new("Cardigan", "Taylor Swift")))
        );
    }

    #[test]
    fn selection_stops_at_last_result() {
        let (mut state, mut widget) = with_results();
        for _ in 0..40 {
            state.handle_input(key(KeyCode::Down), &mut widget);
        }
        assert_eq!(state.list.selected(), Some(14));
        state.handle_input(key(KeyCode::Home), &mut widget);
        assert_eq!(state.list.selected(), Some(0));
        state.handle_input(key(KeyCode::End), &mut widget);
        assert_eq!(state.list.selected(), Some(14));
    }

    #[test]
    fn typing_in_results_returns_to_input() {
        let (mut state, mut widget) = with_results();
        state.handle_input(key(KeyCode::Char('!')), &mut widget);
        assert_eq!(state.focus, Focus::Input);
        assert_eq!(widget.query(), "Taylor Swift!");
    }

    #[test]
    fn theme_shortcuts() {
        let mut state = ModernUIState::new();
        let mut widget = LyricsWidget::default();
        state.handle_input(ctrl('t'), &mut widget);
        assert_eq!(widget.theme(), Theme::Dark);
        state.handle_input(key(KeyCode::F(2)), &mut widget);
        assert_eq!(widget.theme(), Theme::Light);
        assert_eq!(widget.query(), "");
    }

    #[test]
    fn quit_keys() {
        let mut widget = LyricsWidget::default();
        let mut state = ModernUIState::new();
        state.handle_input(key(KeyCode::Esc), &mut widget);
        assert!(state.should_exit);

        let mut state = ModernUIState::new();
        state.handle_input(ctrl('c'), &mut widget);
        assert!(state.should_exit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut state = ModernUIState::new();
        let mut widget = LyricsWidget::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        state.handle_input(release, &mut widget);
        assert_eq!(widget.query(), "");
    }

    #[test]
    fn click_on_result_row_selects_it() {
        let (mut state, mut widget) = with_results();
        state.results_area = Some(Rect::new(1, 10, 40, 15));
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 12,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            state.handle_input(click, &mut widget),
            Some(Command::Select(SongEntry::new("Anti-Hero", "Taylor Swift")))
        );
        assert_eq!(state.list.selected(), Some(2));
    }

    #[test]
    fn click_on_theme_button_toggles() {
        let mut state = ModernUIState::new();
        let mut widget = LyricsWidget::default();
        state.theme_button = Rect::new(90, 1, 8, 1);
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 95,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(state.handle_input(click, &mut widget), None);
        assert_eq!(widget.theme(), Theme::Dark);
    }

    #[test]
    fn applied_lyrics_reset_scroll() {
        let (mut state, mut widget) = with_results();
        state.lyrics_scroll = 30;
        let req = widget.begin_lyrics(SongEntry::new("Red", "Taylor Swift"));
        state.apply_completion(
            AppEvent::LyricsDone { seq: req.seq, result: Ok(Some("words".into())) },
            &mut widget,
        );
        assert_eq!(state.lyrics_scroll, 0);
        assert_eq!(widget.lyrics(), "words");
    }
}
