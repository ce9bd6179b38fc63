// src/tui/mod.rs
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use ratatui::Terminal;
use tracing::debug;

use crate::application::{Composer, Notebook};
use crate::constants::{NOTICE_DURATION_MS, TICK_RATE_MS};
use crate::domain::NoteId;

mod ui;

/// A fire-and-forget status line. It expires on its own and never blocks
/// input.
#[derive(Debug)]
pub(crate) struct Notice {
    pub(crate) message: String,
    expires_at: Instant,
}

impl Notice {
    fn new(message: String) -> Self {
        Self {
            message,
            expires_at: Instant::now() + Duration::from_millis(NOTICE_DURATION_MS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

enum Action {
    Quit,
    ToggleDrawer,
    CloseDrawer,
    DrawerNext,
    DrawerPrevious,
    SelectHighlighted,
    DeleteHighlighted,
    OpenComposer,
    ComposerSave,
    ComposerCancel,
    ComposerToggleFocus,
    ComposerNewline,
    ComposerBackspace,
    ComposerInput(char),
}

pub struct App {
    pub(crate) notebook: Notebook,
    pub(crate) drawer_open: bool,
    pub(crate) drawer_state: ListState,
    drawer_cursor: usize,
    pub(crate) composer: Option<Composer>,
    pub(crate) notice: Option<Notice>,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn new(notebook: Notebook) -> Self {
        Self {
            notebook,
            drawer_open: false,
            drawer_state: ListState::default(),
            drawer_cursor: 0,
            composer: None,
            notice: None,
            should_quit: false,
            tick_rate: Duration::from_millis(TICK_RATE_MS),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();
        loop {
            self.drawer_state.select(Some(self.drawer_cursor));
            terminal
                .draw(|frame| ui::draw(frame, self))
                .context("drawing frame")?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).context("polling terminal events")? {
                if let Event::Key(key) = event::read().context("reading terminal event")? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = self.map_key(key) {
                            self.dispatch(action);
                        }
                    }
                }
            }
            if last_tick.elapsed() >= self.tick_rate {
                self.on_tick();
                last_tick = Instant::now();
            }
            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn on_tick(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }

    fn map_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.composer.is_some() {
            return match key.code {
                KeyCode::Esc => Some(Action::ComposerCancel),
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::ComposerSave)
                }
                KeyCode::Tab => Some(Action::ComposerToggleFocus),
                KeyCode::Enter => Some(Action::ComposerNewline),
                KeyCode::Backspace => Some(Action::ComposerBackspace),
                KeyCode::Char(ch) => Some(Action::ComposerInput(ch)),
                _ => None,
            };
        }

        if self.drawer_open {
            return match key.code {
                KeyCode::Esc => Some(Action::CloseDrawer),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::DrawerPrevious),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::DrawerNext),
                KeyCode::Enter => Some(Action::SelectHighlighted),
                KeyCode::Delete | KeyCode::Char('x') => Some(Action::DeleteHighlighted),
                KeyCode::Char('d') => Some(Action::CloseDrawer),
                KeyCode::Char('n') => Some(Action::OpenComposer),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('d') | KeyCode::Tab => Some(Action::ToggleDrawer),
            KeyCode::Char('n') => Some(Action::OpenComposer),
            _ => None,
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
                if self.drawer_open {
                    self.cursor_to_selected();
                }
            }
            Action::CloseDrawer => self.drawer_open = false,
            Action::DrawerNext => self.move_cursor(1),
            Action::DrawerPrevious => self.move_cursor(-1),
            Action::SelectHighlighted => self.select_highlighted(),
            Action::DeleteHighlighted => self.delete_highlighted(),
            Action::OpenComposer => {
                self.drawer_open = false;
                self.composer = Some(Composer::new());
            }
            Action::ComposerSave => self.composer_save(),
            Action::ComposerCancel => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.cancel();
                }
                self.composer = None;
            }
            Action::ComposerToggleFocus => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.toggle_focus();
                }
            }
            Action::ComposerNewline => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.push_newline();
                }
            }
            Action::ComposerBackspace => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.pop_char();
                }
            }
            Action::ComposerInput(ch) => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.push_char(ch);
                }
            }
        }
    }

    fn select_highlighted(&mut self) {
        let Some(id) = self.highlighted_id() else {
            return;
        };
        match self.notebook.select_note(id) {
            Ok(()) => self.drawer_open = false,
            Err(error) => self.show_notice(error.to_string()),
        }
    }

    fn delete_highlighted(&mut self) {
        let Some(id) = self.highlighted_id() else {
            return;
        };
        match self.notebook.delete_note(id) {
            Ok(()) => self.clamp_cursor(),
            Err(error) => {
                debug!(%id, %error, "Delete rejected");
                self.show_notice(error.to_string());
            }
        }
    }

    fn composer_save(&mut self) {
        let Some(composer) = self.composer.as_mut() else {
            return;
        };
        match composer.save(&mut self.notebook) {
            Ok(id) => {
                debug!(%id, "Note created");
                self.composer = None;
                self.cursor_to_selected();
            }
            Err(error) => self.show_notice(error.to_string()),
        }
    }

    fn show_notice(&mut self, message: String) {
        self.notice = Some(Notice::new(message));
    }

    fn highlighted_id(&self) -> Option<NoteId> {
        self.notebook
            .notes()
            .get(self.drawer_cursor)
            .map(|note| note.id)
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.notebook.is_empty() {
            self.drawer_cursor = 0;
            return;
        }
        let len = self.notebook.len() as isize;
        let next = (self.drawer_cursor as isize + delta).clamp(0, len - 1);
        self.drawer_cursor = next as usize;
    }

    fn clamp_cursor(&mut self) {
        if self.notebook.is_empty() {
            self.drawer_cursor = 0;
        } else if self.drawer_cursor >= self.notebook.len() {
            self.drawer_cursor = self.notebook.len() - 1;
        }
    }

    fn cursor_to_selected(&mut self) {
        let selected = self.notebook.selected_id();
        self.drawer_cursor = self
            .notebook
            .notes()
            .iter()
            .position(|note| Some(note.id) == selected)
            .unwrap_or(0);
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("switching to alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal backend")?;
    terminal.hide_cursor().context("hiding cursor")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor().ok();
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("restoring screen state")?;
    Ok(())
}
