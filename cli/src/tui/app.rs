use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::widgets::TableState;
use todomatic_core::{validate_new_name, Action, Effect, Filter, Session, Task, TaskId, TaskStore};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adding,
    Editing(TaskId),
    Notice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Filters,
    ListHeading,
    List,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Form, Focus::Filters, Focus::ListHeading, Focus::List];

    fn next(self) -> Focus {
        let i = Focus::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Focus::ORDER[(i + 1) % Focus::ORDER.len()]
    }

    fn previous(self) -> Focus {
        let i = Focus::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Focus::ORDER[(i + Focus::ORDER.len() - 1) % Focus::ORDER.len()]
    }
}

pub struct App {
    pub session: Session,
    pub state: TableState,
    pub focus: Focus,
    pub filter_cursor: usize,
    pub input: String,
    /// New-task text set aside while the edit popup owns `input`.
    pub draft: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TaskStore) -> App {
        let mut session = Session::new(store);
        // The first frame is drawn from this state; it never moves focus.
        session.settle();

        let filter_cursor = Filter::ALL
            .iter()
            .position(|f| *f == session.store().filter())
            .unwrap_or(0);
        let mut state = TableState::default();
        if !session.store().visible().is_empty() {
            state.select(Some(0));
        }

        App {
            session,
            state,
            focus: Focus::List,
            filter_cursor,
            input: String::new(),
            draft: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &TaskStore {
        self.session.store()
    }

    pub fn visible(&self) -> Vec<&Task> {
        self.store().visible()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let i = self.state.selected()?;
        self.visible().get(i).copied()
    }

    fn dispatch(&mut self, action: Action) {
        let effects = self.session.dispatch(action);
        for effect in effects {
            match effect {
                Effect::FocusListHeading => {
                    debug!("focus moved to list heading");
                    self.focus = Focus::ListHeading;
                }
            }
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_mode.clone() {
            InputMode::Notice(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.dismiss_notice(),
                _ => {}
            },
            InputMode::Adding | InputMode::Editing(_) => match key.code {
                KeyCode::Enter => self.submit_input(),
                KeyCode::Esc => self.exit_input_mode(),
                KeyCode::Tab if self.input_mode == InputMode::Adding => {
                    self.exit_input_mode();
                    self.focus = Focus::Form.next();
                }
                KeyCode::BackTab if self.input_mode == InputMode::Adding => {
                    self.exit_input_mode();
                    self.focus = Focus::Form.previous();
                }
                KeyCode::Char(c) => self.input_char(c),
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right => self.move_cursor_right(),
                _ => {}
            },
            InputMode::Normal => self.handle_normal_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Char('a') => self.set_focus(Focus::Form),
            KeyCode::Char('1') => self.press_filter(0),
            KeyCode::Char('2') => self.press_filter(1),
            KeyCode::Char('3') => self.press_filter(2),
            _ => match self.focus {
                Focus::Form => {
                    if code == KeyCode::Enter {
                        self.enter_add_mode();
                    }
                }
                Focus::Filters => match code {
                    KeyCode::Left | KeyCode::Char('h') => self.previous_filter(),
                    KeyCode::Right | KeyCode::Char('l') => self.next_filter(),
                    KeyCode::Enter | KeyCode::Char(' ') => self.press_filter(self.filter_cursor),
                    _ => {}
                },
                Focus::ListHeading => {
                    if matches!(code, KeyCode::Down | KeyCode::Char('j')) {
                        self.focus = Focus::List;
                        self.clamp_selection();
                    }
                }
                Focus::List => match code {
                    KeyCode::Down | KeyCode::Char('j') => self.next(),
                    KeyCode::Up | KeyCode::Char('k') => self.previous(),
                    KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
                    KeyCode::Char('e') => self.enter_edit_mode(),
                    KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                    _ => {}
                },
            },
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Form {
            self.enter_add_mode();
        }
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
            self.dispatch(Action::ToggleTaskCompleted(id));
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
            self.dispatch(Action::DeleteTask(id));
        }
    }

    fn next_filter(&mut self) {
        self.filter_cursor = (self.filter_cursor + 1) % Filter::ALL.len();
    }

    fn previous_filter(&mut self) {
        self.filter_cursor = (self.filter_cursor + Filter::ALL.len() - 1) % Filter::ALL.len();
    }

    pub fn press_filter(&mut self, index: usize) {
        if let Some(filter) = Filter::ALL.get(index).copied() {
            self.filter_cursor = index;
            self.dispatch(Action::SetFilter(filter));
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.focus = Focus::Form;
        self.input_mode = InputMode::Adding;
        self.cursor_position = self.input.chars().count();
    }

    pub fn enter_edit_mode(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
            self.input_mode = InputMode::Editing(id);
            self.draft = std::mem::take(&mut self.input);
            self.cursor_position = 0;
        }
    }

    pub fn exit_input_mode(&mut self) {
        if matches!(self.input_mode, InputMode::Editing(_)) {
            self.restore_draft();
        }
        if self.input_mode == InputMode::Adding {
            self.focus = Focus::List;
        }
        self.input_mode = InputMode::Normal;
    }

    fn restore_draft(&mut self) {
        self.input = std::mem::take(&mut self.draft);
        self.cursor_position = self.input.chars().count();
    }

    fn dismiss_notice(&mut self) {
        self.enter_add_mode();
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_input(&mut self) {
        match self.input_mode.clone() {
            InputMode::Adding => self.submit_add(),
            InputMode::Editing(id) => self.submit_edit(id),
            InputMode::Normal | InputMode::Notice(_) => {}
        }
    }

    fn submit_add(&mut self) {
        match validate_new_name(&self.input) {
            Ok(name) => {
                let name = name.to_string();
                self.dispatch(Action::AddTask(name));
                self.input.clear();
                self.cursor_position = 0;
            }
            Err(err) => {
                debug!(%err, "rejected new task");
                self.input_mode = InputMode::Notice(err.to_string());
            }
        }
    }

    fn submit_edit(&mut self, id: TaskId) {
        let name = std::mem::take(&mut self.input);
        self.dispatch(Action::EditTask(id, name));
        self.restore_draft();
        self.input_mode = InputMode::Normal;
    }
}
