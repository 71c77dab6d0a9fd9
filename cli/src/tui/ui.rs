use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use todomatic_core::Filter;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Focus, InputMode};

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Form
            Constraint::Length(3), // Filters
            Constraint::Length(3), // List heading
            Constraint::Min(1),    // Tasks
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("TodoMatic")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_form(f, app, main_chunks[1]);
    draw_filters(f, app, main_chunks[2]);
    draw_heading(f, app, main_chunks[3]);
    draw_task_list(f, app, main_chunks[4]);

    let help = match app.input_mode {
        InputMode::Normal => "a: Add | Tab: Focus | 1-3: Filter | Space: Toggle | e: Edit | d: Delete | q: Quit",
        InputMode::Adding | InputMode::Editing(_) => "Enter: Save | Esc: Cancel",
        InputMode::Notice(_) => "Enter: OK",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[5]);

    match &app.input_mode {
        InputMode::Editing(id) => {
            let title = app
                .store()
                .get(id)
                .map(|t| format!(" New name for {} ", t.name))
                .unwrap_or_else(|| " New name ".to_string());
            let area = centered_rect(60, 3, size);
            f.render_widget(Clear, area);
            let input = Paragraph::new(app.input.as_str()).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style(true)),
            );
            f.render_widget(input, area);
            set_input_cursor(f, app, area);
        }
        InputMode::Notice(message) => {
            let area = centered_rect(60, 5, size);
            f.render_widget(Clear, area);
            let notice = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(" Notice ")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Yellow)),
                );
            f.render_widget(notice, area);
        }
        InputMode::Normal | InputMode::Adding => {}
    }
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Form;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(9)])
        .split(area);

    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title(" What needs to be done? ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(focused)),
    );
    f.render_widget(input, chunks[0]);

    let add = Paragraph::new("Add")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(add, chunks[1]);

    if app.input_mode == InputMode::Adding {
        set_input_cursor(f, app, chunks[0]);
    }
}

fn draw_filters(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Filters;
    let active = app.store().filter();

    let mut spans = Vec::new();
    for (i, filter) in Filter::ALL.iter().enumerate() {
        let mut style = if *filter == active {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if focused && i == app.filter_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} {} ", i + 1, filter.name()), style));
        spans.push(Span::raw(" "));
    }

    let filters = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Show ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(focused)),
    );
    f.render_widget(filters, area);
}

fn draw_heading(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::ListHeading;
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if focused {
        style = style.fg(Color::Cyan);
    }

    let heading = Paragraph::new(app.store().summary()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(focused)),
    );
    f.render_widget(heading, area);
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::List;
    let rows: Vec<Row> = app
        .visible()
        .into_iter()
        .map(|task| {
            let (checkbox, name_style) = if task.completed {
                ("[x]", Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT))
            } else {
                ("[ ]", Style::default())
            };
            Row::new(vec![
                Span::raw(checkbox),
                Span::styled(task.name.clone(), name_style),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(3), Constraint::Min(10)])
        .block(
            Block::default()
                .title(" Tasks ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style(focused)),
        )
        .row_highlight_style(if focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn set_input_cursor(f: &mut Frame, app: &App, area: Rect) {
    let before: String = app.input.chars().take(app.cursor_position).collect();
    let x = area.x + 1 + before.width() as u16;
    f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (u32::from(r.width) * u32::from(percent_x) / 100) as u16;
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use todomatic_core::{Task, TaskStore};

    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buf = terminal.backend().buffer();
        let area = buf.area;
        let mut lines = Vec::new();
        for y in area.y..area.y + area.height {
            let mut line = String::new();
            for x in area.x..area.x + area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn test_centered_rect_on_wide_terminal() {
        let area = centered_rect(60, 5, Rect::new(0, 0, 2000, 50));
        assert_eq!(area, Rect::new(400, 22, 1200, 5));
    }

    #[test]
    fn test_renders_on_wide_terminal() {
        let mut app = App::new(TaskStore::new());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        let screen = render_to_string(&mut app, 1200, 24);
        assert!(screen.contains("Input box is EMPTY"));
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_renders_empty_state() {
        let mut app = App::new(TaskStore::new());
        let screen = render_to_string(&mut app, 100, 24);

        assert!(screen.contains("TodoMatic"));
        assert!(screen.contains("What needs to be done?"));
        assert!(screen.contains("1 All"));
        assert!(screen.contains("2 Active"));
        assert!(screen.contains("3 Completed"));
        assert!(screen.contains("Empty - no task"));
    }

    #[test]
    fn test_renders_rows_with_checkboxes() {
        let mut done = Task::new("Buy milk");
        done.completed = true;
        let mut app = App::new(TaskStore::with_tasks(vec![done, Task::new("Walk dog")]));
        let screen = render_to_string(&mut app, 100, 24);

        assert!(screen.contains("All tasks"));
        assert!(screen.contains("[x] Buy milk"));
        assert!(screen.contains("[ ] Walk dog"));
    }

    #[test]
    fn test_renders_visible_subsequence_only() {
        let mut done = Task::new("Buy milk");
        done.completed = true;
        let mut app = App::new(TaskStore::with_tasks(vec![done, Task::new("Walk dog")]));
        press(&mut app, KeyCode::Char('2'));
        let screen = render_to_string(&mut app, 100, 24);

        assert!(screen.contains("1 task remaining"));
        assert!(screen.contains("Walk dog"));
        assert!(!screen.contains("Buy milk"));
    }

    #[test]
    fn test_renders_notice_popup() {
        let mut app = App::new(TaskStore::new());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        let screen = render_to_string(&mut app, 100, 24);

        assert!(screen.contains("Notice"));
        assert!(screen.contains("Input box is EMPTY"));
    }

    #[test]
    fn test_renders_edit_popup() {
        let mut app = App::new(TaskStore::with_tasks(vec![Task::new("Buy milk")]));
        press(&mut app, KeyCode::Char('e'));
        let screen = render_to_string(&mut app, 100, 24);

        assert!(screen.contains("New name for Buy milk"));
    }
}
