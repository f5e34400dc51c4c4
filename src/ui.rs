use crate::date::local_today;
use crate::form::TaskForm;
use crate::store::TaskStore;
use crate::task::Field;
use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame, Terminal,
};
use std::io;

const DIALOG_WIDTH_PERCENT: u16 = 60;
const DIALOG_HEIGHT: u16 = 16;

pub struct App<S: TaskStore> {
    store: S,
    form: TaskForm,
    dialog_open: bool,
}

impl<S: TaskStore> App<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            form: TaskForm::new(),
            dialog_open: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Applies one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent, today: NaiveDate) -> bool {
        if self.dialog_open {
            self.handle_dialog_key(key, today);
            return false;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('a') => {
                tracing::debug!("dialog opened");
                self.dialog_open = true;
            }
            _ => {}
        }
        false
    }

    fn handle_dialog_key(&mut self, key: KeyEvent, today: NaiveDate) {
        match key.code {
            KeyCode::Esc => {
                tracing::debug!("dialog cancelled");
                self.form.reset();
                self.dialog_open = false;
            }
            KeyCode::Enter => {
                if self.form.submit(&mut self.store, today).is_some() {
                    self.dialog_open = false;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(c)
            }
            _ => {}
        }
    }
}

pub fn run_app<B: Backend, S: TaskStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key, local_today()) {
                return Ok(());
            }
        }
    }
}

pub fn draw<S: TaskStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let items: Vec<ListItem> = app
        .store()
        .tasks()
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("[#{}] ", t.id)),
                Span::styled(
                    &t.title,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {}", t.description)),
                Span::raw(format!(" (Due: {})", t.date)),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Tasks").borders(Borders::ALL));
    f.render_widget(list, chunks[0]);

    let help = Paragraph::new("a: new task  q: quit").style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);

    if app.is_dialog_open() {
        draw_dialog(f, app.form());
    }
}

fn draw_dialog(f: &mut Frame, form: &TaskForm) {
    let area = centered_rect(DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title("New Task")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    draw_input(f, form, Field::Title, rows[0], rows[1]);
    draw_input(f, form, Field::Description, rows[2], rows[3]);

    let halves = [Constraint::Percentage(50), Constraint::Percentage(50)];
    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(halves)
        .split(rows[4]);
    let errors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(halves)
        .split(rows[5]);
    draw_input(f, form, Field::Day, inputs[0], errors[0]);
    draw_input(f, form, Field::Month, inputs[1], errors[1]);

    // past dates are reported on the whole day/month row
    draw_error(f, form, Field::Date, rows[6]);

    let buttons = Line::from(vec![
        Span::styled(
            "[Esc] CANCEL",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            "[Enter] CREATE TASK",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(buttons), rows[7]);
}

fn draw_input(f: &mut Frame, form: &TaskForm, field: Field, input: Rect, error: Rect) {
    let focused = form.focused() == field;
    let value = form.draft().get(field);

    let text = if value.is_empty() {
        Span::styled(placeholder(field), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };

    let block = Block::default()
        .title(field.to_string())
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    f.render_widget(Paragraph::new(Line::from(text)).block(block), input);

    if focused {
        let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let x = input.x.saturating_add(1).saturating_add(typed);
        let max_x = input.right().saturating_sub(2);
        f.set_cursor_position((x.min(max_x), input.y + 1));
    }

    draw_error(f, form, field, error);
}

fn draw_error(f: &mut Frame, form: &TaskForm, field: Field, area: Rect) {
    if let Some(message) = form.errors().message(field) {
        f.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Title => "Type the title...",
        Field::Description => "Type the description...",
        Field::Day => "e.g. 20",
        Field::Month => "e.g. 04",
        Field::Date => "",
    }
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_percent) / 100) as u16;
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
