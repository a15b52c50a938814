use crate::create_control::CreateControl;
use crate::item_row::{ItemRow, RowTarget};
use crate::todo::NextId;
use crate::todo_list::TodoList;
use chrono::{Local, NaiveDate};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, info};

/// Screen regions from the last frame, used to route mouse clicks.
#[derive(Debug, Default, Clone, Copy)]
struct Hitboxes {
    list: Rect,
    button: Rect,
}

pub struct App {
    todos: TodoList,
    next_id: NextId,
    create: CreateControl,
    list_state: ListState,
    remove_hovered: bool,
    hitboxes: Hitboxes,
    should_quit: bool,
}

impl App {
    pub fn new(next_id: NextId) -> Self {
        Self {
            todos: TodoList::new(),
            next_id,
            create: CreateControl::new(),
            list_state: ListState::default(),
            remove_hovered: false,
            hitboxes: Hitboxes::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self
            .create
            .handle_key(key, &mut self.todos, &mut self.next_id)
        {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') | KeyCode::Char('+') => self.create.toggle(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.activate(RowTarget::Indicator),
            KeyCode::Char('d') | KeyCode::Delete => self.activate(RowTarget::Remove),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.hitboxes.button.contains(pos) {
                    self.create.toggle();
                } else if let Some(index) = self.row_at(pos) {
                    self.list_state.select(Some(index));
                    let list = self.hitboxes.list;
                    self.activate(ItemRow::hit(pos.x - list.x, list.width));
                }
            }
            MouseEventKind::Moved => match self.row_at(pos) {
                Some(index) => {
                    let list = self.hitboxes.list;
                    self.list_state.select(Some(index));
                    self.remove_hovered =
                        ItemRow::hit(pos.x - list.x, list.width) == RowTarget::Remove;
                }
                None => {
                    self.list_state.select(None);
                    self.remove_hovered = false;
                }
            },
            _ => {}
        }
    }

    fn row_at(&self, pos: Position) -> Option<usize> {
        let list = self.hitboxes.list;
        if !list.contains(pos) {
            return None;
        }
        let index = (pos.y - list.y) as usize + self.list_state.offset();
        (index < self.todos.len()).then_some(index)
    }

    fn move_selection(&mut self, delta: isize) {
        self.remove_hovered = false;
        if self.todos.is_empty() {
            self.list_state.select(None);
            return;
        }
        let last = self.todos.len() as isize - 1;
        let next = match self.list_state.selected() {
            Some(i) => (i as isize + delta).clamp(0, last),
            None => 0,
        };
        self.list_state.select(Some(next as usize));
    }

    fn activate(&mut self, target: RowTarget) {
        // Clone so the row can dispatch into the list it was read from.
        let Some(todo) = self
            .list_state
            .selected()
            .and_then(|i| self.todos.todos().get(i).cloned())
        else {
            return;
        };
        let row = ItemRow::new(&todo);
        match target {
            RowTarget::Indicator => {
                debug!(id = row.id(), "toggle");
                row.on_toggle(&mut self.todos);
            }
            RowTarget::Remove => {
                info!(id = row.id(), "remove");
                row.on_remove(&mut self.todos);
                self.clamp_selection();
            }
            RowTarget::Text => {}
        }
    }

    fn clamp_selection(&mut self) {
        match (self.list_state.selected(), self.todos.len()) {
            (_, 0) => self.list_state.select(None),
            (Some(i), len) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        self.draw_at(f, Local::now().date_naive());
    }

    fn draw_at(&mut self, f: &mut Frame, today: NaiveDate) {
        let outer = Block::default()
            .title(" Todo ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = outer.inner(f.area());
        f.render_widget(outer, f.area());

        let form_height = if self.create.is_open() { 3 } else { 0 };
        let [head, list, form, button] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(form_height),
            Constraint::Length(1),
        ])
        .areas(inner);

        render_head(f, head, today, self.todos.remaining());

        let selected = self.list_state.selected();
        let items: Vec<ListItem> = self
            .todos
            .todos()
            .iter()
            .enumerate()
            .map(|(i, todo)| {
                ItemRow::new(todo)
                    .hovered(selected == Some(i))
                    .remove_hovered(selected == Some(i) && self.remove_hovered)
                    .to_list_item(list.width)
            })
            .collect();
        let rows = List::new(items).highlight_style(Style::default().add_modifier(Modifier::BOLD));
        f.render_stateful_widget(rows, list, &mut self.list_state);

        self.create.render_form(f, form);
        self.create.render_button(f, button);

        self.hitboxes = Hitboxes {
            list,
            button: CreateControl::button_hitbox(button),
        };
    }
}

fn render_head(f: &mut Frame, area: Rect, today: NaiveDate, remaining: usize) {
    let head = Paragraph::new(vec![
        Line::from(Span::styled(
            today.format("%Y-%m-%d").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            today.format("%A").to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("{remaining} tasks left"),
            Style::default().fg(Color::Rgb(0x20, 0xc9, 0x97)),
        )),
    ]);
    f.render_widget(head, area);
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;
        app.handle_event(event::read()?);
        if app.should_quit() {
            return Ok(());
        }
    }
}
