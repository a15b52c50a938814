use crate::action::{Action, Dispatch};
use crate::todo::{NextId, Todo};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::mem;
use tracing::{info, warn};

pub const TEAL: Color = Color::Rgb(0x12, 0xb8, 0x86);
pub const ROSE: Color = Color::Rgb(0xff, 0xa8, 0xa8);
const FORM_BG: Color = Color::Rgb(0x34, 0x3a, 0x40);
const PLACEHOLDER: &str = "Type a todo and press Enter";

/// Round "+" button that reveals an input form for new todos.
#[derive(Debug, Default)]
pub struct CreateControl {
    open: bool,
    value: String,
}

impl CreateControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[cfg(test)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Emits a CREATE for the current text, then clears and closes the form.
    ///
    /// Blank text is accepted. Nothing is dispatched once `next_id` is exhausted;
    /// the form stays open with its text.
    pub fn submit<D: Dispatch + ?Sized>(&mut self, dispatch: &mut D, next_id: &mut NextId) {
        if next_id.is_exhausted() {
            warn!(id = next_id.current, "todo ids exhausted, not creating");
            return;
        }
        let todo = Todo::new(next_id.current, mem::take(&mut self.value));
        info!(id = todo.id, "creating todo");
        dispatch.dispatch(Action::Create { todo });
        self.open = false;
        next_id.advance();
    }

    /// Feeds a key to the form. Returns `true` when the key was consumed.
    pub fn handle_key<D: Dispatch + ?Sized>(
        &mut self,
        key: KeyEvent,
        dispatch: &mut D,
        next_id: &mut NextId,
    ) -> bool {
        if !self.open {
            return false;
        }
        match key.code {
            KeyCode::Enter => self.submit(dispatch, next_id),
            KeyCode::Esc => self.toggle(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.insert(c),
            _ => return false,
        }
        true
    }

    pub fn render_form(&self, f: &mut Frame, area: Rect) {
        if !self.open || area.height == 0 {
            return;
        }
        // Keep the end of a long value, and the cursor after it, inside the form.
        let text_width = area.width.saturating_sub(2) as usize;
        let value_width = Line::from(self.value.as_str()).width();
        let scroll = value_width.saturating_sub(text_width.saturating_sub(1));
        let cursor_offset = value_width.min(text_width.saturating_sub(1)) as u16;

        let line = if self.value.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.value.as_str())
        };
        let form = Paragraph::new(line)
            .scroll((0, scroll.min(u16::MAX as usize) as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray))
                    .style(Style::default().bg(FORM_BG)),
            );
        f.render_widget(Clear, area);
        f.render_widget(form, area);

        let cursor_x = area.x.saturating_add(1).saturating_add(cursor_offset);
        f.set_cursor_position(Position::new(cursor_x, area.y.saturating_add(1)));
    }

    pub fn render_button(&self, f: &mut Frame, area: Rect) {
        let (glyph, color) = if self.open {
            (" × ", ROSE)
        } else {
            (" + ", TEAL)
        };
        let button = Paragraph::new(Line::from(Span::styled(
            glyph,
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(button, area);
    }

    /// Cells of `area` actually covered by the button glyph.
    pub fn button_hitbox(area: Rect) -> Rect {
        let width = 3.min(area.width);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: area.height.min(1),
        }
    }
}
