use crate::action::{Action, Dispatch};
use crate::create_control::{ROSE, TEAL};
use crate::todo::Todo;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
};

const INDICATOR_WIDTH: u16 = 3;
const REMOVE_WIDTH: u16 = 3;
const FADED: Color = Color::Rgb(0xde, 0xe2, 0xe6);

/// Part of a row under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Indicator,
    Text,
    Remove,
}

/// One todo rendered as indicator, text and remove affordance.
#[derive(Debug, Clone, Copy)]
pub struct ItemRow<'a> {
    todo: &'a Todo,
    hovered: bool,
    remove_hovered: bool,
}

impl<'a> ItemRow<'a> {
    pub fn new(todo: &'a Todo) -> Self {
        Self {
            todo,
            hovered: false,
            remove_hovered: false,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Pointer is over the remove affordance itself.
    pub fn remove_hovered(mut self, remove_hovered: bool) -> Self {
        self.remove_hovered = remove_hovered;
        self
    }

    pub fn id(&self) -> u32 {
        self.todo.id
    }

    pub fn on_toggle<D: Dispatch + ?Sized>(&self, dispatch: &mut D) {
        dispatch.dispatch(Action::Toggle { id: self.todo.id });
    }

    pub fn on_remove<D: Dispatch + ?Sized>(&self, dispatch: &mut D) {
        dispatch.dispatch(Action::Remove { id: self.todo.id });
    }

    pub fn hit(column: u16, width: u16) -> RowTarget {
        if column < INDICATOR_WIDTH {
            RowTarget::Indicator
        } else if width >= INDICATOR_WIDTH + REMOVE_WIDTH && column >= width - REMOVE_WIDTH {
            RowTarget::Remove
        } else {
            RowTarget::Text
        }
    }

    pub fn to_list_item(&self, width: u16) -> ListItem<'a> {
        let done = self.todo.done;
        let indicator = if done {
            Span::styled("(✓)", Style::default().fg(TEAL))
        } else {
            Span::styled("( )", Style::default().fg(Color::Gray))
        };
        let text_style = if done {
            Style::default().fg(FADED)
        } else {
            Style::default()
        };
        let text = Span::styled(self.todo.text.as_str(), text_style);

        let used = INDICATOR_WIDTH as usize + 1 + text.width() + REMOVE_WIDTH as usize;
        let padding = " ".repeat((width as usize).saturating_sub(used));
        let remove = if self.hovered {
            let color = if self.remove_hovered { ROSE } else { FADED };
            Span::styled(" ✕ ", Style::default().fg(color))
        } else {
            Span::raw("   ")
        };

        ListItem::new(Line::from(vec![
            indicator,
            Span::raw(" "),
            text,
            Span::raw(padding),
            remove,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Cell, layout::Rect, widgets::List, Terminal};

    fn row_cells(row: ItemRow, width: u16) -> Vec<Cell> {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        let item = row.to_list_item(width);
        terminal
            .draw(|f| f.render_widget(List::new(vec![item]), Rect::new(0, 0, width, 1)))
            .unwrap();
        terminal.backend().buffer().content.clone()
    }

    fn row_text(todo: &Todo, hovered: bool, width: u16) -> String {
        row_cells(ItemRow::new(todo).hovered(hovered), width)
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn toggle_dispatches_own_id() {
        let todos = [Todo::new(1, "a"), Todo::new(2, "b"), Todo::new(3, "c")];
        let mut actions: Vec<Action> = Vec::new();
        ItemRow::new(&todos[1]).on_toggle(&mut actions);
        assert_eq!(actions, vec![Action::Toggle { id: 2 }]);
    }

    #[test]
    fn remove_dispatches_own_id() {
        let todos = [Todo::new(10, "a"), Todo::new(20, "b")];
        let mut actions: Vec<Action> = Vec::new();
        for todo in &todos {
            ItemRow::new(todo).on_remove(&mut actions);
        }
        assert_eq!(
            actions,
            vec![Action::Remove { id: 10 }, Action::Remove { id: 20 }]
        );
    }

    #[test]
    fn indicator_reflects_done() {
        let mut todo = Todo::new(1, "Buy milk");
        assert!(row_text(&todo, false, 20).starts_with("( ) Buy milk"));
        todo.done = true;
        assert!(row_text(&todo, false, 20).starts_with("(✓) Buy milk"));
    }

    #[test]
    fn remove_affordance_only_when_hovered() {
        let todo = Todo::new(1, "Buy milk");
        assert!(!row_text(&todo, false, 20).contains('✕'));
        assert!(row_text(&todo, true, 20).ends_with(" ✕ "));
    }

    #[test]
    fn text_colour_follows_done() {
        let mut todo = Todo::new(1, "Buy milk");
        let cells = row_cells(ItemRow::new(&todo), 20);
        assert_eq!(cells[4].symbol(), "B");
        assert_eq!(cells[4].fg, Color::Reset);
        assert_eq!(cells[1].fg, Color::Gray);

        todo.done = true;
        let cells = row_cells(ItemRow::new(&todo), 20);
        assert_eq!(cells[4].symbol(), "B");
        assert_eq!(cells[11].fg, FADED);
        assert_eq!(cells[4].fg, FADED);
        assert_eq!(cells[1].fg, TEAL);
    }

    #[test]
    fn remove_turns_rose_only_under_the_pointer() {
        let todo = Todo::new(1, "Buy milk");
        let cells = row_cells(ItemRow::new(&todo).hovered(true), 20);
        assert_eq!(cells[18].symbol(), "✕");
        assert_eq!(cells[18].fg, FADED);

        let cells = row_cells(ItemRow::new(&todo).hovered(true).remove_hovered(true), 20);
        assert_eq!(cells[18].fg, ROSE);
    }

    #[test]
    fn hit_maps_columns_to_targets() {
        assert_eq!(ItemRow::hit(0, 20), RowTarget::Indicator);
        assert_eq!(ItemRow::hit(2, 20), RowTarget::Indicator);
        assert_eq!(ItemRow::hit(5, 20), RowTarget::Text);
        assert_eq!(ItemRow::hit(17, 20), RowTarget::Remove);
        assert_eq!(ItemRow::hit(19, 20), RowTarget::Remove);
        assert_eq!(ItemRow::hit(4, 4), RowTarget::Text);
    }
}
