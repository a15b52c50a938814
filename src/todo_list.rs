use crate::action::{Action, Dispatch};
use crate::todo::Todo;
use tracing::debug;

#[derive(Debug, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Number of todos not yet done.
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.done).count()
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Create { todo } => self.todos.push(todo),
            Action::Toggle { id } => match self.todos.iter_mut().find(|t| t.id == id) {
                Some(todo) => todo.done = !todo.done,
                None => debug!(id, "toggle matched no todo"),
            },
            Action::Remove { id } => {
                let before = self.todos.len();
                self.todos.retain(|t| t.id != id);
                if self.todos.len() == before {
                    debug!(id, "remove matched no todo");
                }
            }
        }
    }
}

impl Dispatch for TodoList {
    fn dispatch(&mut self, action: Action) {
        match serde_json::to_string(&action) {
            Ok(json) => debug!(action = %json, "dispatch"),
            Err(err) => debug!(?action, %err, "dispatch"),
        }
        self.apply(action);
    }
}
