use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub done: bool,
}

impl Todo {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// Source of ids for new todos. Owned by the app and lent to the create control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextId {
    pub current: u32,
}

impl NextId {
    pub fn new(start: u32) -> Self {
        Self { current: start }
    }

    /// `true` once `current` is the last representable id.
    pub fn is_exhausted(&self) -> bool {
        self.current == u32::MAX
    }

    /// Moves to the next id. Stays put once exhausted.
    pub fn advance(&mut self) {
        self.current = self.current.saturating_add(1);
    }
}

impl Default for NextId {
    fn default() -> Self {
        Self::new(1)
    }
}
