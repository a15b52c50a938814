//! Actions describing intended changes to the todo list.

use crate::todo::Todo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Action {
    Create { todo: Todo },
    Toggle { id: u32 },
    Remove { id: u32 },
}

/// Anything that accepts actions. Components receive it explicitly.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

#[cfg(test)]
impl Dispatch for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_uses_tagged_shape() {
        let action = Action::Create {
            todo: Todo::new(5, "Buy milk"),
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({"type": "CREATE", "todo": {"id": 5, "text": "Buy milk", "done": false}})
        );
    }

    #[test]
    fn toggle_and_remove_carry_only_the_id() {
        assert_eq!(
            serde_json::to_value(Action::Toggle { id: 3 }).unwrap(),
            json!({"type": "TOGGLE", "id": 3})
        );
        assert_eq!(
            serde_json::to_value(Action::Remove { id: 4 }).unwrap(),
            json!({"type": "REMOVE", "id": 4})
        );
    }

    #[test]
    fn parses_plain_action_objects() {
        let action: Action = serde_json::from_str(r#"{"type":"REMOVE","id":9}"#).unwrap();
        assert_eq!(action, Action::Remove { id: 9 });
    }
}
