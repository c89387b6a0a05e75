//! Socket message types exchanged with the board server.
//!
//! Every frame is a JSON text frame of the form
//! `{"event": "<kind>", "data": {...}}`.

use serde::{Deserialize, Serialize};

use super::error::BoardResult;
use super::serde_utils::id_string;
use crate::models::{Task, TaskStatus};

/// Messages the client sends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    MoveTask { task_id: String, new_status: TaskStatus },
}

/// Messages the server pushes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    TaskCreated(Task),
    TaskMoved {
        #[serde(deserialize_with = "id_string")]
        task_id: String,
        new_status: TaskStatus,
    },
}

impl ClientMessage {
    pub fn to_json(&self) -> BoardResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ServerMessage {
    pub fn from_json(frame: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(frame)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BoardError;
    use serde_json::json;

    #[test]
    fn test_move_task_wire_shape() {
        let msg = ClientMessage::MoveTask {
            task_id: "T1".to_string(),
            new_status: TaskStatus::Done,
        };
        let value: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({"event": "move_task", "data": {"task_id": "T1", "new_status": "done"}})
        );
    }

    #[test]
    fn test_parse_task_moved_with_numeric_id() {
        let msg = ServerMessage::from_json(
            r#"{"event": "task_moved", "data": {"task_id": 17, "new_status": "review"}}"#,
        )
        .unwrap();

        assert_eq!(
            msg,
            ServerMessage::TaskMoved {
                task_id: "17".to_string(),
                new_status: TaskStatus::Review,
            }
        );
    }

    #[test]
    fn test_parse_task_created_with_employees() {
        let frame = json!({
            "event": "task_created",
            "data": {
                "id": 9,
                "name": "Plan sprint",
                "status": "todo",
                "priority": 2,
                "employees": [{"id": 1, "index": "IIP", "full_name": "Ivanov Ivan Petrovich"}]
            }
        })
        .to_string();

        match ServerMessage::from_json(&frame).unwrap() {
            ServerMessage::TaskCreated(task) => {
                assert_eq!(task.id, "9");
                assert_eq!(task.status, TaskStatus::Todo);
                assert_eq!(task.employees.len(), 1);
                assert_eq!(task.employees[0].label(), "IIP");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_event_and_status() {
        let unknown_event = ServerMessage::from_json(r#"{"event": "task_deleted", "data": {"task_id": 1}}"#);
        let unknown_status = ServerMessage::from_json(
            r#"{"event": "task_moved", "data": {"task_id": 1, "new_status": "archived"}}"#,
        );

        assert!(matches!(unknown_event, Err(BoardError::Protocol(_))));
        assert!(matches!(unknown_status, Err(BoardError::Protocol(_))));
    }
}
