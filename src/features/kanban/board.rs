//! Board view model: cards per column, the drag slot, and how local drops
//! and server notifications change them.

use crate::core::protocol::{ClientMessage, ServerMessage};
use crate::models::{Task, TaskStatus};

/// The card being dragged, if any. Set on dragstart, cleared on dragend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSlot {
    current: Option<String>,
}

impl DragSlot {
    pub fn begin(&mut self, task_id: impl Into<String>) {
        self.current = Some(task_id.into());
    }

    pub fn end(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn take(&mut self) -> Option<String> {
        self.current.take()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    project_id: Option<String>,
    // Order within a status is display order inside that column.
    tasks: Vec<Task>,
}

impl BoardState {
    pub fn new(project_id: Option<String>, tasks: Vec<Task>) -> Self {
        let mut board = Self {
            project_id,
            tasks: Vec::new(),
        };
        board.tasks = tasks.into_iter().filter(|t| board.in_scope(t)).collect();
        board
    }

    fn in_scope(&self, task: &Task) -> bool {
        match (&self.project_id, &task.project_id) {
            (Some(board), Some(task)) => board == task,
            _ => true,
        }
    }

    pub fn column(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks.iter().filter(|t| t.status == status).cloned().collect()
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// Move a card to the end of `status`. Unknown ids are ignored.
    pub fn move_card(&mut self, task_id: &str, status: TaskStatus) -> bool {
        let Some(position) = self.tasks.iter().position(|t| t.id == task_id) else {
            return false;
        };
        let mut task = self.tasks.remove(position);
        task.update_status(status);
        self.tasks.push(task);
        true
    }

    /// Append a new card to its column, or replace a card with the same id.
    pub fn insert_card(&mut self, task: Task) -> bool {
        if !self.in_scope(&task) {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
        true
    }

    /// Optimistically move the dragged card and produce the move message
    /// to send. The drop ends the gesture, so the slot is empty afterwards.
    /// Nothing happens when no card is being dragged.
    pub fn drop_on(&mut self, drag: &mut DragSlot, status: TaskStatus) -> Option<ClientMessage> {
        let task_id = drag.take()?;
        if !self.move_card(&task_id, status) {
            return None;
        }
        Some(ClientMessage::MoveTask {
            task_id,
            new_status: status,
        })
    }

    pub fn apply(&mut self, message: ServerMessage) -> bool {
        match message {
            ServerMessage::TaskCreated(task) => self.insert_card(task),
            ServerMessage::TaskMoved { task_id, new_status } => self.move_card(&task_id, new_status),
        }
    }
}
