use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Done,
    // Anything outside the three canonical labels, kept verbatim
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
            TaskStatus::Other(label) => label,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    /// Next step on the status ring: To Do -> In Progress -> Done -> To Do.
    /// Unrecognized labels restart the ring at To Do.
    pub fn cycle_next(&self) -> TaskStatus {
        match self {
            TaskStatus::ToDo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::ToDo,
            TaskStatus::Other(_) => TaskStatus::ToDo,
        }
    }

    /// Checkbox shortcut that skips In Progress.
    pub fn quick_toggle(&self) -> TaskStatus {
        if self.is_done() {
            TaskStatus::ToDo
        } else {
            TaskStatus::Done
        }
    }
}

impl From<String> for TaskStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "To Do" => TaskStatus::ToDo,
            "In Progress" => TaskStatus::InProgress,
            "Done" => TaskStatus::Done,
            _ => TaskStatus::Other(label),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum TaskType {
    React,
    Maintain,
    Improve,
    Other(String),
}

impl TaskType {
    pub fn as_str(&self) -> &str {
        match self {
            TaskType::React => "React",
            TaskType::Maintain => "Maintain",
            TaskType::Improve => "Improve",
            TaskType::Other(label) => label,
        }
    }
}

impl From<String> for TaskType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "React" => TaskType::React,
            "Maintain" => TaskType::Maintain,
            "Improve" => TaskType::Improve,
            _ => TaskType::Other(label),
        }
    }
}

impl From<TaskType> for String {
    fn from(task_type: TaskType) -> Self {
        match task_type {
            TaskType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
}

impl Task {
    pub fn new(title: String, description: String, assignee: String, task_type: TaskType, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            assignee,
            task_type,
            status: TaskStatus::ToDo,
            due_date,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_done()
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub fn update_details(&mut self, title: String, description: String, assignee: String) {
        self.title = title;
        self.description = description;
        self.assignee = assignee;
    }
}

/// Mutation payload sent to the status update handler, `{ "status": "Done" }` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusPatch {
    pub status: TaskStatus,
}

impl StatusPatch {
    pub fn new(status: TaskStatus) -> Self {
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_returns_to_start_after_three_steps() {
        for status in [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(status.cycle_next().cycle_next().cycle_next(), status);
        }
    }

    #[test]
    fn ring_order_is_todo_progress_done() {
        assert_eq!(TaskStatus::ToDo.cycle_next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.cycle_next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.cycle_next(), TaskStatus::ToDo);
    }

    #[test]
    fn unknown_status_restarts_ring() {
        for label in ["Blocked", "", "done", "In Review"] {
            let status = TaskStatus::from(label.to_string());
            assert_eq!(status.cycle_next(), TaskStatus::ToDo, "label {:?}", label);
        }
    }

    #[test]
    fn quick_toggle_skips_in_progress() {
        assert_eq!(TaskStatus::Done.quick_toggle(), TaskStatus::ToDo);
        assert_eq!(TaskStatus::ToDo.quick_toggle(), TaskStatus::Done);
        assert_eq!(TaskStatus::InProgress.quick_toggle(), TaskStatus::Done);
        assert_eq!(TaskStatus::Other("Blocked".into()).quick_toggle(), TaskStatus::Done);
    }

    #[test]
    fn task_deserializes_from_record_shape() {
        let json = r#"{
            "Id": "7",
            "title": "Fix login",
            "description": "Session expires too early",
            "assignee": "Sam",
            "taskType": "Maintain",
            "status": "In Progress",
            "dueDate": "2024-01-12"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "7");
        assert_eq!(task.task_type, TaskType::Maintain);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
    }

    #[test]
    fn unknown_labels_survive_serialization() {
        let json = r#"{"Id":"1","title":"t","description":"d","assignee":"a","taskType":"Research","status":"Blocked","dueDate":"2024-03-01"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::Other("Blocked".into()));
        assert_eq!(task.task_type.as_str(), "Research");

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["status"], "Blocked");
        assert_eq!(value["taskType"], "Research");
    }

    #[test]
    fn status_patch_wire_shape() {
        let patch = StatusPatch::new(TaskStatus::InProgress);
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"status":"In Progress"}"#);
    }

    #[test]
    fn new_task_starts_in_todo_with_fresh_id() {
        let due = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let a = Task::new("a".into(), String::new(), "x".into(), TaskType::React, due);
        let b = Task::new("b".into(), String::new(), "x".into(), TaskType::React, due);
        assert_eq!(a.status, TaskStatus::ToDo);
        assert_ne!(a.id, b.id);
    }
}
