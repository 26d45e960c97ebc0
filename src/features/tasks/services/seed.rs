use crate::core::logging;
use crate::core::models::Task;

const SEED_TASKS: &str = r#"[
    {
        "Id": "1",
        "title": "Migrate settings page to hooks",
        "description": "Replace the class component and its lifecycle methods with hooks.",
        "assignee": "Priya Natarajan",
        "taskType": "React",
        "status": "To Do",
        "dueDate": "2024-01-12"
    },
    {
        "Id": "2",
        "title": "Rotate API credentials",
        "description": "Quarterly key rotation for the staging and production environments.",
        "assignee": "Marcus Lee",
        "taskType": "Maintain",
        "status": "In Progress",
        "dueDate": "2024-01-05"
    },
    {
        "Id": "3",
        "title": "Speed up board rendering",
        "description": "Virtualize long columns so boards with hundreds of cards stay responsive.",
        "assignee": "Ada Okafor",
        "taskType": "Improve",
        "status": "Done",
        "dueDate": "2024-02-01"
    },
    {
        "Id": "4",
        "title": "Triage imported tickets",
        "description": "Sort the tickets brought over from the old tracker.",
        "assignee": "Jun Park",
        "taskType": "Research",
        "status": "Blocked",
        "dueDate": "2030-06-30"
    }
]"#;

pub fn parse_tasks(raw: &str) -> Result<Vec<Task>, String> {
    serde_json::from_str(raw).map_err(|e| format!("Failed to parse tasks: {}", e))
}

pub fn seed_tasks() -> Vec<Task> {
    match parse_tasks(SEED_TASKS) {
        Ok(tasks) => tasks,
        Err(e) => {
            logging::error(&e);
            Vec::new()
        }
    }
}
