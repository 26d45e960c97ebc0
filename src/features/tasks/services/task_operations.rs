use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use crate::core::logging;
use crate::core::models::{StatusPatch, Task};

fn find_task<'a>(tasks: &'a mut [Task], task_id: &str) -> Result<&'a mut Task, String> {
    tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| format!("Task {} not found", task_id))
}

pub fn apply_status_patch(tasks: &mut [Task], task_id: &str, patch: &StatusPatch) -> Result<(), String> {
    let task = find_task(tasks, task_id)?;
    task.update_status(patch.status.clone());
    Ok(())
}

pub fn apply_details(
    tasks: &mut [Task],
    task_id: &str,
    title: String,
    description: String,
    assignee: String,
) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Task title cannot be empty".to_string());
    }
    let task = find_task(tasks, task_id)?;
    task.update_details(title, description, assignee);
    Ok(())
}

pub fn remove_task(tasks: &mut Vec<Task>, task_id: &str) -> Result<Task, String> {
    let index = tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| format!("Task {} not found", task_id))?;
    Ok(tasks.remove(index))
}

/// Applies edited fields to the task with `draft.id`, or adds `draft` if the list doesn't have it yet.
/// Returns true when the task was newly added.
pub fn upsert_details(
    tasks: &mut Vec<Task>,
    mut draft: Task,
    title: String,
    description: String,
    assignee: String,
) -> Result<bool, String> {
    if tasks.iter().any(|t| t.id == draft.id) {
        apply_details(tasks, &draft.id, title, description, assignee)?;
        return Ok(false);
    }
    if title.trim().is_empty() {
        return Err("Task title cannot be empty".to_string());
    }
    draft.update_details(title, description, assignee);
    tasks.push(draft);
    Ok(true)
}

// In-memory stand-in for a remote status update: wait, then apply
pub async fn update_task_status(
    task_id: String,
    patch: StatusPatch,
    latency_ms: u32,
    tasks_signal: RwSignal<Vec<Task>>,
) -> Result<(), String> {
    logging::info(&format!("update_task_status called: task_id={}, new_status={}", task_id, patch.status.as_str()));

    if latency_ms > 0 {
        TimeoutFuture::new(latency_ms).await;
    }

    tasks_signal
        .try_update(|tasks| apply_status_patch(tasks, &task_id, &patch))
        .unwrap_or_else(|| Err("Task list is no longer available".to_string()))
}

pub fn save_task(
    draft: Task,
    title: String,
    description: String,
    assignee: String,
    tasks_signal: RwSignal<Vec<Task>>,
) {
    let task_id = draft.id.clone();
    let result = tasks_signal
        .try_update(|tasks| upsert_details(tasks, draft, title, description, assignee))
        .unwrap_or_else(|| Err("Task list is no longer available".to_string()));
    match result {
        Ok(true) => logging::info(&format!("Created task {}", task_id)),
        Ok(false) => {}
        Err(e) => logging::error(&format!("Failed to save task {}: {}", task_id, e)),
    }
}

pub fn delete_task(task_id: String, tasks_signal: RwSignal<Vec<Task>>) {
    let result = tasks_signal
        .try_update(|tasks| remove_task(tasks, &task_id))
        .unwrap_or_else(|| Err("Task list is no longer available".to_string()));
    match result {
        Ok(task) => logging::info(&format!("Deleted task {} ({})", task.id, task.title)),
        Err(e) => logging::error(&format!("Failed to delete task: {}", e)),
    }
}
