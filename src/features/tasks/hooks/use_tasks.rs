use std::rc::Rc;

use leptos::prelude::*;
use crate::core::models::{StatusPatch, Task};
use crate::core::services::{StatusUpdateFuture, StatusUpdateHandler};
use crate::features::tasks::services::{delete_task, save_task, seed_tasks, update_task_status};

pub struct TasksHook {
    pub tasks: ReadSignal<Vec<Task>>,
    pub update_status: StatusUpdateHandler,
    // (draft or existing task, title, description, assignee)
    pub save_task: Rc<dyn Fn(Task, String, String, String)>,
    pub delete_task: Rc<dyn Fn(String)>,
}

pub fn use_tasks(latency_ms: u32) -> TasksHook {
    let tasks = RwSignal::new(seed_tasks());

    let update_status: StatusUpdateHandler = Rc::new(move |task_id: String, patch: StatusPatch| -> StatusUpdateFuture {
        Box::pin(update_task_status(task_id, patch, latency_ms, tasks))
    });

    let save_task_fn = Rc::new(move |draft: Task, title: String, description: String, assignee: String| {
        save_task(draft, title, description, assignee, tasks);
    }) as Rc<dyn Fn(Task, String, String, String)>;

    let delete_task_fn = Rc::new(move |task_id: String| {
        delete_task(task_id, tasks);
    }) as Rc<dyn Fn(String)>;

    TasksHook {
        tasks: tasks.read_only(),
        update_status,
        save_task: save_task_fn,
        delete_task: delete_task_fn,
    }
}
