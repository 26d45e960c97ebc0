use std::rc::Rc;

use chrono::{Days, Utc};
use leptos::callback::UnsyncCallback;
use leptos::ev::MouseEvent;
use leptos::html::Dialog;
use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Card, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::core::models::{BoardSettings, Task, TaskType};
use crate::core::services::StatusUpdateHandler;
use crate::features::tasks::components::{EditTaskModal, TaskCard};
use crate::features::tasks::hooks::{use_tasks, TasksHook};

// Non-Send callbacks parked in a local StoredValue so reactive closures can reach them
#[derive(Clone)]
struct BoardHandlers {
    edit: Rc<dyn Fn(Task)>,
    delete: Rc<dyn Fn(Task)>,
    update_status: StatusUpdateHandler,
    report_status_error: Rc<dyn Fn(String)>,
    save_task: Rc<dyn Fn(Task, String, String, String)>,
    close_editor: Rc<dyn Fn()>,
}

// Opened in the editor; only joins the list once saved
fn draft_task() -> Task {
    let today = Utc::now().date_naive();
    let due = today.checked_add_days(Days::new(7)).unwrap_or(today);
    Task::new("New task".to_string(), String::new(), String::new(), TaskType::React, due)
}

fn confirm_delete(task: &Task) -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message(&format!("Delete \"{}\"? This cannot be undone.", task.title))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[component]
pub fn TaskBoard() -> impl IntoView {
    let settings = use_context::<BoardSettings>().unwrap_or_default();
    let TasksHook { tasks, update_status, save_task, delete_task } = use_tasks(settings.simulated_latency_ms);

    let (editing_task, set_editing_task) = signal::<Option<Task>>(None);
    let (status_error, set_status_error) = signal::<Option<String>>(None);
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // The dialog only exists once a task is picked, so open it when the node mounts
    Effect::new(move |_| {
        if editing_task.with(|t| t.is_some()) {
            if let Some(dialog) = edit_dialog_ref.get() {
                let _ = dialog.show_modal();
            }
        }
    });

    let handlers = StoredValue::new_local(BoardHandlers {
        edit: Rc::new(move |task: Task| set_editing_task.set(Some(task))),
        delete: Rc::new(move |task: Task| {
            if confirm_delete(&task) {
                delete_task(task.id);
            }
        }),
        update_status,
        report_status_error: Rc::new(move |message: String| set_status_error.set(Some(message))),
        save_task,
        close_editor: Rc::new(move || set_editing_task.set(None)),
    });

    let new_task = UnsyncCallback::new(move |_: MouseEvent| set_editing_task.set(Some(draft_task())));

    view! {
        <section class="space-y-4">
            <header class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-semibold text-slate-800">"Tasks"</h1>
                    <span class="text-sm text-slate-500">
                        {move || tasks.with(|tasks| format!("{} total", tasks.len()))}
                    </span>
                </div>
                <Button on_click=new_task>"Add task"</Button>
            </header>

            {move || {
                status_error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="flex items-center justify-between rounded-md border border-red-200 bg-red-50 px-4 py-2 text-sm text-red-700">
                                <span>{format!("Status update failed: {}", message)}</span>
                                <Button
                                    variant=ButtonVariant::Ghost
                                    class="h-7 px-2 text-red-700"
                                    on_click=UnsyncCallback::new(move |_: MouseEvent| set_status_error.set(None))
                                >
                                    "Dismiss"
                                </Button>
                            </div>
                        }
                    })
            }}

            <Show when=move || tasks.with(|tasks| tasks.is_empty())>
                <Card class="border-dashed">
                    <CardHeader>
                        <CardTitle class="text-lg">"Nothing to do"</CardTitle>
                        <CardDescription>"Every task has been deleted."</CardDescription>
                    </CardHeader>
                    <CardFooter class="pt-2">
                        <Button variant=ButtonVariant::Secondary on_click=new_task>"Add one"</Button>
                    </CardFooter>
                </Card>
            </Show>

            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                <For each=move || tasks.get() key=|task| task.clone() let:task>
                    {
                        let handlers = handlers.get_value();
                        view! {
                            <TaskCard
                                task=task
                                on_edit=handlers.edit
                                on_delete=handlers.delete
                                on_status_update=handlers.update_status
                                on_status_error=handlers.report_status_error
                            />
                        }
                    }
                </For>
            </div>

            {move || {
                editing_task
                    .get()
                    .map(|task| {
                        let handlers = handlers.get_value();
                        view! {
                            <EditTaskModal
                                task=task
                                on_save=handlers.save_task
                                on_close=handlers.close_editor
                                dialog_ref=edit_dialog_ref
                            />
                        }
                    })
            }}
        </section>
    }
}
