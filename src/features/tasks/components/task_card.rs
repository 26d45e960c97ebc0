use std::fmt::Write;
use std::rc::Rc;

use chrono::{NaiveDate, Utc};
use leptos::callback::{Callable, UnsyncCallback};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, Icon, IconName};
use crate::core::models::{due_urgency, BoardSettings, Task};
use crate::core::services::{plan_status_change, run_status_update, RequestState, StatusControl, StatusUpdateHandler, UpdateOutcome};
use crate::features::tasks::services::{status_variant, type_variant};

pub fn card_class(completed: bool, pending: bool) -> String {
    let mut class = String::from("hover:shadow-xl transition-all duration-300 transform hover:scale-[1.02]");
    if completed {
        class.push_str(" opacity-75");
    }
    if pending {
        class.push_str(" pointer-events-none");
    }
    class
}

pub fn checkbox_class(completed: bool, pending: bool) -> String {
    let fill = if completed {
        "bg-green-500 border-green-500 text-white"
    } else {
        "border-slate-300 hover:border-green-400"
    };
    let interaction = if pending { "opacity-50 cursor-not-allowed" } else { "hover:bg-green-50" };
    format!(
        "flex-shrink-0 w-5 h-5 rounded border-2 flex items-center justify-center transition-colors {} {}",
        fill, interaction
    )
}

pub fn title_class(completed: bool) -> &'static str {
    if completed {
        "font-semibold mb-2 transition-all text-slate-500 line-through"
    } else {
        "font-semibold mb-2 transition-all text-slate-800"
    }
}

pub fn description_class(completed: bool) -> &'static str {
    if completed {
        "text-sm mb-4 line-clamp-2 transition-all text-slate-400 line-through"
    } else {
        "text-sm mb-4 line-clamp-2 transition-all text-slate-600"
    }
}

// Re-enables clicks on edit and delete inside a card that is pointer-events-none while pending
pub fn action_group_class() -> &'static str {
    "flex items-center gap-1 ml-2 pointer-events-auto"
}

fn status_badge_class(pending: bool) -> String {
    if pending {
        "transition-all opacity-50 cursor-not-allowed".to_string()
    } else {
        "transition-all cursor-pointer hover:shadow-md".to_string()
    }
}

/// "Due Jan 12, 2024". Falls back to ISO dates when the configured format is invalid.
pub fn format_due_date(due: NaiveDate, format: &str) -> String {
    let mut out = String::from("Due ");
    if write!(out, "{}", due.format(format)).is_err() {
        return format!("Due {}", due.format("%Y-%m-%d"));
    }
    out
}

#[component]
pub fn TaskCard(
    task: Task,
    on_edit: Rc<dyn Fn(Task)>,
    on_delete: Rc<dyn Fn(Task)>,
    #[prop(optional)] on_status_update: Option<StatusUpdateHandler>,
    // Optional sink for failed updates; the card itself only logs them
    #[prop(optional)] on_status_error: Option<Rc<dyn Fn(String)>>,
) -> impl IntoView {
    let settings = use_context::<BoardSettings>().unwrap_or_default();
    let request_state = RwSignal::new(RequestState::Idle);
    let pending = Signal::derive(move || request_state.get() == RequestState::Pending);
    let completed = task.is_completed();

    let change_status = UnsyncCallback::new({
        let task_id = task.id.clone();
        let current = task.status.clone();
        move |control: StatusControl| {
            let Some((handler, next)) = plan_status_change(on_status_update.as_ref(), &request_state, control, &current) else {
                return;
            };
            let task_id = task_id.clone();
            let on_status_error = on_status_error.clone();
            spawn_local(async move {
                if let UpdateOutcome::Failed(e) = run_status_update(&request_state, &handler, task_id, next).await {
                    if let Some(report) = on_status_error {
                        report(e);
                    }
                }
            });
        }
    });

    let cycle_status = {
        let change_status = change_status.clone();
        UnsyncCallback::new(move |_: MouseEvent| change_status.run(StatusControl::Cycle))
    };

    let quick_complete = UnsyncCallback::new(move |ev: MouseEvent| {
        ev.stop_propagation();
        change_status.run(StatusControl::QuickComplete);
    });

    let edit = {
        let task = task.clone();
        UnsyncCallback::new(move |_: MouseEvent| on_edit(task.clone()))
    };

    let delete = {
        let task = task.clone();
        UnsyncCallback::new(move |_: MouseEvent| on_delete(task.clone()))
    };

    let urgency = due_urgency(task.due_date, completed, Utc::now(), settings.near_due_days);
    let due_label = format_due_date(task.due_date, &settings.date_format);
    let status_label = task.status.as_str().to_string();
    let muted_row = if completed { "text-slate-400" } else { "text-slate-600" };

    view! {
        <Card class=Signal::derive(move || card_class(completed, pending.get())) {..} data-task-id=task.id.clone()>
            <CardHeader class="pb-3">
                <div class="flex items-start justify-between">
                    <div class="flex items-center gap-3 flex-1">
                        <button
                            type="button"
                            class=move || checkbox_class(completed, pending.get())
                            disabled=move || pending.get()
                            on:click=move |ev| quick_complete.run(ev)
                        >
                            {completed.then(|| view! { <Icon name=IconName::Check class="h-3 w-3" /> })}
                        </button>

                        <div class="flex-1">
                            <h3 class=title_class(completed)>{task.title.clone()}</h3>
                            <div class="flex items-center gap-2">
                                <Badge variant=type_variant(&task.task_type)>
                                    {task.task_type.as_str().to_string()}
                                </Badge>
                                <Badge
                                    variant=status_variant(&task.status)
                                    class=Signal::derive(move || status_badge_class(pending.get()))
                                    disabled=pending
                                    on_click=cycle_status
                                >
                                    {move || {
                                        if pending.get() {
                                            view! {
                                                <span class="flex items-center gap-1">
                                                    <Icon name=IconName::Loader class="h-3 w-3" />
                                                    <span>"Updating..."</span>
                                                </span>
                                            }
                                                .into_any()
                                        } else {
                                            status_label.clone().into_any()
                                        }
                                    }}
                                </Badge>
                            </div>
                        </div>
                    </div>

                    <div class=action_group_class()>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            class="h-8 w-8 hover:bg-blue-50 hover:text-blue-600"
                            on_click=edit
                        >
                            <Icon name=IconName::Edit class="h-4 w-4" />
                        </Button>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            class="h-8 w-8 hover:bg-red-50 hover:text-red-600"
                            on_click=delete
                        >
                            <Icon name=IconName::Trash class="h-4 w-4" />
                        </Button>
                    </div>
                </div>
            </CardHeader>

            <CardContent class="pt-0">
                <p class=description_class(completed)>{task.description.clone()}</p>

                <div class="space-y-2">
                    <div class=format!("flex items-center text-sm transition-all {}", muted_row)>
                        <Icon name=IconName::User class="h-4 w-4 mr-2" />
                        <span>{task.assignee.clone()}</span>
                    </div>
                    <div class=format!("flex items-center text-sm {}", urgency.text_class())>
                        <Icon name=IconName::Calendar class="h-4 w-4 mr-2" />
                        <span>{due_label}</span>
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}
