use std::rc::Rc;

use leptos::callback::UnsyncCallback;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use crate::components::{Button, ButtonVariant};
use crate::core::models::Task;

#[component]
pub fn EditTaskModal(
    #[prop(into)] task: Task,
    on_save: Rc<dyn Fn(Task, String, String, String)>, // task, title, description, assignee
    on_close: Rc<dyn Fn()>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone());
    let (assignee, set_assignee) = signal(task.assignee.clone());

    let original = task.clone();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_save(original.clone(), title.get_untracked(), description.get_untracked(), assignee.get_untracked());
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Closing without saving puts the fields back the way they were
    let close_modal = UnsyncCallback::new(move |_: MouseEvent| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
        set_title.set(task.title.clone());
        set_description.set(task.description.clone());
        set_assignee.set(task.assignee.clone());
    });

    view! {
        <dialog
            node_ref=dialog_ref
            class="rounded-lg p-0 shadow-xl backdrop:bg-slate-900/40"
            on:close=move |_| on_close()
        >
            <form class="w-96 space-y-4 p-6" on:submit=handle_submit>
                <h3 class="text-lg font-semibold text-slate-800">"Edit task"</h3>
                <label class="block text-sm text-slate-600">
                    "Title"
                    <input
                        type="text"
                        class="mt-1 w-full rounded-md border border-slate-300 px-3 py-2"
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        prop:value=move || title.get()
                        required
                    />
                </label>
                <label class="block text-sm text-slate-600">
                    "Description"
                    <textarea
                        rows="3"
                        class="mt-1 w-full rounded-md border border-slate-300 px-3 py-2"
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        prop:value=move || description.get()
                    ></textarea>
                </label>
                <label class="block text-sm text-slate-600">
                    "Assignee"
                    <input
                        type="text"
                        class="mt-1 w-full rounded-md border border-slate-300 px-3 py-2"
                        on:input=move |ev| set_assignee.set(event_target_value(&ev))
                        prop:value=move || assignee.get()
                    />
                </label>
                <div class="flex justify-end gap-2">
                    <Button variant=ButtonVariant::Secondary on_click=close_modal>
                        "Cancel"
                    </Button>
                    <Button submit=true>"Save"</Button>
                </div>
            </form>
        </dialog>
    }
}
