use leptos::callback::{Callable, UnsyncCallback};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use crate::utils::merge_classes;

const BADGE: &str = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    React,
    Maintain,
    Improve,
    Todo,
    Progress,
    Done,
}

impl BadgeVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-slate-100 text-slate-700",
            BadgeVariant::React => "bg-sky-100 text-sky-700",
            BadgeVariant::Maintain => "bg-amber-100 text-amber-700",
            BadgeVariant::Improve => "bg-violet-100 text-violet-700",
            BadgeVariant::Todo => "bg-slate-200 text-slate-800",
            BadgeVariant::Progress => "bg-blue-100 text-blue-700",
            BadgeVariant::Done => "bg-green-100 text-green-700",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: Signal<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<UnsyncCallback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let base = format!("{} {}", BADGE, variant.classes());
    let handle_click = move |ev: MouseEvent| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(cb) = on_click.as_ref() {
            cb.run(ev);
        }
    };

    view! {
        <span
            class=move || class.with(|extra| merge_classes(&base, extra))
            aria-disabled=move || disabled.get().to_string()
            on:click=handle_click
        >
            {children()}
        </span>
    }
}
