use leptos::prelude::*;
use crate::utils::merge_classes;

// Style-only slots. Extra HTML attributes reach the root element through
// attribute spreading at the call site: `<Card {..} data-id=id>`.

const CARD: &str = "rounded-lg border border-slate-200 bg-white shadow-card hover:shadow-lg transition-shadow duration-200";
const CARD_HEADER: &str = "flex flex-col space-y-1.5 p-3 pb-1";
const CARD_TITLE: &str = "text-2xl font-semibold leading-none tracking-tight";
const CARD_DESCRIPTION: &str = "text-sm text-slate-500";
const CARD_CONTENT: &str = "p-3 pt-0";
const CARD_FOOTER: &str = "flex items-center p-6 pt-0";

#[component]
pub fn Card(#[prop(optional, into)] class: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <div class=move || class.with(|extra| merge_classes(CARD, extra))>{children()}</div>
    }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <div class=move || class.with(|extra| merge_classes(CARD_HEADER, extra))>{children()}</div>
    }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <h3 class=move || class.with(|extra| merge_classes(CARD_TITLE, extra))>{children()}</h3>
    }
}

#[component]
pub fn CardDescription(#[prop(optional, into)] class: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <p class=move || class.with(|extra| merge_classes(CARD_DESCRIPTION, extra))>{children()}</p>
    }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <div class=move || class.with(|extra| merge_classes(CARD_CONTENT, extra))>{children()}</div>
    }
}

#[component]
pub fn CardFooter(#[prop(optional, into)] class: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <div class=move || class.with(|extra| merge_classes(CARD_FOOTER, extra))>{children()}</div>
    }
}
