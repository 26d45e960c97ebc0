use leptos::callback::{Callable, UnsyncCallback};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use crate::utils::merge_classes;

const BUTTON: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "bg-blue-600 text-white hover:bg-blue-700",
        ButtonVariant::Secondary => "border border-slate-300 bg-white text-slate-700 hover:bg-slate-50",
        ButtonVariant::Ghost => "text-slate-600 hover:bg-slate-100",
    };
    let size = match size {
        ButtonSize::Default => "h-9 px-4 py-2",
        ButtonSize::Icon => "h-9 w-9",
    };
    format!("{} {} {}", BUTTON, variant, size)
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: Signal<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] submit: bool,
    #[prop(optional)] on_click: Option<UnsyncCallback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let base = button_classes(variant, size);
    let button_type = if submit { "submit" } else { "button" };
    let handle_click = move |ev: MouseEvent| {
        if let Some(cb) = on_click.as_ref() {
            cb.run(ev);
        }
    };

    view! {
        <button
            type=button_type
            class=move || class.with(|extra| merge_classes(&base, extra))
            disabled=move || disabled.get()
            on:click=handle_click
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_ghost_button_is_square_and_borderless() {
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Icon);
        assert!(classes.contains("h-9 w-9"));
        assert!(!classes.contains("border"));
    }
}
