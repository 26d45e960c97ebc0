use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Check,
    Loader,
    Edit,
    Trash,
    User,
    Calendar,
}

impl IconName {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconName::Check => "✓",
            IconName::Loader => "⟳",
            IconName::Edit => "✎",
            IconName::Trash => "🗑",
            IconName::User => "👤",
            IconName::Calendar => "📅",
        }
    }
}

#[component]
pub fn Icon(name: IconName, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if name == IconName::Loader {
        format!("inline-flex items-center justify-center animate-spin {}", class)
    } else {
        format!("inline-flex items-center justify-center {}", class)
    };
    view! { <span class=class aria-hidden="true">{name.glyph()}</span> }
}
