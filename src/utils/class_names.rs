const TEXT_SIZES: &[&str] = &["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl"];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify"];

// Utility groups where a later token overrides an earlier one. Longer prefixes first.
const GROUPS: &[&str] = &[
    "pointer-events", "transition", "duration", "ease", "shadow", "rounded", "opacity", "cursor",
    "px", "py", "pt", "pb", "pl", "pr", "p", "mx", "my", "mt", "mb", "ml", "mr", "m",
    "h", "w", "gap", "bg",
];

// "hover:shadow-lg" -> Some("hover:shadow"); tokens outside the known groups -> None
fn conflict_key(token: &str) -> Option<String> {
    let (variants, utility) = match token.rfind(':') {
        Some(i) => token.split_at(i + 1),
        None => ("", token),
    };

    if let Some(value) = utility.strip_prefix("text-") {
        let group = if TEXT_SIZES.contains(&value) {
            "text-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else {
            "text-color"
        };
        return Some(format!("{}{}", variants, group));
    }

    GROUPS
        .iter()
        .find(|group| utility == **group || utility.starts_with(&format!("{}-", group)))
        .map(|group| format!("{}{}", variants, group))
}

/// Joins a component's base classes with caller-supplied ones.
/// Base tokens come first; empty and repeated tokens are dropped, and a caller token
/// replaces any earlier token from the same utility group (`transition-all` over `transition-shadow`).
pub fn merge_classes(base: &str, extra: &str) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in base.split_whitespace().chain(extra.split_whitespace()) {
        if tokens.contains(&token) {
            continue;
        }
        if let Some(key) = conflict_key(token) {
            tokens.retain(|existing| conflict_key(existing).as_deref() != Some(key.as_str()));
        }
        tokens.push(token);
    }
    tokens.join(" ")
}
