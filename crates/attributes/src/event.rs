//! Action descriptors attached to DOM events.

use serde::{Deserialize, Serialize};

/// Class toggled by [`Action::ShowElement`] and [`Action::HideElement`].
pub const HIDDEN_CLASS: &str = "d-none";

/// Something that happens when an event fires.
///
/// Actions compile to inline script. Several actions registered for the same event run in
/// the order they were applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "action")]
pub enum Action {
    /// Verbatim script.
    Script { code: String },
    /// Reveal the element with the given identifier.
    ShowElement { target: String },
    /// Hide the element with the given identifier.
    HideElement { target: String },
    /// Toggle a class on the element with the given identifier.
    ToggleClass { target: String, class: String },
}

impl Action {
    pub fn script(code: impl Into<String>) -> Self {
        Action::Script { code: code.into() }
    }

    pub fn show(target: impl Into<String>) -> Self {
        Action::ShowElement {
            target: target.into(),
        }
    }

    pub fn hide(target: impl Into<String>) -> Self {
        Action::HideElement {
            target: target.into(),
        }
    }

    pub fn toggle_class(target: impl Into<String>, class: impl Into<String>) -> Self {
        Action::ToggleClass {
            target: target.into(),
            class: class.into(),
        }
    }

    /// The inline script for this action, without a trailing semicolon.
    pub fn compile(&self) -> String {
        match self {
            Action::Script { code } => code.trim().trim_end_matches(';').trim_end().to_string(),
            Action::ShowElement { target } => format!(
                "{}.classList.remove('{}')",
                element_lookup(target),
                HIDDEN_CLASS
            ),
            Action::HideElement { target } => format!(
                "{}.classList.add('{}')",
                element_lookup(target),
                HIDDEN_CLASS
            ),
            Action::ToggleClass { target, class } => format!(
                "{}.classList.toggle('{}')",
                element_lookup(target),
                js_single_quoted(class)
            ),
        }
    }
}

fn element_lookup(target: &str) -> String {
    format!("document.getElementById('{}')", js_single_quoted(target))
}

fn js_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Normalizes an event name: trimmed and lowercased (`Click` -> `click`).
pub fn normalize_event_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
