//! Dark mode for the whole page.
//!
//! The flag is stored as `"true"`/`"false"` and applied as the `dark-mode`
//! class on `<body>`.

use crate::shared::icons::icon;
use crate::shared::storage::{BrowserStorage, PreferenceStore};
use leptos::prelude::*;
use web_sys::window;

pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Read the stored flag. Only the literal `"true"` enables dark mode.
pub fn load_dark_mode(store: &impl PreferenceStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

pub fn save_dark_mode(store: &impl PreferenceStore, key: &str, enabled: bool) {
    store.set(key, if enabled { "true" } else { "false" });
}

/// Icon shown on the toggle: the mode you would switch to.
pub fn toggle_icon(enabled: bool) -> &'static str {
    if enabled {
        "sun"
    } else {
        "moon"
    }
}

/// Apply the mode as a class on `<body>`.
fn apply_body_class(enabled: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if body
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, enabled)
        .is_err()
    {
        log::warn!("could not update body class");
    }
}

/// Dark mode context type.
#[derive(Clone, Copy)]
pub struct DarkModeContext {
    pub enabled: RwSignal<bool>,
    storage_key: StoredValue<String>,
}

impl DarkModeContext {
    /// Flip the mode, persist it and restyle the page.
    pub fn toggle(&self) {
        let enabled = !self.enabled.get_untracked();
        self.enabled.set(enabled);
        self.storage_key
            .with_value(|key| save_dark_mode(&BrowserStorage, key, enabled));
        apply_body_class(enabled);
    }
}

/// Provides dark mode context to children components.
#[component]
pub fn DarkModeProvider(storage_key: String, children: Children) -> impl IntoView {
    let initial = load_dark_mode(&BrowserStorage, &storage_key);
    apply_body_class(initial);

    provide_context(DarkModeContext {
        enabled: RwSignal::new(initial),
        storage_key: StoredValue::new(storage_key),
    });

    children()
}

/// Hook to use the dark mode context.
pub fn use_dark_mode() -> DarkModeContext {
    use_context::<DarkModeContext>()
        .expect("DarkModeContext not found. Wrap your app with DarkModeProvider.")
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_dark_mode();

    view! {
        <button
            id="darkModeToggle"
            class="top-header-icon-btn"
            title="Toggle dark mode"
            on:click=move |_| ctx.toggle()
        >
            {move || icon(toggle_icon(ctx.enabled.get()))}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn test_load_dark_mode() {
        assert!(load_dark_mode(&MemoryStore::with_entry("darkMode", "true"), "darkMode"));
        assert!(!load_dark_mode(&MemoryStore::with_entry("darkMode", "false"), "darkMode"));
        assert!(!load_dark_mode(&MemoryStore::with_entry("darkMode", "yes"), "darkMode"));
        assert!(!load_dark_mode(&MemoryStore::default(), "darkMode"));
    }

    #[test]
    fn test_save_round_trips_literal_strings() {
        let store = MemoryStore::default();
        save_dark_mode(&store, "darkMode", true);
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));
        save_dark_mode(&store, "darkMode", false);
        assert_eq!(store.get("darkMode").as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_icon() {
        assert_eq!(toggle_icon(false), "moon");
        assert_eq!(toggle_icon(true), "sun");
    }
}
