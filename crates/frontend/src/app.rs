use crate::domain::a001_listing::favorites::FavoritesContext;
use crate::domain::a001_listing::ui::list::ListingCatalog;
use crate::layout::Shell;
use crate::shared::theme::DarkModeProvider;
use contracts::shared::config::{load_config, CatalogConfig};
use leptos::prelude::*;

/// Id of an optional `<script type="application/toml">` element overriding
/// the embedded configuration.
const CONFIG_ELEMENT_ID: &str = "catalog-config";

fn page_config() -> CatalogConfig {
    let override_toml = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());
    load_config(override_toml.as_deref())
}

#[component]
pub fn App() -> impl IntoView {
    let config = page_config();

    // Favorites are read once here and shared with the header and the cards.
    provide_context(FavoritesContext::new(&config.storage.favorites_key));
    provide_context(config.clone());

    view! {
        <DarkModeProvider storage_key=config.storage.dark_mode_key.clone()>
            <Shell>
                <ListingCatalog />
            </Shell>
        </DarkModeProvider>
    }
}
