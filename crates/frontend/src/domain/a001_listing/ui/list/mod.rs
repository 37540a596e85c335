pub mod state;

use self::state::{create_state, LoadState};
use crate::domain::a001_listing::api::fetch_listings;
use crate::domain::a001_listing::favorites::use_favorites;
use crate::domain::a001_listing::ui::card::view_model::ListingsView;
use crate::domain::a001_listing::ui::card::{ListingCard, FAVORITE_ATTR};
use crate::domain::a001_listing::ui::filters::{NeighbourhoodSelect, PriceSortSelect, SearchInput};
use contracts::domain::a001_listing::{Catalog, ListingId, PriceSort};
use contracts::shared::config::CatalogConfig;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Listing id of the favorite button the click landed on, if any.
fn favorite_target(ev: &MouseEvent) -> Option<ListingId> {
    let target: web_sys::Element = ev.target()?.dyn_into().ok()?;
    let button = target.closest(&format!("[{}]", FAVORITE_ATTR)).ok()??;
    ListingId::from_attr(&button.get_attribute(FAVORITE_ATTR)?)
}

#[component]
#[allow(non_snake_case)]
pub fn ListingCatalog() -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let favorites = use_favorites();
    let state = create_state();
    let (catalog, set_catalog) = signal(Catalog::default());
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let dataset_url = StoredValue::new(config.dataset.url.clone());

    let load = move || {
        set_load_state.set(LoadState::Loading);
        let url = dataset_url.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_listings(&url).await {
                Ok(listings) => {
                    log::info!("loaded {} listings from {}", listings.len(), url);
                    set_catalog.set(Catalog::new(listings));
                    set_load_state.set(LoadState::Loaded);
                }
                Err(e) => {
                    log::error!("failed to load listings from {}: {}", url, e);
                    set_catalog.set(Catalog::default());
                    set_load_state.set(LoadState::Failed(e));
                }
            }
        });
    };

    load();

    let neighbourhoods = Memo::new(move |_| catalog.with(|c| c.neighbourhood_options()));

    let visible = Memo::new(move |_| {
        let criteria = state.with(|s| s.criteria());
        catalog.with(|c| c.recompute(&criteria))
    });

    let listings_count =
        move || load_state.with(|s| s.listings_count(visible.with(|v| v.len())));

    // One listener for every favorite button in the grid.
    let on_grid_click = move |ev: MouseEvent| {
        if let Some(id) = favorite_target(&ev) {
            favorites.toggle(id);
        }
    };

    let render_listings = move || match load_state.get() {
        LoadState::Loading => view! {
            <div class="loading-state" style="grid-column: 1/-1;">
                <div class="spinner-border" role="status"></div>
                <p>"Loading listings..."</p>
            </div>
        }
        .into_any(),
        LoadState::Failed(e) => view! {
            <div class="error-state" style="grid-column: 1/-1;">
                <p>{e.user_message()}</p>
                <button class="btn btn-primary mt-3" on:click=move |_| load()>"Retry"</button>
            </div>
        }
        .into_any(),
        LoadState::Loaded => match ListingsView::from_listings(&visible.get()) {
            ListingsView::NoResults => view! {
                <div class="error-state" style="grid-column: 1/-1;">
                    <p>"No listings found. Try a different search."</p>
                </div>
            }
            .into_any(),
            ListingsView::Cards(cards) => cards
                .into_iter()
                .map(|card| view! { <ListingCard card=card /> })
                .collect_view()
                .into_any(),
        },
    };

    view! {
        <section class="catalog">
            <div class="catalog-toolbar">
                <SearchInput
                    debounce_ms=config.search.debounce_ms
                    on_change=move |term: String| state.update(|s| s.search = term)
                />
                <NeighbourhoodSelect
                    options=neighbourhoods
                    on_change=move |n: String| state.update(|s| s.neighbourhood = n)
                />
                <PriceSortSelect on_change=move |sort: PriceSort| state.update(|s| s.price_sort = sort) />
                <span class="listings-count">
                    <span id="listingsCount">{listings_count}</span>
                    " stays"
                </span>
            </div>

            <div id="listings" class="listings-grid" on:click=on_grid_click>
                {render_listings}
            </div>
        </section>
    }
}
