//! Catalog toolbar controls.

use crate::shared::icons::icon;
use crate::shared::timer::{BrowserScheduler, Debouncer};
use contracts::domain::a001_listing::PriceSort;
use leptos::prelude::*;

/// Search box that reports its value after `debounce_ms` of inactivity.
#[component]
pub fn SearchInput(
    /// Callback receiving the settled search text
    #[prop(into)]
    on_change: Callback<String>,
    debounce_ms: u32,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search by name, description or neighborhood...".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(String::new());
    let debouncer = StoredValue::new_local(Debouncer::new(BrowserScheduler, debounce_ms));

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debouncer.with_value(|d| d.call(move || on_change.run(new_value)));
    };

    let clear_filter = move |_| {
        debouncer.with_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-box">
            <span class="search-icon">{icon("search")}</span>
            <input
                id="searchInput"
                type="text"
                class="form-control"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-clear" on:click=clear_filter title="Clear">
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[component]
pub fn NeighbourhoodSelect(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id="neighborhoodFilter"
            class="form-select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"All neighborhoods"</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|n| view! { <option value=n.clone()>{n.clone()}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn PriceSortSelect(#[prop(into)] on_change: Callback<PriceSort>) -> impl IntoView {
    view! {
        <select
            id="priceSort"
            class="form-select"
            on:change=move |ev| on_change.run(PriceSort::from_str(&event_target_value(&ev)))
        >
            {PriceSort::all()
                .into_iter()
                .map(|sort| view! { <option value=sort.as_str()>{sort.display_name()}</option> })
                .collect_view()}
        </select>
    }
}
