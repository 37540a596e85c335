pub mod view_model;

use self::view_model::{favorite_button_state, ListingCardViewModel};
use crate::domain::a001_listing::favorites::use_favorites;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Attribute carrying the listing id on favorite buttons. Clicks are
/// dispatched by the listings container, not by the button.
pub const FAVORITE_ATTR: &str = "data-listing-id";

#[component]
#[allow(non_snake_case)]
pub fn ListingCard(card: ListingCardViewModel) -> impl IntoView {
    let favorites = use_favorites();
    let picture = RwSignal::new(card.picture.clone());
    let host_picture = RwSignal::new(card.host_picture.clone());

    // Listings without an id cannot be favorited.
    let favorite_button = card.id.clone().map(|id| {
        let id_attr = id.to_attr();
        let state = Signal::derive(move || favorite_button_state(favorites.is_favorite(&id)));
        view! {
            <button class=move || state.get().0 data-listing-id=id_attr title="Save">
                {move || icon(state.get().1)}
            </button>
        }
    });

    view! {
        <div class="listing-card">
            <div class="card-image">
                <img
                    src=move || picture.with(|p| p.src().to_string())
                    alt=card.picture_alt
                    loading="lazy"
                    on:error=move |_| {
                        let mut next = picture.get_untracked();
                        if next.on_error() {
                            picture.set(next);
                        }
                    }
                />
                {favorite_button}
            </div>

            <div class="card-content">
                <div class="card-header">
                    <span class="card-location">{card.location}</span>
                    <span class="card-rating">
                        {icon("star")}
                        " "
                        {card.rating}
                    </span>
                </div>

                <h3 class="card-title">{card.title}</h3>

                <p class="card-details">{card.details}</p>

                <div class="card-amenities">
                    {card
                        .amenities
                        .into_iter()
                        .map(|amenity| view! { <span class="amenity-tag">{amenity}</span> })
                        .collect_view()}
                </div>

                <div class="card-footer">
                    <div class="host-info">
                        <img
                            src=move || host_picture.with(|p| p.src().to_string())
                            alt=card.host_name.clone()
                            class="host-photo"
                            on:error=move |_| {
                                let mut next = host_picture.get_untracked();
                                if next.on_error() {
                                    host_picture.set(next);
                                }
                            }
                        />
                        <span class="host-name">{card.host_name}</span>
                    </div>
                    <div class="card-price">{card.price}<span>"/night"</span></div>
                </div>
            </div>
        </div>
    }
}
