use crate::domain::a001_listing::favorites::use_favorites;
use crate::shared::icons::icon;
use crate::shared::theme::DarkModeToggle;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let favorites = use_favorites();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                {icon("home")}
                <span class="header__title">"SF Stays"</span>
            </div>
            <div class="header__actions">
                <span class="favorites-badge" title="Saved listings">
                    {icon("heart-filled")}
                    <span id="favoriteCount">{move || favorites.count()}</span>
                </span>
                <DarkModeToggle />
            </div>
        </header>
    }
}
