pub mod header;

use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, favorites, dark mode)    |
/// +------------------------------------------+
/// |  Content                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main container">
                {children()}
            </main>
        </div>
    }
}
