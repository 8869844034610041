//! 出品一覧の入れ物

use leptos::prelude::*;
use moving_sale_common::Role;

#[component]
pub fn ItemsGrid() -> impl IntoView {
    view! {
        <main class="items-grid" data-role=Role::ItemsGrid.as_str()>
            <p class="text-muted">"Loading items…"</p>
        </main>
    }
}
