use leptos::prelude::*;

use crate::components::Navbar;
use crate::router::{use_navigator, Route};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <div class="page">
            <Navbar show_user_menu=true />
            <div class="empty-state not-found">
                <h1>"404"</h1>
                <p>"The page you are looking for does not exist."</p>
                <button class="btn btn-primary" on:click=move |_| navigator.navigate(Route::Landing)>
                    "Back to Home"
                </button>
            </div>
        </div>
    }
}
