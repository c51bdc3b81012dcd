//! Navbar Component
//!
//! Brand, theme toggle and the signed-in user's menu.

use leptos::prelude::*;

use crate::context::use_auth;
use crate::models::User;
use crate::router::{use_navigator, Route};
use crate::theme::{use_theme, ThemeMode};

#[component]
pub fn Navbar(#[prop(optional)] show_user_menu: bool) -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);

    let initial = move || auth.session.with(|s| s.user.as_ref().map(User::initial).unwrap_or_else(|| "U".to_string()));
    let email = move || auth.session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    let logout = move |_: web_sys::MouseEvent| {
        set_menu_open.set(false);
        auth.logout();
        navigator.navigate(Route::Login);
    };

    view! {
        <header class="navbar">
            <button class="brand" on:click=move |_| navigator.navigate(Route::Landing)>
                <span class="brand-mark">"✓"</span>
                <span class="brand-name">"TaskFlow"</span>
            </button>
            <div class="navbar-actions">
                <button
                    class="icon-btn theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || match theme.mode.get() {
                        ThemeMode::Dark => "☀",
                        ThemeMode::Light => "☾",
                    }}
                </button>
                <Show when=move || show_user_menu && auth.session.with(|s| s.user.is_some())>
                    <div class="user-menu">
                        <button class="avatar" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                            {initial}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="menu-backdrop" on:click=move |_| set_menu_open.set(false)></div>
                            <div class="menu">
                                <div class="menu-item disabled">{email}</div>
                                <button class="menu-item" on:click=logout>"Logout"</button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        </header>
    }
}
