use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Navbar;
use crate::context::use_auth;
use crate::controllers::LoginForm;
use crate::router::{use_navigator, Route};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();
    let form = RwSignal::new(LoginForm::default());
    auth.clear_error();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if auth.is_loading.get_untracked() {
            return;
        }
        let LoginForm { email, password } = form.get_untracked();
        spawn_local(async move {
            if auth.login(email, password).await.is_ok() {
                navigator.navigate(Route::Dashboard);
            }
        });
    };

    view! {
        <div class="page auth-page">
            <Navbar />
            <div class="auth-card">
                <h1 class="gradient-text">"Welcome Back"</h1>
                <p class="auth-subtitle">"Sign in to your TaskFlow account"</p>
                {move || auth.error.get().map(|message| view! { <div class="alert alert-error">{message}</div> })}
                <form on:submit=submit>
                    <label class="field">
                        <span>"Email Address"</span>
                        <input
                            type="email"
                            required
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            required
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || auth.is_loading.get()>
                        {move || if auth.is_loading.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="/signup" on:click=move |ev| {
                        ev.prevent_default();
                        navigator.navigate(Route::Signup);
                    }>"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
