use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Navbar;
use crate::context::use_auth;
use crate::controllers::SignupForm;
use crate::router::{use_navigator, Route};

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();
    let form = RwSignal::new(SignupForm::default());
    auth.clear_error();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if auth.is_loading.get_untracked() {
            return;
        }
        let form = form.get_untracked();
        spawn_local(async move {
            if auth.register(form).await.is_ok() {
                navigator.navigate(Route::Dashboard);
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&SignupForm) -> String, set: fn(&mut SignupForm, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="page auth-page">
            <Navbar />
            <div class="auth-card">
                <h1 class="gradient-text">"Create Account"</h1>
                <p class="auth-subtitle">"Start organizing your work with TaskFlow"</p>
                {move || auth.error.get().map(|message| view! { <div class="alert alert-error">{message}</div> })}
                <form on:submit=submit novalidate>
                    {field("Full Name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {field("Email Address", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field("Confirm Password", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || auth.is_loading.get()>
                        {move || if auth.is_loading.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="/login" on:click=move |ev| {
                        ev.prevent_default();
                        navigator.navigate(Route::Login);
                    }>"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
