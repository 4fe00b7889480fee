//! Login Form
//!
//! Admin login screen shown while the auth gate is closed.

use leptos::prelude::*;

use crate::auth::{AuthContext, DEMO_EMAIL, DEMO_PASSWORD};
use crate::context::AppContext;

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_context::<AuthContext>().expect("AuthContext should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (failed, set_failed) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ok = auth.login(email.get().trim(), password.get().trim());
        set_failed.set(!ok);
    };

    view! {
        <div class="login-screen">
            <form class="login-form" on:submit=on_submit>
                <h1>"Admin Login"</h1>
                <p class="login-hint">
                    {format!("Demo access: {} / {}", DEMO_EMAIL, DEMO_PASSWORD)}
                </p>

                <Show when=move || failed.get()>
                    <p class="login-error">"Invalid email or password."</p>
                </Show>

                <label>"Email"</label>
                <input
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label>"Password"</label>
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" class="btn primary">"Sign In"</button>
                <button type="button" class="btn ghost" on:click=move |_| ctx.back_to_portfolio()>
                    "Back to site"
                </button>
            </form>
        </div>
    }
}
