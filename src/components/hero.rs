//! Hero Banner
//!
//! Landing section showing the owner's title and pitch, with contact links.

use leptos::prelude::*;

use crate::context::{AppContext, Section};
use crate::store::{use_portfolio_store, PortfolioStateStoreFields};

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_portfolio_store();

    let about = move || store.about().get();
    let contact = move || store.contact().get();

    view! {
        <div class="hero">
            <div class="hero-avatar">"P"</div>
            <h1 class="hero-title">{move || about().title}</h1>
            <p class="hero-tagline">{move || about().description}</p>

            <div class="hero-actions">
                <button class="btn primary" on:click=move |_| ctx.go_to_section(Section::Projects)>
                    "View My Work"
                </button>
                {move || {
                    let email = contact().email;
                    (!email.is_empty()).then(|| view! {
                        <a class="btn outline" href=format!("mailto:{}", email)>
                            "Get In Touch"
                        </a>
                    })
                }}
            </div>

            <div class="hero-social">
                {move || {
                    let github = contact().github;
                    (!github.is_empty()).then(|| view! {
                        <a href=github target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    })
                }}
                {move || {
                    let linkedin = contact().linkedin;
                    (!linkedin.is_empty()).then(|| view! {
                        <a href=linkedin target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                    })
                }}
                {move || {
                    let email = contact().email;
                    (!email.is_empty()).then(|| view! {
                        <a href=format!("mailto:{}", email)>"Email"</a>
                    })
                }}
            </div>
        </div>
    }
}
