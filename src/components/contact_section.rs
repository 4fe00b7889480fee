//! Contact Section
//!
//! Contact cards and social links. Fields that are empty render nothing
//! rather than a blank card.

use leptos::prelude::*;

use crate::store::{use_portfolio_store, PortfolioStateStoreFields};

#[component]
pub fn ContactSection() -> impl IntoView {
    let store = use_portfolio_store();
    let contact = move || store.contact().get();

    view! {
        <div class="contact">
            <h2>"Get In Touch"</h2>

            <div class="contact-cards">
                {move || {
                    let info = contact();
                    view! {
                        {(!info.email.is_empty()).then(|| view! {
                            <div class="contact-card">
                                <div class="contact-card-label">"Email"</div>
                                <a href=format!("mailto:{}", info.email)>{info.email.clone()}</a>
                            </div>
                        })}
                        {(!info.phone.is_empty()).then(|| view! {
                            <div class="contact-card">
                                <div class="contact-card-label">"Phone"</div>
                                <a href=format!("tel:{}", info.phone)>{info.phone.clone()}</a>
                            </div>
                        })}
                        {(!info.location.is_empty()).then(|| view! {
                            <div class="contact-card">
                                <div class="contact-card-label">"Location"</div>
                                <span>{info.location.clone()}</span>
                            </div>
                        })}
                    }
                }}
            </div>

            <div class="contact-social">
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
                    let twitter = contact().twitter;
                    (!twitter.is_empty()).then(|| view! {
                        <a href=twitter target="_blank" rel="noopener noreferrer">"Twitter"</a>
                    })
                }}
            </div>
        </div>
    }
}
