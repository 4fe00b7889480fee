//! Contact Manager
//!
//! Editor form for the contact singleton: reachability details and social
//! profiles, with a live preview of the draft.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{SAVE_DELAY_MS, SUCCESS_FLASH_MS};
use crate::store::{store_update_contact, use_portfolio_store, PortfolioStateStoreFields};

#[component]
pub fn ContactManager() -> impl IntoView {
    let store = use_portfolio_store();

    let draft = RwSignal::new(store.contact().get_untracked());
    let (saving, set_saving) = signal(false);
    let (saved, set_saved) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = draft.get().to_patch();
        set_saving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SAVE_DELAY_MS).await;
            store_update_contact(&store, patch);
            set_saving.set(false);
            set_saved.set(true);
            TimeoutFuture::new(SUCCESS_FLASH_MS).await;
            set_saved.set(false);
        });
    };

    view! {
        <div class="manager">
            <h1>"Contact Information"</h1>
            <p class="admin-subtitle">"Manage contact details and social media links."</p>

            <Show when=move || saved.get()>
                <div class="save-banner">"Contact information updated."</div>
            </Show>

            <form class="manager-form" on:submit=on_submit>
                <div class="form-row">
                    <div>
                        <label>"Email Address"</label>
                        <input
                            type="email"
                            placeholder="your.email@example.com"
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label>"Phone Number"</label>
                        <input
                            type="tel"
                            placeholder="+1 (555) 123-4567"
                            prop:value=move || draft.get().phone
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                    </div>
                </div>

                <label>"Location"</label>
                <input
                    type="text"
                    placeholder="City, Country"
                    prop:value=move || draft.get().location
                    on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                />

                <label>"LinkedIn Profile"</label>
                <input
                    type="url"
                    placeholder="https://linkedin.com/in/username"
                    prop:value=move || draft.get().linkedin
                    on:input=move |ev| draft.update(|d| d.linkedin = event_target_value(&ev))
                />

                <label>"GitHub Profile"</label>
                <input
                    type="url"
                    placeholder="https://github.com/username"
                    prop:value=move || draft.get().github
                    on:input=move |ev| draft.update(|d| d.github = event_target_value(&ev))
                />

                <label>"Twitter Profile"</label>
                <input
                    type="url"
                    placeholder="https://twitter.com/username"
                    prop:value=move || draft.get().twitter
                    on:input=move |ev| draft.update(|d| d.twitter = event_target_value(&ev))
                />

                <div class="form-actions">
                    <button type="submit" class="btn primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>

            <div class="manager-preview">
                <h2>"Preview"</h2>
                <div class="preview-card">
                    <div class="contact-cards">
                        {move || {
                            let info = draft.get();
                            view! {
                                {(!info.email.is_empty()).then(|| view! {
                                    <div class="contact-card">
                                        <div class="contact-card-label">"Email"</div>
                                        <span>{info.email.clone()}</span>
                                    </div>
                                })}
                                {(!info.phone.is_empty()).then(|| view! {
                                    <div class="contact-card">
                                        <div class="contact-card-label">"Phone"</div>
                                        <span>{info.phone.clone()}</span>
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
                            let github = draft.get().github;
                            (!github.is_empty()).then(|| view! {
                                <a href=github target="_blank" rel="noopener noreferrer">"GitHub"</a>
                            })
                        }}
                        {move || {
                            let linkedin = draft.get().linkedin;
                            (!linkedin.is_empty()).then(|| view! {
                                <a href=linkedin target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                            })
                        }}
                        {move || {
                            let twitter = draft.get().twitter;
                            (!twitter.is_empty()).then(|| view! {
                                <a href=twitter target="_blank" rel="noopener noreferrer">"Twitter"</a>
                            })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
