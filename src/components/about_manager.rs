//! About Manager
//!
//! Editor form for the about singleton, with a live preview of the draft.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{SAVE_DELAY_MS, SUCCESS_FLASH_MS};
use crate::store::{store_update_about, use_portfolio_store, PortfolioStateStoreFields};

#[component]
pub fn AboutManager() -> impl IntoView {
    let store = use_portfolio_store();

    // Draft seeded once from the store; edits stay local until submit
    let draft = RwSignal::new(store.about().get_untracked());
    let (saving, set_saving) = signal(false);
    let (saved, set_saved) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = draft.get().to_patch();
        set_saving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SAVE_DELAY_MS).await;
            store_update_about(&store, patch);
            set_saving.set(false);
            set_saved.set(true);
            TimeoutFuture::new(SUCCESS_FLASH_MS).await;
            set_saved.set(false);
        });
    };

    view! {
        <div class="manager">
            <h1>"About Section"</h1>
            <p class="admin-subtitle">"Update your title, bio, and resume link."</p>

            <Show when=move || saved.get()>
                <div class="save-banner">"About section updated."</div>
            </Show>

            <form class="manager-form" on:submit=on_submit>
                <label>"Professional Title"</label>
                <input
                    type="text"
                    placeholder="e.g. Full Stack Developer"
                    prop:value=move || draft.get().title
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
                <p class="field-hint">"Shown as the main heading on the homepage."</p>

                <label>"Short Description"</label>
                <input
                    type="text"
                    placeholder="One line about what you do"
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />

                <label>"Biography"</label>
                <textarea
                    rows="6"
                    placeholder="Tell your story..."
                    prop:value=move || draft.get().bio
                    on:input=move |ev| draft.update(|d| d.bio = event_target_value(&ev))
                ></textarea>

                <label>"Resume URL"</label>
                <input
                    type="url"
                    placeholder="https://example.com/resume.pdf"
                    prop:value=move || draft.get().resume_url
                    on:input=move |ev| draft.update(|d| d.resume_url = event_target_value(&ev))
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
                    <h3>{move || draft.get().title}</h3>
                    <p class="preview-description">{move || draft.get().description}</p>
                    <p class="preview-bio">{move || draft.get().bio}</p>
                    {move || {
                        let resume_url = draft.get().resume_url;
                        (!resume_url.is_empty()).then(|| view! {
                            <a class="btn outline" href=resume_url target="_blank" rel="noopener noreferrer">
                                "Download Resume"
                            </a>
                        })
                    }}
                </div>
            </div>
        </div>
    }
}
