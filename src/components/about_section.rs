//! About Section
//!
//! Biography, resume link, and the skills list with proficiency bars.

use leptos::prelude::*;

use crate::store::{use_portfolio_store, PortfolioStateStoreFields};

#[component]
pub fn AboutSection() -> impl IntoView {
    let store = use_portfolio_store();
    let about = move || store.about().get();

    view! {
        <div class="about">
            <h2>"About Me"</h2>
            <p class="about-bio">{move || about().bio}</p>

            {move || {
                let resume_url = about().resume_url;
                (!resume_url.is_empty()).then(|| view! {
                    <a class="btn primary" href=resume_url target="_blank" rel="noopener noreferrer">
                        "Download Resume"
                    </a>
                })
            }}

            <div class="skills">
                <h3>"Skills"</h3>
                {move || store.skills().get().into_iter().map(|skill| {
                    view! {
                        <div class="skill">
                            <div class="skill-header">
                                <span class="skill-name">{skill.name.clone()}</span>
                                <span class="skill-level">{format!("{}%", skill.level)}</span>
                            </div>
                            <div class="skill-track">
                                <div class="skill-bar" style:width=format!("{}%", skill.level)></div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
