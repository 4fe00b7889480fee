//! Projects Gallery
//!
//! Partitions projects into featured and other groups and renders each with
//! its own card size. Either group may be empty, in which case the whole
//! group heading is omitted.

use leptos::prelude::*;

use crate::models::Project;
use crate::store::{partition_featured, use_portfolio_store, PortfolioStateStoreFields};

/// Shorten a description for the small cards
fn preview_text(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Technology tag chips, capped with a "+N more" marker
#[component]
fn TechChips(technologies: Vec<String>, limit: usize) -> impl IntoView {
    let extra = technologies.len().saturating_sub(limit);
    view! {
        <div class="tech-chips">
            {technologies
                .into_iter()
                .take(limit)
                .map(|tech| view! { <span class="tech-chip">{tech}</span> })
                .collect_view()}
            {(extra > 0).then(|| view! {
                <span class="tech-more">{format!("+{} more", extra)}</span>
            })}
        </div>
    }
}

/// Live-demo and source links; absent links render nothing
#[component]
fn ProjectLinks(project: Project) -> impl IntoView {
    view! {
        <div class="project-links">
            {project.live_url.map(|url| view! {
                <a href=url target="_blank" rel="noopener noreferrer">"Live Demo"</a>
            })}
            {project.github_url.map(|url| view! {
                <a href=url target="_blank" rel="noopener noreferrer">"Source Code"</a>
            })}
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let store = use_portfolio_store();
    let partitions = Memo::new(move |_| partition_featured(&store.projects().get()));

    view! {
        <div class="projects">
            <h2>"My Projects"</h2>

            <Show when=move || !partitions.get().0.is_empty()>
                <h3 class="projects-group-title">"Featured Projects"</h3>
                <div class="projects-grid featured">
                    {move || partitions.get().0.into_iter().map(|project| view! {
                        <article class="project-card large">
                            <img src=project.image.clone() alt=project.title.clone() />
                            <div class="project-card-body">
                                <h4>{project.title.clone()}</h4>
                                <p>{project.description.clone()}</p>
                                <TechChips technologies=project.technologies.clone() limit=6 />
                                <ProjectLinks project=project />
                            </div>
                        </article>
                    }).collect_view()}
                </div>
            </Show>

            <Show when=move || !partitions.get().1.is_empty()>
                <h3 class="projects-group-title">"Other Projects"</h3>
                <div class="projects-grid">
                    {move || partitions.get().1.into_iter().map(|project| view! {
                        <article class="project-card">
                            <img src=project.image.clone() alt=project.title.clone() />
                            <div class="project-card-body">
                                <h4>{project.title.clone()}</h4>
                                <p>{preview_text(&project.description, 100)}</p>
                                <TechChips technologies=project.technologies.clone() limit=3 />
                                <ProjectLinks project=project />
                            </div>
                        </article>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_text_only_cuts_long_descriptions() {
        assert_eq!(preview_text("short", 100), "short");
        let long = "x".repeat(120);
        let cut = preview_text(&long, 100);
        assert_eq!(cut.len(), 103);
        assert!(cut.ends_with("..."));
    }
}
