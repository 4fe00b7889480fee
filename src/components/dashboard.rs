//! Admin Dashboard
//!
//! Content statistics and a peek at the most recent projects.

use leptos::prelude::*;
use std::collections::HashSet;

use crate::context::{AdminTab, AppContext};
use crate::store::{use_portfolio_store, PortfolioStateStoreFields};

#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_portfolio_store();

    let total_projects = Signal::derive(move || store.projects().get().len());
    let featured_projects = Signal::derive(move || {
        store.projects().get().iter().filter(|p| p.featured).count()
    });
    let skills = Signal::derive(move || store.skills().get().len());
    let technologies = Signal::derive(move || {
        store
            .projects()
            .get()
            .iter()
            .flat_map(|p| p.technologies.iter().cloned())
            .collect::<HashSet<_>>()
            .len()
    });

    view! {
        <div class="dashboard">
            <h1>"Dashboard"</h1>
            <p class="admin-subtitle">"A quick look at what the site is showing right now."</p>

            <div class="stat-grid">
                <StatCard label="Projects" value=total_projects />
                <StatCard label="Featured" value=featured_projects />
                <StatCard label="Skills" value=skills />
                <StatCard label="Technologies" value=technologies />
            </div>

            <div class="dashboard-recent">
                <h2>"Recent Projects"</h2>
                {move || store.projects().get().into_iter().take(3).map(|project| {
                    view! {
                        <div class="dashboard-recent-row">
                            <span class="dashboard-recent-title">{project.title.clone()}</span>
                            {project.featured.then(|| view! {
                                <span class="badge">"Featured"</span>
                            })}
                        </div>
                    }
                }).collect_view()}
                <button class="btn ghost" on:click=move |_| ctx.set_admin_tab(AdminTab::Projects)>
                    "Manage projects"
                </button>
            </div>
        </div>
    }
}
