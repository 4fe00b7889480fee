//! Admin Layout
//!
//! Admin shell: sidebar with tab navigation, sign-out, and the content pane
//! for the active manager.

use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::{AboutManager, ContactManager, Dashboard, ProjectsManager};
use crate::context::{AdminTab, AppContext};

#[component]
pub fn AdminView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let auth = use_context::<AuthContext>().expect("AuthContext should be provided");

    view! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <div class="admin-brand">"Content Panel"</div>

                <nav class="admin-nav">
                    {AdminTab::ALL.iter().map(|&tab| {
                        let is_active = move || ctx.admin_tab.get() == tab;
                        view! {
                            <button
                                class=move || if is_active() { "admin-nav-link active" } else { "admin-nav-link" }
                                on:click=move |_| ctx.set_admin_tab(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect_view()}
                </nav>

                <div class="admin-sidebar-footer">
                    <button class="btn ghost" on:click=move |_| ctx.back_to_portfolio()>
                        "View Site"
                    </button>
                    <button class="btn ghost" on:click=move |_| auth.logout()>
                        "Sign Out"
                    </button>
                </div>
            </aside>

            <main class="admin-content">
                {move || match ctx.admin_tab.get() {
                    AdminTab::Dashboard => view! { <Dashboard /> }.into_any(),
                    AdminTab::Projects => view! { <ProjectsManager /> }.into_any(),
                    AdminTab::About => view! { <AboutManager /> }.into_any(),
                    AdminTab::Contact => view! { <ContactManager /> }.into_any(),
                }}
            </main>
        </div>
    }
}
