//! Portfolio App
//!
//! Top-level component wiring the content store, the auth gate, and the
//! view router, then switching between the public site and the admin panel.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::AuthContext;
use crate::components::{
    AboutSection, AdminView, ContactSection, Hero, LoginForm, ProjectsSection, SiteHeader,
};
use crate::context::{AppContext, ViewMode};
use crate::store::{PortfolioState, PortfolioStore};

#[component]
pub fn App() -> impl IntoView {
    let store: PortfolioStore = Store::new(PortfolioState::seed());
    let ctx = AppContext::new();
    let auth = AuthContext::new();

    // Provide state to all children
    provide_context(store);
    provide_context(ctx);
    provide_context(auth);

    auth.restore_session();

    Effect::new(move |_| {
        let mode = ctx.view_mode.get();
        web_sys::console::log_1(&format!("[APP] view mode: {:?}", mode).into());
    });

    view! {
        <Show
            when=move || !auth.is_loading.get()
            fallback=|| view! {
                <div class="boot-screen">
                    <div class="boot-spinner"></div>
                    <p>"Loading..."</p>
                </div>
            }
        >
            <Show
                when=move || ctx.view_mode.get() == ViewMode::Admin
                fallback=|| view! { <PublicSite /> }
            >
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=|| view! { <LoginForm /> }
                >
                    <AdminView />
                </Show>
            </Show>
        </Show>
    }
}

/// Public single-page portfolio view
#[component]
fn PublicSite() -> impl IntoView {
    view! {
        <div class="site">
            <SiteHeader />
            <main class="site-main">
                <section id="home">
                    <Hero />
                </section>
                <section id="about">
                    <AboutSection />
                </section>
                <section id="projects">
                    <ProjectsSection />
                </section>
                <section id="contact">
                    <ContactSection />
                </section>
            </main>
        </div>
    }
}
