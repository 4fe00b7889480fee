//! Site Header
//!
//! Fixed public navigation with section links and the admin entry button.

use leptos::prelude::*;

use crate::context::{AppContext, Section};

/// Public navigation bar
#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <div class="site-brand">
                    <span class="site-brand-mark">"P"</span>
                    <span class="site-brand-name">"Portfolio"</span>
                </div>

                <nav class=move || if menu_open.get() { "site-nav open" } else { "site-nav" }>
                    {Section::ALL.iter().map(|&section| {
                        let is_active = move || ctx.section.get() == section;
                        view! {
                            <button
                                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                on:click=move |_| {
                                    ctx.go_to_section(section);
                                    set_menu_open.set(false);
                                }
                            >
                                {section.label()}
                            </button>
                        }
                    }).collect_view()}

                    <button class="admin-link" on:click=move |_| ctx.open_admin()>
                        "Admin"
                    </button>
                </nav>

                <button
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "×" } else { "☰" }}
                </button>
            </div>
        </header>
    }
}
