//! Projects Manager
//!
//! Admin CRUD surface for projects: list rows with featured toggle, edit,
//! and delete; a modal form holding the draft for create/edit commits.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{DeleteConfirmButton, SAVE_DELAY_MS, SUCCESS_FLASH_MS};
use crate::models::{ProjectDraft, ProjectPatch};
use crate::store::{
    store_add_project, store_delete_project, store_update_project, use_portfolio_store,
    PortfolioStateStoreFields,
};

#[component]
pub fn ProjectsManager() -> impl IntoView {
    let store = use_portfolio_store();

    let draft = RwSignal::new(ProjectDraft::default());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<u32>>(None);
    let (saving, set_saving) = signal(false);
    let (saved, set_saved) = signal(false);

    let open_create = move |_| {
        draft.set(ProjectDraft::default());
        set_editing.set(None);
        set_show_form.set(true);
    };

    let close_form = move |_| {
        // The draft is disposable; closing never touches the store
        set_show_form.set(false);
        set_editing.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        if !current.is_valid() {
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SAVE_DELAY_MS).await;
            let id = match editing.get_untracked() {
                Some(id) => {
                    store_update_project(&store, id, current.to_patch());
                    id
                }
                None => store_add_project(&store, current.to_input()).id,
            };
            web_sys::console::log_1(&format!("[PROJECTS] saved project {}", id).into());
            set_saving.set(false);
            set_show_form.set(false);
            set_editing.set(None);
            set_saved.set(true);
            TimeoutFuture::new(SUCCESS_FLASH_MS).await;
            set_saved.set(false);
        });
    };

    view! {
        <div class="manager">
            <div class="manager-header">
                <div>
                    <h1>"Projects"</h1>
                    <p class="admin-subtitle">"Manage the projects shown in the public gallery."</p>
                </div>
                <button class="btn primary" on:click=open_create>"Add Project"</button>
            </div>

            <Show when=move || saved.get()>
                <div class="save-banner">"Project saved."</div>
            </Show>

            <Show when=move || show_form.get()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <div class="modal-header">
                            <h3>
                                {move || if editing.get().is_some() { "Edit Project" } else { "Add New Project" }}
                            </h3>
                            <button class="modal-close" on:click=close_form>"×"</button>
                        </div>

                        <form class="manager-form" on:submit=on_submit>
                            <label>"Title"</label>
                            <input
                                type="text"
                                required=true
                                prop:value=move || draft.get().title
                                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            />

                            <label>"Description"</label>
                            <textarea
                                rows="3"
                                required=true
                                prop:value=move || draft.get().description
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            ></textarea>

                            <label>"Image URL"</label>
                            <input
                                type="url"
                                required=true
                                placeholder="https://images.example.com/..."
                                prop:value=move || draft.get().image
                                on:input=move |ev| draft.update(|d| d.image = event_target_value(&ev))
                            />

                            <label>"Technologies (comma-separated)"</label>
                            <input
                                type="text"
                                required=true
                                placeholder="React, Node.js, PostgreSQL"
                                prop:value=move || draft.get().technologies
                                on:input=move |ev| draft.update(|d| d.technologies = event_target_value(&ev))
                            />

                            <div class="form-row">
                                <div>
                                    <label>"Live URL (optional)"</label>
                                    <input
                                        type="url"
                                        placeholder="https://demo.example.com"
                                        prop:value=move || draft.get().live_url
                                        on:input=move |ev| draft.update(|d| d.live_url = event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label>"GitHub URL (optional)"</label>
                                    <input
                                        type="url"
                                        placeholder="https://github.com/user/repo"
                                        prop:value=move || draft.get().github_url
                                        on:input=move |ev| draft.update(|d| d.github_url = event_target_value(&ev))
                                    />
                                </div>
                            </div>

                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.get().featured
                                    on:change=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        let checked = input.checked();
                                        draft.update(|d| d.featured = checked);
                                    }
                                />
                                "Featured Project"
                            </label>

                            <div class="form-actions">
                                <button type="button" class="btn ghost" on:click=close_form>
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn primary" disabled=move || saving.get()>
                                    {move || match (saving.get(), editing.get().is_some()) {
                                        (true, _) => "Saving...",
                                        (false, true) => "Update Project",
                                        (false, false) => "Create Project",
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>

            <div class="manager-list">
                {move || store.projects().get().into_iter().map(|project| {
                    let id = project.id;
                    let featured = project.featured;
                    let edit_source = project.clone();

                    let on_edit = move |_| {
                        draft.set(ProjectDraft::from_project(&edit_source));
                        set_editing.set(Some(id));
                        set_show_form.set(true);
                    };
                    let on_toggle = move |_| {
                        store_update_project(
                            &store,
                            id,
                            ProjectPatch { featured: Some(!featured), ..Default::default() },
                        );
                    };
                    let on_delete = Callback::new(move |_| store_delete_project(&store, id));

                    view! {
                        <div class="manager-row">
                            <img class="manager-row-thumb" src=project.image.clone() alt=project.title.clone() />
                            <div class="manager-row-body">
                                <div class="manager-row-title">
                                    <span>{project.title.clone()}</span>
                                    {featured.then(|| view! { <span class="badge">"★"</span> })}
                                </div>
                                <p class="manager-row-description">{project.description.clone()}</p>
                                <div class="tech-chips">
                                    {project.technologies.iter().take(4).map(|tech| {
                                        view! { <span class="tech-chip">{tech.clone()}</span> }
                                    }).collect_view()}
                                    {(project.technologies.len() > 4).then(|| view! {
                                        <span class="tech-more">
                                            {format!("+{} more", project.technologies.len() - 4)}
                                        </span>
                                    })}
                                </div>
                            </div>
                            <div class="manager-row-actions">
                                <button
                                    class=move || if featured { "icon-btn starred" } else { "icon-btn" }
                                    title="Toggle featured"
                                    on:click=on_toggle
                                >
                                    "★"
                                </button>
                                <button class="icon-btn" title="Edit project" on:click=on_edit>
                                    "Edit"
                                </button>
                                <DeleteConfirmButton button_class="icon-btn danger" on_confirm=on_delete />
                            </div>
                        </div>
                    }
                }).collect_view()}

                <Show when=move || store.projects().get().is_empty()>
                    <div class="manager-empty">
                        <p>"No projects yet. Create the first one."</p>
                        <button class="btn primary" on:click=open_create>"Add Project"</button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
