//! UI Components
//!
//! Reusable Leptos components for the public site and the admin panel.

mod site_header;
mod hero;
mod about_section;
mod projects_section;
mod contact_section;
mod login_form;
mod admin_layout;
mod dashboard;
mod projects_manager;
mod about_manager;
mod contact_manager;
mod delete_confirm_button;

pub use site_header::SiteHeader;
pub use hero::Hero;
pub use about_section::AboutSection;
pub use projects_section::ProjectsSection;
pub use contact_section::ContactSection;
pub use login_form::LoginForm;
pub use admin_layout::AdminView;
pub use dashboard::Dashboard;
pub use projects_manager::ProjectsManager;
pub use about_manager::AboutManager;
pub use contact_manager::ContactManager;
pub use delete_confirm_button::DeleteConfirmButton;

/// Simulated network delay before an edit commits
pub(crate) const SAVE_DELAY_MS: u32 = 1_000;
/// How long the transient success indicator stays up
pub(crate) const SUCCESS_FLASH_MS: u32 = 3_000;
