//! Application Context
//!
//! View-routing state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level view mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Portfolio,
    Admin,
}

/// Public page sections, in nav order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section element, used for scroll targeting
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Admin panel tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Dashboard,
    Projects,
    About,
    Contact,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Dashboard,
        AdminTab::Projects,
        AdminTab::About,
        AdminTab::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Projects => "Projects",
            AdminTab::About => "About",
            AdminTab::Contact => "Contact",
        }
    }
}

/// App-wide view state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which top-level view is showing - read
    pub view_mode: ReadSignal<ViewMode>,
    set_view_mode: WriteSignal<ViewMode>,
    /// Highlighted public section - read
    pub section: ReadSignal<Section>,
    set_section: WriteSignal<Section>,
    /// Active admin tab - read
    pub admin_tab: ReadSignal<AdminTab>,
    set_admin_tab: WriteSignal<AdminTab>,
}

impl AppContext {
    pub fn new() -> Self {
        let (view_mode, set_view_mode) = signal(ViewMode::Portfolio);
        let (section, set_section) = signal(Section::Home);
        let (admin_tab, set_admin_tab) = signal(AdminTab::Dashboard);
        Self {
            view_mode,
            set_view_mode,
            section,
            set_section,
            admin_tab,
            set_admin_tab,
        }
    }

    /// Switch into the admin panel, landing on the dashboard
    pub fn open_admin(&self) {
        self.set_admin_tab.set(AdminTab::Dashboard);
        self.set_view_mode.set(ViewMode::Admin);
    }

    pub fn back_to_portfolio(&self) {
        self.set_view_mode.set(ViewMode::Portfolio);
    }

    pub fn set_admin_tab(&self, tab: AdminTab) {
        self.set_admin_tab.set(tab);
    }

    /// Highlight a public section and scroll its element into view
    pub fn go_to_section(&self, section: Section) {
        self.set_section.set(section);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(section.id()) {
                element.scroll_into_view();
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
