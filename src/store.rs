//! Portfolio Content Store
//!
//! Single source of truth for the four content collections. The mutation
//! semantics live on the plain [`PortfolioState`] so they can be tested
//! without a reactive runtime; the UI wraps the state in a
//! `reactive_stores::Store` and mutates through the `store_*` helpers, which
//! notify every subscriber before they return.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{
    AboutContent, AboutPatch, ContactInfo, ContactPatch, Project, ProjectInput, ProjectPatch,
    Skill,
};

/// Application content state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct PortfolioState {
    /// Projects, newest first
    pub projects: Vec<Project>,
    /// Skill bars for the about section; seeded once, read-only
    pub skills: Vec<Skill>,
    /// About singleton
    pub about: AboutContent,
    /// Contact singleton
    pub contact: ContactInfo,
    /// Next project id; monotonic within the session
    pub next_project_id: u32,
}

impl PortfolioState {
    /// Fixture content every session starts from. Nothing persists, so
    /// a page reload lands back here.
    pub fn seed() -> Self {
        let projects = vec![
            Project {
                id: 1,
                title: "E-commerce Platform".to_string(),
                description: "A full-stack e-commerce solution with user accounts, payment \
                              processing, and an admin dashboard."
                    .to_string(),
                image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg"
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "PostgreSQL".to_string(),
                    "Stripe".to_string(),
                ],
                live_url: Some("https://demo-ecommerce.example.com".to_string()),
                github_url: Some("https://github.com/user/ecommerce".to_string()),
                featured: true,
            },
            Project {
                id: 2,
                title: "Task Management App".to_string(),
                description: "A collaborative task manager with real-time updates, \
                              drag-and-drop boards, and team workspaces."
                    .to_string(),
                image: "https://images.pexels.com/photos/3861943/pexels-photo-3861943.jpeg"
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Firebase".to_string(),
                    "Socket.io".to_string(),
                ],
                live_url: Some("https://taskmanager.example.com".to_string()),
                github_url: Some("https://github.com/user/taskmanager".to_string()),
                featured: true,
            },
            Project {
                id: 3,
                title: "Weather Dashboard".to_string(),
                description: "A responsive weather dashboard showing current conditions, \
                              forecasts, and maps from multiple weather APIs."
                    .to_string(),
                image: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg"
                    .to_string(),
                technologies: vec![
                    "JavaScript".to_string(),
                    "Chart.js".to_string(),
                    "CSS Grid".to_string(),
                ],
                live_url: Some("https://weather.example.com".to_string()),
                github_url: Some("https://github.com/user/weather-dashboard".to_string()),
                featured: false,
            },
        ];

        let skills = vec![
            Skill { id: 1, name: "React".to_string(), level: 95, category: "Frontend".to_string() },
            Skill { id: 2, name: "TypeScript".to_string(), level: 90, category: "Frontend".to_string() },
            Skill { id: 3, name: "Node.js".to_string(), level: 85, category: "Backend".to_string() },
            Skill { id: 4, name: "PostgreSQL".to_string(), level: 80, category: "Backend".to_string() },
            Skill { id: 5, name: "AWS".to_string(), level: 75, category: "DevOps".to_string() },
            Skill { id: 6, name: "Docker".to_string(), level: 70, category: "DevOps".to_string() },
        ];

        let about = AboutContent {
            title: "Full Stack Developer".to_string(),
            description: "Passionate about building functional web applications that solve \
                          real-world problems."
                .to_string(),
            bio: "I am a dedicated full-stack developer with over 5 years of experience \
                  building web applications. I specialize in modern web technologies and \
                  love turning complex problems into simple, beautiful designs."
                .to_string(),
            resume_url: "/resume.pdf".to_string(),
        };

        let contact = ContactInfo {
            email: "hello@portfolio.dev".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
            linkedin: "https://linkedin.com/in/portfolio".to_string(),
            github: "https://github.com/portfolio".to_string(),
            twitter: "https://twitter.com/portfolio".to_string(),
        };

        Self {
            projects,
            skills,
            about,
            contact,
            // Counter continues past the seeded ids
            next_project_id: 4,
        }
    }

    /// Store a new project under a fresh id and prepend it, so the newest
    /// record always sorts first. Returns the stored record.
    pub fn add_project(&mut self, input: ProjectInput) -> Project {
        let id = self.next_project_id;
        self.next_project_id += 1;
        let project = input.into_project(id);
        self.projects.insert(0, project.clone());
        project
    }

    /// Merge `patch` onto the project matching `id`.
    /// Unknown ids are a silent no-op.
    pub fn update_project(&mut self, id: u32, patch: ProjectPatch) {
        self.projects
            .iter_mut()
            .find(|project| project.id == id)
            .map(|project| project.merge(patch));
    }

    /// Remove the project matching `id`; no-op if absent
    pub fn delete_project(&mut self, id: u32) {
        self.projects.retain(|project| project.id != id);
    }

    pub fn update_about(&mut self, patch: AboutPatch) {
        self.about.merge(patch);
    }

    pub fn update_contact(&mut self, patch: ContactPatch) {
        self.contact.merge(patch);
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::seed()
    }
}

/// Split projects into (featured, other), preserving collection order
/// within each group
pub fn partition_featured(projects: &[Project]) -> (Vec<Project>, Vec<Project>) {
    projects.iter().cloned().partition(|project| project.featured)
}

/// Type alias for the store
pub type PortfolioStore = Store<PortfolioState>;

/// Get the portfolio store from context
pub fn use_portfolio_store() -> PortfolioStore {
    expect_context::<PortfolioStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Each helper takes a whole-store write guard; dropping it notifies all
// subscribers before the call returns, so readers either see the state
// from before the mutation or the fully applied one.

/// Add a project to the store, returning the stored record with its id
pub fn store_add_project(store: &PortfolioStore, input: ProjectInput) -> Project {
    store.write().add_project(input)
}

/// Merge a patch onto a stored project by id
pub fn store_update_project(store: &PortfolioStore, id: u32, patch: ProjectPatch) {
    store.write().update_project(id, patch);
}

/// Remove a project from the store by id
pub fn store_delete_project(store: &PortfolioStore, id: u32) {
    store.write().delete_project(id);
}

/// Merge a patch onto the about singleton
pub fn store_update_about(store: &PortfolioStore, patch: AboutPatch) {
    store.write().update_about(patch);
}

/// Merge a patch onto the contact singleton
pub fn store_update_contact(store: &PortfolioStore, patch: ContactPatch) {
    store.write().update_contact(patch);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_input(title: &str, featured: bool) -> ProjectInput {
        ProjectInput {
            title: title.to_string(),
            description: "Test project".to_string(),
            image: "https://example.com/shot.jpg".to_string(),
            technologies: vec!["Rust".to_string()],
            live_url: None,
            github_url: None,
            featured,
        }
    }

    #[test]
    fn test_seed_shape() {
        let state = PortfolioState::seed();
        assert_eq!(state.projects.len(), 3);
        assert_eq!(state.skills.len(), 6);
        assert!(!state.about.title.is_empty());
        assert!(!state.contact.email.is_empty());
    }

    #[test]
    fn test_add_assigns_distinct_ids_newest_first() {
        let mut state = PortfolioState::seed();
        let a = state.add_project(make_input("A", false));
        let b = state.add_project(make_input("B", false));
        let c = state.add_project(make_input("C", false));

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        // Most recent addition sorts first
        assert_eq!(state.projects[0].id, c.id);
        assert_eq!(state.projects[1].id, b.id);
        assert_eq!(state.projects[2].id, a.id);
    }

    #[test]
    fn test_added_project_lands_in_other_partition() {
        let mut state = PortfolioState::seed();
        let added = state.add_project(make_input("X", false));

        let (featured, other) = partition_featured(&state.projects);
        assert!(other.iter().any(|p| p.id == added.id));
        assert!(!featured.iter().any(|p| p.id == added.id));
        // And it heads the overall list
        assert_eq!(state.projects[0].id, added.id);
    }

    #[test]
    fn test_featured_patch_moves_partition() {
        let mut state = PortfolioState::seed();
        let added = state.add_project(make_input("X", false));
        state.update_project(
            added.id,
            ProjectPatch { featured: Some(true), ..Default::default() },
        );

        let (featured, other) = partition_featured(&state.projects);
        assert!(featured.iter().any(|p| p.id == added.id));
        assert!(!other.iter().any(|p| p.id == added.id));
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let state = PortfolioState::seed();
        let (featured, other) = partition_featured(&state.projects);
        // Seeds 1 and 2 are featured, 3 is not
        assert_eq!(featured.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(other.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let mut state = PortfolioState::seed();
        let before = state.projects.clone();
        state.update_project(
            9999,
            ProjectPatch { title: Some("ghost".to_string()), ..Default::default() },
        );
        assert_eq!(state.projects, before);
    }

    #[test]
    fn test_delete_removes_exactly_one_then_noops() {
        let mut state = PortfolioState::seed();
        let len = state.projects.len();

        state.delete_project(2);
        assert_eq!(state.projects.len(), len - 1);
        assert!(!state.projects.iter().any(|p| p.id == 2));

        state.delete_project(2);
        assert_eq!(state.projects.len(), len - 1);
    }

    #[test]
    fn test_ids_stay_distinct_after_delete() {
        let mut state = PortfolioState::seed();
        state.delete_project(3);
        let added = state.add_project(make_input("New", false));
        // The counter never reuses a freed id
        assert!(state
            .projects
            .iter()
            .filter(|p| p.id == added.id)
            .count() == 1);
        assert_eq!(added.id, 4);
    }

    #[test]
    fn test_about_patch_keeps_description() {
        let mut state = PortfolioState::seed();
        let description = state.about.description.clone();
        state.update_about(AboutPatch {
            title: Some("New Title".to_string()),
            ..Default::default()
        });
        assert_eq!(state.about.title, "New Title");
        assert_eq!(state.about.description, description);
    }

    #[test]
    fn test_contact_patch_keeps_other_fields() {
        let mut state = PortfolioState::seed();
        let email = state.contact.email.clone();
        state.update_contact(ContactPatch {
            phone: Some("+49 30 1234".to_string()),
            ..Default::default()
        });
        assert_eq!(state.contact.phone, "+49 30 1234");
        assert_eq!(state.contact.email, email);
    }
}
