//! Content Models
//!
//! Data records for the four content collections, plus the patch and draft
//! types the editor forms commit through.

use serde::{Deserialize, Serialize};

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Image URL for the project card
    pub image: String,
    /// Technology tags, in display order
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    /// Featured projects get the large cards on the public page
    pub featured: bool,
}

impl Project {
    /// Overlay the supplied fields, leaving everything else untouched
    pub fn merge(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
        if let Some(live_url) = patch.live_url {
            self.live_url = live_url;
        }
        if let Some(github_url) = patch.github_url {
            self.github_url = github_url;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
    }
}

/// Field-level patch for a project. `None` leaves a field untouched;
/// for the URL fields, `Some(None)` clears the link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub live_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub featured: Option<bool>,
}

/// Everything a project carries except its store-assigned id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
}

impl ProjectInput {
    pub fn into_project(self, id: u32) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            technologies: self.technologies,
            live_url: self.live_url,
            github_url: self.github_url,
            featured: self.featured,
        }
    }
}

/// The projects form's private working copy. Technologies stay a single
/// comma-separated string until commit; the optional URLs stay plain
/// strings and normalize to `None` when they trim to empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: String,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
}

impl ProjectDraft {
    /// Seed the edit form from a stored record
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            technologies: technologies_label(&project.technologies),
            live_url: project.live_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            featured: project.featured,
        }
    }

    /// Presence check for the required fields; the store itself accepts
    /// anything, so this is the only gate before commit.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.image.trim().is_empty()
            && !self.technologies.trim().is_empty()
    }

    /// Convert into the input `add_project` takes
    pub fn to_input(&self) -> ProjectInput {
        ProjectInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            technologies: parse_technologies(&self.technologies),
            live_url: normalize_optional(&self.live_url),
            github_url: normalize_optional(&self.github_url),
            featured: self.featured,
        }
    }

    /// Convert into a full patch for `update_project`
    pub fn to_patch(&self) -> ProjectPatch {
        ProjectPatch {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            image: Some(self.image.trim().to_string()),
            technologies: Some(parse_technologies(&self.technologies)),
            live_url: Some(normalize_optional(&self.live_url)),
            github_url: Some(normalize_optional(&self.github_url)),
            featured: Some(self.featured),
        }
    }
}

/// Split a comma-separated technology string into trimmed tags.
/// Entries that trim to empty are dropped, so `"a,,b,"` yields two tags.
pub fn parse_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_technologies`], used to seed the edit form
pub fn technologies_label(tags: &[String]) -> String {
    tags.join(", ")
}

fn normalize_optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A skill bar on the about section. Read-only; seeded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub name: String,
    /// Proficiency 0-100, rendered as a percentage bar width
    pub level: u8,
    pub category: String,
}

/// The about singleton. Exactly one instance lives in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    pub bio: String,
    pub resume_url: String,
}

impl AboutContent {
    pub fn merge(&mut self, patch: AboutPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(resume_url) = patch.resume_url {
            self.resume_url = resume_url;
        }
    }

    /// Full patch carrying every field, for the about form's commit
    pub fn to_patch(&self) -> AboutPatch {
        AboutPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            bio: Some(self.bio.clone()),
            resume_url: Some(self.resume_url.clone()),
        }
    }
}

/// Field-level patch for the about singleton
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub bio: Option<String>,
    pub resume_url: Option<String>,
}

/// The contact singleton: reachability details plus social profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

impl ContactInfo {
    pub fn merge(&mut self, patch: ContactPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(linkedin) = patch.linkedin {
            self.linkedin = linkedin;
        }
        if let Some(github) = patch.github {
            self.github = github;
        }
        if let Some(twitter) = patch.twitter {
            self.twitter = twitter;
        }
    }

    pub fn to_patch(&self) -> ContactPatch {
        ContactPatch {
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            location: Some(self.location.clone()),
            linkedin: Some(self.linkedin.clone()),
            github: Some(self.github.clone()),
            twitter: Some(self.twitter.clone()),
        }
    }
}

/// Field-level patch for the contact singleton
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPatch {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(id: u32) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            description: "A project".to_string(),
            image: "https://example.com/shot.jpg".to_string(),
            technologies: vec!["Rust".to_string(), "Leptos".to_string()],
            live_url: Some("https://example.com".to_string()),
            github_url: None,
            featured: false,
        }
    }

    #[test]
    fn test_parse_technologies_trims_and_keeps_order() {
        let tags = parse_technologies("React, Node.js , PostgreSQL");
        assert_eq!(tags, vec!["React", "Node.js", "PostgreSQL"]);
    }

    #[test]
    fn test_parse_technologies_drops_empty_entries() {
        assert_eq!(parse_technologies("Rust,,Leptos,"), vec!["Rust", "Leptos"]);
        assert_eq!(parse_technologies("  ,  "), Vec::<String>::new());
        assert_eq!(parse_technologies(""), Vec::<String>::new());
    }

    #[test]
    fn test_technologies_label_round_trips() {
        let tags = vec!["Rust".to_string(), "Leptos".to_string()];
        assert_eq!(parse_technologies(&technologies_label(&tags)), tags);
    }

    #[test]
    fn test_merge_only_touches_supplied_fields() {
        let mut project = make_project(1);
        project.merge(ProjectPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });
        assert_eq!(project.title, "Renamed");
        assert_eq!(project.description, "A project");
        assert_eq!(project.live_url.as_deref(), Some("https://example.com"));
        assert!(!project.featured);
    }

    #[test]
    fn test_merge_can_clear_optional_links() {
        let mut project = make_project(1);
        project.merge(ProjectPatch {
            live_url: Some(None),
            ..Default::default()
        });
        assert_eq!(project.live_url, None);
    }

    #[test]
    fn test_patch_from_json_leaves_absent_fields_alone() {
        // A wire-shaped partial: only `title` and `featured` present
        let patch: ProjectPatch =
            serde_json::from_str(r#"{"title":"From JSON","featured":true}"#).unwrap();
        let mut project = make_project(2);
        project.merge(patch);
        assert_eq!(project.title, "From JSON");
        assert!(project.featured);
        assert_eq!(project.description, "A project");
        assert_eq!(project.technologies.len(), 2);
    }

    #[test]
    fn test_draft_round_trip_preserves_fields() {
        let project = make_project(3);
        let draft = ProjectDraft::from_project(&project);
        assert_eq!(draft.technologies, "Rust, Leptos");
        assert_eq!(draft.github_url, "");

        let input = draft.to_input();
        assert_eq!(input.title, project.title);
        assert_eq!(input.technologies, project.technologies);
        assert_eq!(input.live_url, project.live_url);
        // Empty string in the form means no link in the store
        assert_eq!(input.github_url, None);
    }

    #[test]
    fn test_draft_presence_checks() {
        let mut draft = ProjectDraft::from_project(&make_project(4));
        assert!(draft.is_valid());
        draft.title = "   ".to_string();
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_about_merge_keeps_unpatched_fields() {
        let mut about = AboutContent {
            title: "Developer".to_string(),
            description: "Short line".to_string(),
            bio: "Long bio".to_string(),
            resume_url: "/resume.pdf".to_string(),
        };
        about.merge(AboutPatch {
            title: Some("New Title".to_string()),
            ..Default::default()
        });
        assert_eq!(about.title, "New Title");
        assert_eq!(about.description, "Short line");
        assert_eq!(about.bio, "Long bio");
    }

    #[test]
    fn test_contact_merge_keeps_unpatched_fields() {
        let mut contact = ContactInfo {
            email: "a@b.dev".to_string(),
            phone: "+1 555".to_string(),
            ..Default::default()
        };
        contact.merge(ContactPatch {
            location: Some("Berlin".to_string()),
            ..Default::default()
        });
        assert_eq!(contact.location, "Berlin");
        assert_eq!(contact.email, "a@b.dev");
        assert_eq!(contact.phone, "+1 555");
    }
}
