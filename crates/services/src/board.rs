use kanvas_db::models::{OrganizationWithProjects, Project, ProjectStatus};

use crate::session::Role;

#[derive(Debug, Clone, Default)]
pub struct BoardFilter {
    /// Case-insensitive substring of the title.
    pub query: Option<String>,
    pub status: Option<ProjectStatus>,
    /// Only projects whose team lists the viewer's email.
    pub only_mine: bool,
}

impl BoardFilter {
    pub fn matches(&self, project: &Project, viewer_email: &str) -> bool {
        let matches_query = match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => project
                .title
                .to_lowercase()
                .contains(&q.to_lowercase()),
            _ => true,
        };
        let matches_status = self.status.is_none_or(|s| project.status == s);
        let matches_owner = !self.only_mine || project.has_member_email(viewer_email);

        matches_query && matches_status && matches_owner
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardEntry {
    pub project: Project,
    pub org_name: String,
    pub org_logo: String,
}

/// Designers see every organization's projects; clients see the first
/// organization of the listing.
pub fn build_board(
    role: Role,
    viewer_email: &str,
    organizations: Vec<OrganizationWithProjects>,
    filter: &BoardFilter,
) -> Vec<BoardEntry> {
    let visible = match role {
        Role::Designer => organizations,
        Role::Client => organizations.into_iter().take(1).collect(),
    };

    visible
        .into_iter()
        .flat_map(|org| {
            let name = org.organization.name;
            let logo = org.organization.logo;
            org.projects.into_iter().map(move |project| BoardEntry {
                project,
                org_name: name.clone(),
                org_logo: logo.clone(),
            })
        })
        .filter(|entry| filter.matches(&entry.project, viewer_email))
        .collect()
}
