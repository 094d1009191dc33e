use bson::DateTime;
use serde::{Deserialize, Serialize};

/// Sentinel stored in the free-form date fields when no date was given.
pub const DATE_TBD: &str = "TBD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub organization_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub created_at: String,
    pub concept_due_date: String,
    pub final_due_date: String,
    pub description: String,
    pub department: Option<String>,
    pub reference_link: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    /// Newest first.
    #[serde(default)]
    pub activity: Vec<ActivityItem>,
    pub inserted_at: DateTime,
}

impl Project {
    pub const COLLECTION: &'static str = "projects";

    pub fn has_member_email(&self, email: &str) -> bool {
        self.team.iter().any(|m| m.email == email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    SermonSeries,
    Event,
    Branding,
    SocialMedia,
    Print,
    Other,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::SermonSeries => "sermon-series",
            ProjectType::Event => "event",
            ProjectType::Branding => "branding",
            ProjectType::SocialMedia => "social-media",
            ProjectType::Print => "print",
            ProjectType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Ready,
    InProgress,
    OnHold,
    Review,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Ready,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Review,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Ready => "ready",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Review => "review",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Human-readable label shown on status badges and in the activity feed.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Ready => "Ready for Production",
            ProjectStatus::InProgress => "In Production",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Review => "In Review",
            ProjectStatus::Completed => "Complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: TeamRole,
    pub avatar: String,
    pub email: String,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Creative Director")]
    CreativeDirector,
    Designer,
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Invited,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub timestamp: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileAttachment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[default]
    Message,
    Upload,
    Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub file_type: String,
}

/// Caller-supplied fields of a new project. Identity, owner, team and
/// activity are assigned on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub created_at: String,
    pub concept_due_date: String,
    pub final_due_date: String,
    pub description: String,
    pub department: Option<String>,
    pub reference_link: Option<String>,
    pub thumbnail: Option<String>,
}

impl ProjectDraft {
    pub fn into_project(
        self,
        id: String,
        organization_id: String,
        inserted_at: DateTime,
    ) -> Project {
        Project {
            id,
            organization_id,
            title: self.title,
            project_type: self.project_type,
            status: self.status,
            created_at: self.created_at,
            concept_due_date: self.concept_due_date,
            final_due_date: self.final_due_date,
            description: self.description,
            department: self.department,
            reference_link: self.reference_link,
            thumbnail: self.thumbnail,
            team: Vec::new(),
            activity: Vec::new(),
            inserted_at,
        }
    }
}
