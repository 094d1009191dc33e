use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use kanvas_db::models::{
    ActivityItem, ActivityType, FileAttachment, Project, ProjectDraft, ProjectStatus, ProjectType,
    TeamMember,
};
use kanvas_services::{
    DataSource,
    display::{created_label, due_date_or_tbd, format_due_date},
    feed::{authored_item, status_change_item},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{error::ApiError, extractors::session::CurrentUser, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub organization_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub created_at: String,
    pub concept_due_date: String,
    pub final_due_date: String,
    pub concept_due_label: String,
    pub final_due_label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub team: Vec<TeamMember>,
    pub activity: Vec<ActivityItem>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            status_label: p.status.label(),
            concept_due_label: format_due_date(&p.concept_due_date),
            final_due_label: format_due_date(&p.final_due_date),
            id: p.id,
            organization_id: p.organization_id,
            title: p.title,
            project_type: p.project_type,
            status: p.status,
            created_at: p.created_at,
            concept_due_date: p.concept_due_date,
            final_due_date: p.final_due_date,
            description: p.description,
            department: p.department,
            reference_link: p.reference_link,
            thumbnail: p.thumbnail,
            team: p.team,
            activity: p.activity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectEnvelope {
    pub source: DataSource,
    pub project: ProjectResponse,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default)]
    pub status: ProjectStatus,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub created_at: Option<String>,
    pub concept_due_date: Option<String>,
    pub final_due_date: Option<String>,
    pub department: Option<String>,
    pub reference_link: Option<String>,
    pub thumbnail: Option<String>,
}

impl CreateProjectRequest {
    fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            title: self.title,
            project_type: self.project_type,
            status: self.status,
            created_at: non_blank(self.created_at).unwrap_or_else(|| created_label(Utc::now())),
            concept_due_date: due_date_or_tbd(self.concept_due_date),
            final_due_date: due_date_or_tbd(self.final_due_date),
            description: self.description,
            department: non_blank(self.department),
            reference_link: non_blank(self.reference_link),
            thumbnail: non_blank(self.thumbnail),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ProjectStatus,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub source: DataSource,
    pub updated: bool,
    pub status: ProjectStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[serde(rename = "type", default)]
    pub activity_type: ActivityType,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub file: Option<FileAttachment>,
}

#[derive(Debug, Serialize)]
pub struct ActivityEnvelope {
    pub source: DataSource,
    pub activity: ActivityItem,
}

pub async fn create(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Json(mut body): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectEnvelope>), ApiError> {
    body.title = body.title.trim().to_string();
    body.description = body.description.trim().to_string();
    body.validate()?;

    let created = state
        .catalog
        .create_project(&organization_id, body.into_draft())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectEnvelope {
            source: created.source,
            project: created.data.into(),
        }),
    ))
}

pub async fn get(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectEnvelope>, ApiError> {
    let found = state.catalog.find_project(&project_id).await?;

    Ok(Json(ProjectEnvelope {
        source: found.source,
        project: found.data.into(),
    }))
}

/// Sets the status and records the change in the project's feed in a
/// single write.
pub async fn update_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, ApiError> {
    let item = status_change_item(&user, body.status, Utc::now());
    let updated = state
        .catalog
        .change_project_status(&project_id, body.status, &item)
        .await?;

    Ok(Json(UpdateStatusResponse {
        source: updated.source,
        updated: updated.data,
        status: body.status,
    }))
}

pub async fn add_activity(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<String>,
    Json(mut body): Json<CreateActivityRequest>,
) -> Result<(StatusCode, Json<ActivityEnvelope>), ApiError> {
    body.content = body.content.trim().to_string();
    body.validate()?;

    let item = authored_item(&user, body.activity_type, body.content, body.file, Utc::now());
    let added = state.catalog.add_project_activity(&project_id, &item).await?;

    Ok((
        StatusCode::CREATED,
        Json(ActivityEnvelope {
            source: added.source,
            activity: item,
        }),
    ))
}
