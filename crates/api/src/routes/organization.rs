use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use kanvas_db::models::{OrganizationWithProjects, Plan};
use kanvas_services::DataSource;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::project::ProjectResponse;
use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub plan: Plan,
}

#[derive(Debug, Serialize)]
pub struct OrganizationResponse {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub plan: Plan,
    pub projects: Vec<ProjectResponse>,
}

impl From<OrganizationWithProjects> for OrganizationResponse {
    fn from(o: OrganizationWithProjects) -> Self {
        Self {
            id: o.organization.id,
            name: o.organization.name,
            logo: o.organization.logo,
            plan: o.organization.plan,
            projects: o.projects.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrganizationListResponse {
    pub source: DataSource,
    pub organizations: Vec<OrganizationResponse>,
}

#[derive(Debug, Serialize)]
pub struct OrganizationEnvelope {
    pub source: DataSource,
    pub organization: OrganizationResponse,
}

pub async fn list(State(state): State<AppState>) -> Json<OrganizationListResponse> {
    let listing = state.catalog.list_organizations().await;

    Json(OrganizationListResponse {
        source: listing.source,
        organizations: listing.data.into_iter().map(Into::into).collect(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    Json(mut body): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<OrganizationEnvelope>), ApiError> {
    body.name = body.name.trim().to_string();
    body.validate()?;

    let created = state
        .catalog
        .create_organization(body.name, body.logo, body.plan)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrganizationEnvelope {
            source: created.source,
            organization: created.data.into(),
        }),
    ))
}

pub async fn get(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Json<OrganizationEnvelope>, ApiError> {
    let found = state.catalog.find_organization(&organization_id).await?;

    Ok(Json(OrganizationEnvelope {
        source: found.source,
        organization: found.data.into(),
    }))
}
