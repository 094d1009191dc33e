use axum::{
    Json,
    extract::{Query, State},
};
use kanvas_db::models::ProjectStatus;
use kanvas_services::{
    DataSource,
    board::{BoardEntry, BoardFilter, build_board},
    session::Role,
};
use serde::{Deserialize, Deserializer, Serialize, de};

use super::project::ProjectResponse;
use crate::{extractors::session::CurrentUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub q: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "query_flag")]
    pub mine: bool,
}

/// `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`, any case; empty is false.
fn query_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"a boolean flag",
        )),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardProjectResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    pub org_name: String,
    pub org_logo: String,
}

impl From<BoardEntry> for BoardProjectResponse {
    fn from(entry: BoardEntry) -> Self {
        Self {
            project: entry.project.into(),
            org_name: entry.org_name,
            org_logo: entry.org_logo,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub source: DataSource,
    pub role: Role,
    pub projects: Vec<BoardProjectResponse>,
}

pub async fn board(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardResponse> {
    let listing = state.catalog.list_organizations().await;
    let filter = BoardFilter {
        query: query.q,
        status: query.status,
        only_mine: query.mine,
    };

    let projects = build_board(user.role, &user.email, listing.data, &filter)
        .into_iter()
        .map(Into::into)
        .collect();

    Json(DashboardResponse {
        source: listing.source,
        role: user.role,
        projects,
    })
}
