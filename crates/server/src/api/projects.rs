//! # Projects API
//!
//! Search over the project catalog.

use axum::{
    extract::{Query, State},
    Json,
};
use portfolio_core::ProjectRecord;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::SharedState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectQuery {
    /// Case-insensitive text matched against project names and descriptions
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Empty when the project has no public link
    url: String,
    topics: Vec<String>,
}

impl From<&ProjectRecord> for ProjectResponse {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            url: record.url.clone(),
            topics: record.topics.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectListResponse {
    query: String,
    /// Number of matching projects
    count: usize,
    /// Number of projects in the catalog
    total: usize,
    projects: Vec<ProjectResponse>,
}

/// Search the project catalog
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "projects",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Matching projects in catalog order", body = ProjectListResponse)
    )
)]
pub async fn list_projects(
    State(state): State<SharedState>,
    Query(query): Query<ProjectQuery>,
) -> Json<ProjectListResponse> {
    let search = query.q.unwrap_or_default();
    let projects: Vec<ProjectResponse> = state
        .catalog
        .filter(&search)
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Json(ProjectListResponse {
        count: projects.len(),
        total: state.catalog.len(),
        query: search,
        projects,
    })
}
