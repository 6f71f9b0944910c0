//! # JSON API
//!
//! Read-only views of the site content plus the chat placeholder, under
//! `/api/v1`. The OpenAPI document is served at `/api/v1/openapi.json`.

pub mod chat;
pub mod projects;
pub mod site;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

use crate::SharedState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Project catalog, skills, profile, and chat placeholder for the portfolio site"
    ),
    paths(
        projects::list_projects,
        site::list_skills,
        site::get_profile,
        chat::send_message
    ),
    components(
        schemas(
            projects::ProjectResponse,
            projects::ProjectListResponse,
            site::SkillCategoryResponse,
            site::SkillsResponse,
            site::LinkResponse,
            site::HighlightResponse,
            site::ProfileResponse,
            chat::ChatRequest,
            chat::ChatMessageResponse,
            chat::ChatResponse
        )
    ),
    tags(
        (name = "projects", description = "Project catalog search"),
        (name = "site", description = "Skills and profile content"),
        (name = "chat", description = "Chat widget placeholder")
    )
)]
pub struct ApiDoc;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/projects", get(projects::list_projects))
        .route("/skills", get(site::list_skills))
        .route("/profile", get(site::get_profile))
        .route("/chat", post(chat::send_message))
        .route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> impl IntoResponse {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(spec) => ([(header::CONTENT_TYPE, "application/json")], spec).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize OpenAPI document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
