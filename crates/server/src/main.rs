//! Portfolio Server
//!
//! Axum server that renders the portfolio pages, serves the embedded static
//! assets, and exposes the JSON API.

mod api;
mod error;
mod pages;

use anyhow::Context;
use axum::{
    body::Body,
    extract::Path,
    http::{header, Response, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use clap::{Parser, Subcommand};
use portfolio_core::{
    chat::ChatBot,
    config::{PersistedConfig, SiteConfig},
    skills,
    theme::ColorMode,
    ProjectCatalog,
};
use rust_embed::RustEmbed;
use std::{net::IpAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Embedded stylesheet and scripts
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Application state
pub struct AppState {
    /// Immutable for the life of the process
    catalog: ProjectCatalog,
    config: SiteConfig,
    chat: ChatBot,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    fn new(catalog: ProjectCatalog, config: SiteConfig) -> Self {
        Self {
            catalog,
            config,
            chat: ChatBot::default(),
        }
    }
}

#[derive(Parser, Clone)]
#[command(author, version, about = "Portfolio - personal portfolio web server")]
struct Args {
    /// JSON config file (defaults to ./portfolio.json when present)
    #[arg(long, global = true, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the web server (default)
    Serve {
        /// Address to bind
        #[arg(long, env = "PORTFOLIO_HOST")]
        host: Option<IpAddr>,
        /// Port to listen on
        #[arg(short, long, env = "PORTFOLIO_PORT")]
        port: Option<u16>,
        /// Color mode for visitors who haven't picked one
        #[arg(long)]
        theme: Option<ColorMode>,
    },
    /// Print the projects matching a search
    Projects {
        /// Case-insensitive text to look for in names and descriptions
        query: Option<String>,
    },
    /// Print the skill categories
    Skills,
}

impl CliCommand {
    fn overrides(&self) -> PersistedConfig {
        match self {
            CliCommand::Serve { host, port, theme } => PersistedConfig {
                host: *host,
                port: *port,
                initial_color_mode: *theme,
                ..Default::default()
            },
            _ => PersistedConfig::default(),
        }
    }
}

// === Router ===

fn app(state: SharedState) -> Router {
    Router::new()
        .merge(pages::page_routes())
        .nest("/api/v1", api::api_routes())
        .route("/static/*path", get(serve_static))
        .fallback(pages::not_found)
        .with_state(state)
}

async fn serve_static(Path(path): Path<String>) -> impl IntoResponse {
    match Assets::get(&path) {
        Some(file) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(file.data.into_owned()))
                .map(IntoResponse::into_response)
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

// === CLI ===

fn print_projects(catalog: &ProjectCatalog, query: &str) {
    let hits = catalog.filter(query);
    if hits.is_empty() {
        println!("No projects match {:?}", query);
        return;
    }

    for record in hits {
        println!("{}", record.name);
        if let Some(description) = &record.description {
            println!("  {}", description);
        }
        if !record.topics.is_empty() {
            println!("  [{}]", record.topics.join(", "));
        }
        if record.has_url() {
            println!("  {}", record.url);
        }
    }
}

fn print_skills() {
    for category in skills::skill_categories() {
        println!("{} {}", category.icon.glyph(), category.title);
        for skill in category.skills {
            println!("  - {}", skill);
        }
    }
}

// === Server Entry ===

pub async fn run_server(config: SiteConfig, catalog: ProjectCatalog) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let state: SharedState = Arc::new(AppState::new(catalog, config));

    println!("╔══════════════════════════════════════╗");
    println!("║          PORTFOLIO SERVER            ║");
    println!("╚══════════════════════════════════════╝");
    tracing::info!(
        projects = state.catalog.len(),
        theme = %state.config.initial_color_mode,
        "Portfolio server running at http://{}",
        addr
    );
    tracing::info!("Pages:    /, /projects, /skills");
    tracing::info!("API:      /api/v1/projects, /skills, /profile, /chat");
    tracing::info!("OpenAPI:  /api/v1/openapi.json");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let command = args.command.unwrap_or(CliCommand::Serve {
        host: None,
        port: None,
        theme: None,
    });

    let mut persisted = PersistedConfig::load(args.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    persisted.merge(command.overrides());
    let config = persisted.resolve()?;
    let catalog = config
        .catalog()
        .await
        .context("Failed to load project catalog")?;

    match command {
        CliCommand::Serve { .. } => run_server(config, catalog).await,
        CliCommand::Projects { query } => {
            print_projects(&catalog, query.as_deref().unwrap_or(""));
            Ok(())
        }
        CliCommand::Skills => {
            print_skills();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use portfolio_core::ProjectRecord;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(AppState::new(
            ProjectCatalog::builtin(),
            SiteConfig::default(),
        )))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> Value {
        let (status, body) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    async fn post_chat(message: &str) -> Value {
        let body = serde_json::json!({ "message": message }).to_string();
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, body) = get(test_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Mohamad Massalkhi"));
        assert!(body.contains("Areas of Expertise"));
        assert!(body.contains(r#"data-theme="light""#));
        assert!(!body.contains("Resume"));
    }

    #[tokio::test]
    async fn test_theme_query_switches_mode() {
        let (_, body) = get(test_app(), "/skills?theme=dark").await;
        assert!(body.contains(r#"data-theme="dark""#));
        assert!(body.contains("Skills &amp; Expertise"));

        let (_, body) = get(test_app(), "/skills?theme=plaid").await;
        assert!(body.contains(r#"data-theme="light""#));
    }

    #[tokio::test]
    async fn test_projects_page_filters_server_side() {
        let (status, body) = get(test_app(), "/projects?q=lstm").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Stock Price Prediction"));
        assert!(!body.contains("Brain Tumor Detection"));
        assert!(body.contains("View on GitHub"));
    }

    #[tokio::test]
    async fn test_project_cards_fragment() {
        let (status, body) = get(test_app(), "/projects/cards?q=xyz123").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No projects match"));
        assert!(!body.contains("<html"));
    }

    #[tokio::test]
    async fn test_card_without_url_has_no_link() {
        let catalog = ProjectCatalog::new(vec![ProjectRecord {
            name: "Offline Notebook".to_string(),
            description: None,
            url: String::new(),
            topics: vec!["Jupyter".to_string()],
        }])
        .unwrap();
        let app = app(Arc::new(AppState::new(catalog, SiteConfig::default())));

        let (_, body) = get(app, "/projects").await;
        assert!(body.contains("Offline Notebook"));
        assert!(body.contains("Jupyter"));
        assert!(!body.contains("View on GitHub"));
    }

    #[tokio::test]
    async fn test_api_projects() {
        let json = get_json(test_app(), "/api/v1/projects").await;
        assert_eq!(json["count"], 4);
        assert_eq!(json["total"], 4);
        assert_eq!(json["projects"][0]["name"], "Brain Tumor Detection");

        let upper = get_json(test_app(), "/api/v1/projects?q=DEEP").await;
        let lower = get_json(test_app(), "/api/v1/projects?q=deep").await;
        assert_eq!(upper["projects"], lower["projects"]);
        assert_eq!(upper["count"], 2);

        let none = get_json(test_app(), "/api/v1/projects?q=xyz123").await;
        assert_eq!(none["projects"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_api_skills_and_profile() {
        let skills = get_json(test_app(), "/api/v1/skills").await;
        assert_eq!(skills["categories"].as_array().unwrap().len(), 8);
        assert_eq!(skills["categories"][2]["skills"][1], "SQL");

        let profile = get_json(test_app(), "/api/v1/profile").await;
        assert_eq!(profile["name"], "Mohamad Massalkhi");
        assert_eq!(profile["highlights"].as_array().unwrap().len(), 4);
        assert_eq!(profile["social_links"][0]["icon"], "github");
    }

    #[tokio::test]
    async fn test_chat_placeholder() {
        let reply = post_chat("hello").await;
        let messages = reply["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["is_bot"], false);
        assert_eq!(messages[1]["text"], portfolio_core::chat::PLACEHOLDER_REPLY);

        let blank = post_chat("   ").await;
        assert!(blank["messages"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let doc = get_json(test_app(), "/api/v1/openapi.json").await;
        assert!(doc["paths"]["/api/v1/projects"].is_object());
        assert!(doc["paths"]["/api/v1/chat"].is_object());
    }

    #[tokio::test]
    async fn test_static_assets() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/static/site.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/css");

        let (status, _) = get(test_app(), "/static/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found_page() {
        let (status, body) = get(test_app(), "/contact").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
        assert!(body.contains("contact</code>"));
    }

    #[tokio::test]
    async fn test_trailing_slash_redirects_to_page() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/skills/?theme=dark")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(resp.headers()[header::LOCATION], "/skills?theme=dark");
    }

    #[test]
    fn test_serve_overrides() {
        let command = CliCommand::Serve {
            host: None,
            port: Some(9000),
            theme: Some(ColorMode::Dark),
        };
        let overrides = command.overrides();
        assert_eq!(overrides.port, Some(9000));
        assert_eq!(overrides.initial_color_mode, Some(ColorMode::Dark));
        assert_eq!(CliCommand::Skills.overrides(), PersistedConfig::default());
    }
}
