//! # Pages
//!
//! Server-rendered HTML for the landing, projects, and skills pages. Every
//! page shares the layout in `templates/base.html`: navigation bar with the
//! theme toggle, footer, and the chat widget.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use portfolio_core::{
    icon::Icon,
    profile::{Profile, SocialLink},
    routes::Page,
    skills::{self, Highlight, SkillCategory},
    theme::ColorMode,
    ProjectRecord,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::{AppState, SharedState};

/// Query parameters understood by every page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub theme: Option<String>,
    /// Project search text; only the projects page reads it
    pub q: Option<String>,
}

impl PageQuery {
    fn color_mode(&self, state: &AppState) -> ColorMode {
        ColorMode::resolve(self.theme.as_deref(), state.config.initial_color_mode)
    }

    fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

pub fn page_routes() -> Router<SharedState> {
    Router::new()
        .route(Page::Home.path(), get(home))
        .route(Page::Projects.path(), get(projects))
        .route("/projects/cards", get(project_cards))
        .route(Page::Skills.path(), get(skills_page))
}

/// Link to `path` that keeps the active theme (and search text, if any)
fn page_href(path: &str, theme: ColorMode, search: &str) -> String {
    if search.is_empty() {
        format!("{}?theme={}", path, theme)
    } else {
        format!("{}?theme={}&q={}", path, theme, urlencoding::encode(search))
    }
}

struct NavLink {
    label: &'static str,
    href: String,
    active: bool,
}

struct LinkView {
    label: &'static str,
    href: String,
    glyph: &'static str,
    external: bool,
}

impl From<SocialLink> for LinkView {
    fn from(link: SocialLink) -> Self {
        Self {
            external: link.is_external(),
            glyph: link.icon.glyph(),
            label: link.label,
            href: link.href,
        }
    }
}

/// Data for `base.html`
struct Layout {
    title: &'static str,
    brand: &'static str,
    brand_href: String,
    theme: &'static str,
    toggle_href: String,
    toggle_icon: &'static str,
    nav: Vec<NavLink>,
    footer_links: Vec<LinkView>,
    copyright: String,
    chat_icon: &'static str,
    close_icon: &'static str,
}

impl Layout {
    fn new(state: &AppState, current: Option<Page>, theme: ColorMode, search: &str) -> Self {
        let owner = Profile::owner();
        let here = current.map(|page| page.path()).unwrap_or("/");
        let keep_search = if current == Some(Page::Projects) {
            search
        } else {
            ""
        };

        Self {
            title: current.map(|page| page.title()).unwrap_or("Not Found"),
            brand: owner.name,
            brand_href: page_href(Page::Home.path(), theme, ""),
            theme: theme.as_str(),
            toggle_href: page_href(here, theme.toggled(), keep_search),
            toggle_icon: theme.toggle_icon().glyph(),
            nav: Page::NAV
                .into_iter()
                .map(|page| NavLink {
                    label: page.title(),
                    href: page_href(page.path(), theme, ""),
                    active: current == Some(page),
                })
                .collect(),
            footer_links: owner.footer_links().into_iter().map(LinkView::from).collect(),
            copyright: owner.copyright(state.config.copyright_year),
            chat_icon: Icon::Chat.glyph(),
            close_icon: Icon::Close.glyph(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage {
    layout: Layout,
    profile: &'static Profile,
    projects_href: String,
    mailto: String,
    arrow: &'static str,
    social_links: Vec<LinkView>,
    highlights: &'static [Highlight],
}

async fn home(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let theme = query.color_mode(&state);
    let owner = Profile::owner();

    let page = HomePage {
        layout: Layout::new(&state, Some(Page::Home), theme, ""),
        profile: owner,
        projects_href: page_href(Page::Projects.path(), theme, ""),
        mailto: owner.mailto(),
        arrow: Icon::ArrowRight.glyph(),
        social_links: owner
            .social_links(state.config.resume_url.as_deref())
            .into_iter()
            .map(LinkView::from)
            .collect(),
        highlights: skills::highlights(),
    };
    Ok(Html(page.render()?))
}

/// One project card
struct ProjectCard {
    name: String,
    description: String,
    topics: Vec<String>,
    url: String,
    delay_ms: usize,
}

impl ProjectCard {
    fn new(index: usize, record: &ProjectRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            topics: record.topics.clone(),
            url: if record.has_url() {
                record.url.clone()
            } else {
                String::new()
            },
            delay_ms: index * 100,
        }
    }
}

fn project_cards_for(state: &AppState, search: &str) -> Vec<ProjectCard> {
    state
        .catalog
        .filter(search)
        .into_iter()
        .enumerate()
        .map(|(index, record)| ProjectCard::new(index, record))
        .collect()
}

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsPage {
    layout: Layout,
    query: String,
    cards: Vec<ProjectCard>,
}

async fn projects(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let theme = query.color_mode(&state);
    let search = query.search();

    let page = ProjectsPage {
        layout: Layout::new(&state, Some(Page::Projects), theme, search),
        query: search.to_string(),
        cards: project_cards_for(&state, search),
    };
    Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "project_cards.html")]
struct ProjectCardsFragment {
    query: String,
    cards: Vec<ProjectCard>,
}

/// Just the card grid, swapped in by the search box as the user types
async fn project_cards(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let search = query.search();
    let fragment = ProjectCardsFragment {
        query: search.to_string(),
        cards: project_cards_for(&state, search),
    };
    Ok(Html(fragment.render()?))
}

#[derive(Template)]
#[template(path = "skills.html")]
struct SkillsPage {
    layout: Layout,
    categories: &'static [SkillCategory],
}

async fn skills_page(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let theme = query.color_mode(&state);
    let page = SkillsPage {
        layout: Layout::new(&state, Some(Page::Skills), theme, ""),
        categories: skills::skill_categories(),
    };
    Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage {
    layout: Layout,
    path: String,
    home_href: String,
}

/// Fallback for unknown routes.
///
/// Near-misses of a page path (`/skills/`) redirect to the page; anything
/// else gets the 404 page inside the normal layout.
pub async fn not_found(
    State(state): State<SharedState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    if let Some(page) = Page::from_path(uri.path()) {
        let target = match uri.query() {
            Some(q) => format!("{}?{}", page.path(), q),
            None => page.path().to_string(),
        };
        return Ok(Redirect::permanent(&target).into_response());
    }

    let theme = query.color_mode(&state);
    tracing::debug!(path = %uri.path(), "No route");

    let page = NotFoundPage {
        layout: Layout::new(&state, None, theme, ""),
        path: uri.path().to_string(),
        home_href: page_href(Page::Home.path(), theme, ""),
    };
    Ok((StatusCode::NOT_FOUND, Html(page.render()?)).into_response())
}
