//! # Site Content API
//!
//! Skills and profile, as shown on the skills and landing pages.

use axum::{extract::State, Json};
use portfolio_core::{
    profile::{Profile, SocialLink},
    skills::{self, Highlight, SkillCategory},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::SharedState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillCategoryResponse {
    title: String,
    icon: String,
    skills: Vec<String>,
}

impl From<&SkillCategory> for SkillCategoryResponse {
    fn from(category: &SkillCategory) -> Self {
        Self {
            title: category.title.to_string(),
            icon: category.icon.name().to_string(),
            skills: category.skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillsResponse {
    categories: Vec<SkillCategoryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LinkResponse {
    label: String,
    href: String,
    icon: String,
}

impl From<SocialLink> for LinkResponse {
    fn from(link: SocialLink) -> Self {
        Self {
            label: link.label.to_string(),
            icon: link.icon.name().to_string(),
            href: link.href,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HighlightResponse {
    name: String,
    description: String,
    icon: String,
}

impl From<&Highlight> for HighlightResponse {
    fn from(highlight: &Highlight) -> Self {
        Self {
            name: highlight.name.to_string(),
            description: highlight.description.to_string(),
            icon: highlight.icon.name().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    name: String,
    role: String,
    introduction: String,
    email: String,
    social_links: Vec<LinkResponse>,
    highlights: Vec<HighlightResponse>,
}

/// List skill categories
#[utoipa::path(
    get,
    path = "/api/v1/skills",
    tag = "site",
    responses(
        (status = 200, description = "Skill categories in display order", body = SkillsResponse)
    )
)]
pub async fn list_skills() -> Json<SkillsResponse> {
    Json(SkillsResponse {
        categories: skills::skill_categories()
            .iter()
            .map(SkillCategoryResponse::from)
            .collect(),
    })
}

/// Get the owner profile
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "site",
    responses(
        (status = 200, description = "Profile, social links, and expertise highlights", body = ProfileResponse)
    )
)]
pub async fn get_profile(State(state): State<SharedState>) -> Json<ProfileResponse> {
    let owner = Profile::owner();
    Json(ProfileResponse {
        name: owner.name.to_string(),
        role: owner.role.to_string(),
        introduction: owner.introduction.to_string(),
        email: owner.email.to_string(),
        social_links: owner
            .social_links(state.config.resume_url.as_deref())
            .into_iter()
            .map(LinkResponse::from)
            .collect(),
        highlights: skills::highlights()
            .iter()
            .map(HighlightResponse::from)
            .collect(),
    })
}
