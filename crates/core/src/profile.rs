//! # Profile
//!
//! Who the site is about: the hero copy on the landing page, the social
//! links, and the footer.

use serde::Serialize;

use crate::icon::Icon;

/// An outbound link with an icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
    pub icon: Icon,
}

impl SocialLink {
    fn new(label: &'static str, href: impl Into<String>, icon: Icon) -> Self {
        Self {
            label,
            href: href.into(),
            icon,
        }
    }

    /// `mailto:` links open in place; everything else opens a new tab
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

/// The site owner
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub greeting: &'static str,
    pub badge: &'static str,
    pub introduction: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub repositories_url: &'static str,
    pub linkedin_url: &'static str,
}

const OWNER: Profile = Profile {
    name: "Mohamad Massalkhi",
    role: "AI & Machine Learning Engineer",
    greeting: "Hi there, I'm",
    badge: "Welcome to my portfolio",
    introduction: "Passionate about developing innovative AI solutions that push the boundaries \
                   of what's possible. Specialized in computer vision, deep learning, and \
                   natural language processing, I create intelligent systems that solve \
                   real-world problems.",
    email: "mohmassalkhi@gmail.com",
    github_url: "https://github.com/MohamadMassalkhi1/AI-and-ML-Projects",
    repositories_url: "https://github.com/MohamadMassalkhi1?tab=repositories",
    linkedin_url: "https://linkedin.com/in/mohamadmassalkhi",
};

impl Profile {
    pub fn owner() -> &'static Profile {
        &OWNER
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Landing page links. The resume entry only appears when a resume URL
    /// is configured.
    pub fn social_links(&self, resume_url: Option<&str>) -> Vec<SocialLink> {
        let mut links = vec![
            SocialLink::new("GitHub", self.repositories_url, Icon::Github),
            SocialLink::new("LinkedIn", self.linkedin_url, Icon::Linkedin),
            SocialLink::new("Email", self.mailto(), Icon::Envelope),
        ];
        if let Some(url) = resume_url.map(str::trim).filter(|url| !url.is_empty()) {
            links.push(SocialLink::new("Resume", url, Icon::FilePdf));
        }
        links
    }

    pub fn footer_links(&self) -> Vec<SocialLink> {
        vec![
            SocialLink::new("GitHub", self.github_url, Icon::Github),
            SocialLink::new("LinkedIn", self.linkedin_url, Icon::Linkedin),
            SocialLink::new("Contact", self.mailto(), Icon::Envelope),
        ]
    }

    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved", year, self.name)
    }
}
