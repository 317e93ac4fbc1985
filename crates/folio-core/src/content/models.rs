use serde::{Deserialize, Serialize};

use crate::nav::SectionId;

/// Everything shown on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "default_socials")]
    pub socials: Vec<SocialLink>,
    #[serde(default = "default_nav")]
    pub nav: Vec<NavLink>,
    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            socials: default_socials(),
            nav: default_nav(),
            projects: default_projects(),
        }
    }
}

/// Landing hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Sara".to_string(),
            greeting: "Hello, I am Sara!".to_string(),
            bio: vec![
                "A frontend developer".to_string(),
                "currently learning React".to_string(),
            ],
            avatar_url: Some(
                "https://cdni.iconscout.com/illustration/premium/thumb/chica-avatar-11255219-9022799.png"
                    .to_string(),
            ),
        }
    }
}

/// External profile link shown on the left of the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// In-page navigation link shown on the right of the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: SectionId,
    pub label: String,
}

/// Project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_src: Option<String>,
    /// Opened by the card's "See more" link
    #[serde(default)]
    pub url: Option<String>,
}

fn social(label: &str, url: &str) -> SocialLink {
    SocialLink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

fn default_socials() -> Vec<SocialLink> {
    vec![
        social("Yahoo", "https://yahoo.com"),
        social("GitHub", "https://github.com"),
        social("LinkedIn", "https://www.linkedin.com"),
        social("Facebook", "https://facebook.com"),
    ]
}

fn default_nav() -> Vec<NavLink> {
    vec![
        NavLink {
            id: SectionId::new("projects"),
            label: "Projects".to_string(),
        },
        NavLink {
            id: SectionId::new("contactme"),
            label: "Contact Me".to_string(),
        },
    ]
}

fn project(title: &str, description: &str, image: &str) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        image_src: Some(image.to_string()),
        url: None,
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        project(
            "React Space",
            "Handy tool belt to create amazing AR components in a React app, with redux integration via middleware",
            "photo1.jpg",
        ),
        project(
            "React Infinite Scroll",
            "A scrollable bottom sheet with virtualisation support, native animations at 60 frames per second and easy to use",
            "photo2.jpg",
        ),
        project(
            "Photo Gallery",
            "A One-stop shop for photographers to share and monetize their photos, allowing them to have a second source of income",
            "photo3.jpg",
        ),
        project(
            "Event planner",
            "A mobile application for leisure seekers to discover unique events and activities in their city with a few taps",
            "photo4.jpg",
        ),
    ]
}
