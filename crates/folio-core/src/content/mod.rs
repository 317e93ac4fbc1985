//! Portfolio content: profile, links and project cards

mod models;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::{AppConfig, Error, Result};

pub use models::{NavLink, Portfolio, Profile, Project, SocialLink};

/// Landing hero section
pub const LANDING_SECTION: &str = "landing";
/// Project showcase section
pub const PROJECTS_SECTION: &str = "projects";
/// Contact form section
pub const CONTACT_SECTION: &str = "contactme";

/// Sections the page is composed of, top to bottom
pub const PAGE_SECTIONS: [&str; 3] = [LANDING_SECTION, PROJECTS_SECTION, CONTACT_SECTION];

impl Portfolio {
    /// Content from the configured file, or the built-in content
    pub fn for_config(config: &AppConfig) -> Result<Self> {
        match config.content_path() {
            Some(path) => Self::load(&path),
            None => {
                debug!("No content file configured, using built-in content");
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml(&content)?;
        info!(
            "Loaded content from {} ({} projects)",
            path.display(),
            portfolio.projects.len()
        );
        Ok(portfolio)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Content(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Content(e.to_string()))
    }

    /// Problems that would make links dead or navigation a no-op
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut seen = HashSet::new();
        for link in &self.nav {
            if !seen.insert(link.id.as_str()) {
                problems.push(format!("Duplicate navigation id '{}'", link.id));
            }
            if !PAGE_SECTIONS.contains(&link.id.as_str()) {
                problems.push(format!(
                    "Navigation link '{}' targets unknown section '{}'",
                    link.label, link.id
                ));
            }
        }

        for social in &self.socials {
            if let Err(e) = url::Url::parse(&social.url) {
                problems.push(format!("Social link '{}' has invalid URL: {}", social.label, e));
            }
        }

        for project in &self.projects {
            if let Some(link) = &project.url {
                if let Err(e) = url::Url::parse(link) {
                    problems.push(format!("Project '{}' has invalid URL: {}", project.title, e));
                }
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_clean() {
        let portfolio = Portfolio::default();
        assert!(portfolio.check().is_empty(), "{:?}", portfolio.check());
        assert_eq!(portfolio.nav.len(), 2);
        assert_eq!(portfolio.projects.len(), 4);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let portfolio = Portfolio::from_toml(
            r#"
            [profile]
            name = "Ada"
            greeting = "Hi, I'm Ada"
            bio = ["Engineer"]

            [[projects]]
            title = "Engine"
            description = "Analytical"
            url = "https://example.org/engine"
            "#,
        )
        .unwrap();

        assert_eq!(portfolio.profile.name, "Ada");
        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(portfolio.socials.len(), 4);
        assert_eq!(portfolio.nav[0].id.as_str(), "projects");
    }

    #[test]
    fn test_check_reports_problems() {
        let mut portfolio = Portfolio::default();
        portfolio.nav.push(portfolio.nav[0].clone());
        portfolio.nav.push(NavLink {
            id: "blog".into(),
            label: "Blog".to_string(),
        });
        portfolio.socials[0].url = "not a url".to_string();

        let problems = portfolio.check();
        assert_eq!(problems.len(), 3, "{:?}", problems);
        assert!(problems.iter().any(|p| p.contains("Duplicate")));
        assert!(problems.iter().any(|p| p.contains("'blog'")));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let portfolio = Portfolio::default();
        let text = portfolio.to_toml().unwrap();
        assert_eq!(Portfolio::from_toml(&text).unwrap(), portfolio);
    }

    #[test]
    fn test_invalid_file_is_content_error() {
        assert!(matches!(
            Portfolio::from_toml("projects = 3"),
            Err(Error::Content(_))
        ));
    }
}
