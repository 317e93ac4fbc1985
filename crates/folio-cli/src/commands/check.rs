use std::path::Path;

use anyhow::{anyhow, Result};

use folio_core::{AppConfig, Portfolio};
use folio_tui::header::HEADER_HEIGHT;
use folio_tui::keymap::parse_key_binding;
use folio_tui::themes::THEME_NAMES;

pub fn run(config: &AppConfig, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("Config:  {}", config_path.display());
    } else {
        println!("Config:  {} (not found, using defaults)", config_path.display());
    }

    let mut problems = config_problems(config);

    match Portfolio::for_config(config) {
        Ok(portfolio) => {
            match config.content_path() {
                Some(path) => println!("Content: {}", path.display()),
                None => println!("Content: built-in"),
            }
            problems.extend(portfolio.check());
        }
        Err(e) => problems.push(format!("Content could not be loaded: {}", e)),
    }

    if problems.is_empty() {
        println!("No problems found.");
        return Ok(());
    }

    for problem in &problems {
        println!("  - {}", problem);
    }
    Err(anyhow!("{} problem(s) found", problems.len()))
}

fn config_problems(config: &AppConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if !THEME_NAMES.contains(&config.ui.theme.as_str()) {
        problems.push(format!(
            "Unknown theme '{}' (available: {})",
            config.ui.theme,
            THEME_NAMES.join(", ")
        ));
    }

    if let Err(e) = url::Url::parse(&config.contact.endpoint) {
        problems.push(format!("Contact endpoint '{}' is invalid: {}", config.contact.endpoint, e));
    }

    let hide_offset = config.ui.header.hide_offset;
    if !(-(HEADER_HEIGHT as i16)..=0).contains(&hide_offset) {
        problems.push(format!(
            "Header hide_offset {} is outside -{}..=0",
            hide_offset, HEADER_HEIGHT
        ));
    }

    let keymap = &config.keymap;
    let bindings = [
        ("quit", &keymap.quit),
        ("scroll_down", &keymap.scroll_down),
        ("scroll_up", &keymap.scroll_up),
        ("scroll_half_down", &keymap.scroll_half_down),
        ("scroll_half_up", &keymap.scroll_half_up),
        ("scroll_page_down", &keymap.scroll_page_down),
        ("scroll_page_up", &keymap.scroll_page_up),
        ("jump_to_top", &keymap.jump_to_top),
        ("jump_to_bottom", &keymap.jump_to_bottom),
        ("next_focus", &keymap.next_focus),
        ("prev_focus", &keymap.prev_focus),
        ("activate", &keymap.activate),
        ("goto_projects", &keymap.goto_projects),
        ("goto_contact", &keymap.goto_contact),
        ("help", &keymap.help),
    ];
    for (name, key) in bindings {
        if key.as_str() != "gg" && parse_key_binding(key).is_none() {
            problems.push(format!("Key binding {} = '{}' is not valid", name, key));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_clean() {
        assert!(config_problems(&AppConfig::default()).is_empty());
    }

    #[test]
    fn test_reports_bad_settings() {
        let mut config = AppConfig::default();
        config.ui.theme = "solarized".to_string();
        config.contact.endpoint = "not a url".to_string();
        config.keymap.help = "<Nope>".to_string();
        config.ui.header.hide_offset = 2;

        let problems = config_problems(&config);
        assert_eq!(problems.len(), 4);
        assert!(problems[2].contains("hide_offset"));
        assert!(problems[0].contains("solarized"));
    }
}
