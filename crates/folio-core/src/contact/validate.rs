use std::sync::LazyLock;

use regex::Regex;

use super::form::{ContactValues, Field, FieldErrors};
use crate::config::ContactConfig;

/// Tunable validation thresholds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub comment_min_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            comment_min_length: 25,
        }
    }
}

impl From<&ContactConfig> for ValidationRules {
    fn from(config: &ContactConfig) -> Self {
        Self {
            comment_min_length: config.comment_min_length,
        }
    }
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("invalid email pattern")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validate all fields; the map only holds failing fields
pub fn validate(values: &ContactValues, rules: &ValidationRules) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if values.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, "Required".to_string());
    }

    let email = values.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Required".to_string());
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, "Invalid email address".to_string());
    }

    if values.comment.is_empty() {
        errors.insert(Field::Comment, "Required".to_string());
    } else if values.comment.chars().count() < rules.comment_min_length {
        errors.insert(
            Field::Comment,
            format!("Must be at least {} characters", rules.comment_min_length),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> ContactValues {
        ContactValues {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            comment: "I would like to talk about a new project.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(validate(&valid_values(), &ValidationRules::default()).is_empty());
    }

    #[test]
    fn test_empty_form() {
        let errors = validate(&ContactValues::default(), &ValidationRules::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&Field::Email], "Required");
        assert!(!errors.contains_key(&Field::Enquiry));
    }

    #[test]
    fn test_emails() {
        for good in ["a@b.co", "first.last+tag@mail.example.org"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in ["plain", "a@b", "@example.com", "a b@example.com", "a@.com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }

        let mut values = valid_values();
        values.email = "nope".to_string();
        let errors = validate(&values, &ValidationRules::default());
        assert_eq!(errors[&Field::Email], "Invalid email address");
    }

    #[test]
    fn test_comment_min_length() {
        let mut values = valid_values();
        values.comment = "short".to_string();
        let errors = validate(&values, &ValidationRules::default());
        assert_eq!(errors[&Field::Comment], "Must be at least 25 characters");

        let relaxed = ValidationRules {
            comment_min_length: 5,
        };
        assert!(validate(&values, &relaxed).is_empty());
    }
}
