use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::validate::{validate, ValidationRules};

/// Form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    Email,
    Enquiry,
    Comment,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::Email, Field::Enquiry, Field::Comment];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "Name",
            Field::Email => "Email Address",
            Field::Enquiry => "Type of enquiry",
            Field::Comment => "Your message",
        }
    }

    /// Free-text fields accept typed characters; the enquiry is a choice
    pub fn is_text(self) -> bool {
        !matches!(self, Field::Enquiry)
    }
}

/// Type of enquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Enquiry {
    #[default]
    HireMe,
    OpenSource,
    Other,
}

impl Enquiry {
    pub const ALL: [Enquiry; 3] = [Enquiry::HireMe, Enquiry::OpenSource, Enquiry::Other];

    pub fn label(self) -> &'static str {
        match self {
            Enquiry::HireMe => "Freelance project proposal",
            Enquiry::OpenSource => "Open source consultancy session",
            Enquiry::Other => "Other",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Enquiry::HireMe => Enquiry::OpenSource,
            Enquiry::OpenSource => Enquiry::Other,
            Enquiry::Other => Enquiry::HireMe,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Enquiry::HireMe => Enquiry::Other,
            Enquiry::OpenSource => Enquiry::HireMe,
            Enquiry::Other => Enquiry::OpenSource,
        }
    }
}

/// Submitted payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactValues {
    pub first_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub enquiry: Enquiry,
    pub comment: String,
}

impl ContactValues {
    /// Text value of a free-text field (None for the enquiry choice)
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::Email => Some(&self.email),
            Field::Comment => Some(&self.comment),
            Field::Enquiry => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::Email => Some(&mut self.email),
            Field::Comment => Some(&mut self.comment),
            Field::Enquiry => None,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

/// Contact form state: values, which fields were touched, current errors
///
/// Errors are recomputed on every change; they are only meant to be
/// displayed for fields the user has touched.
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: ContactValues,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    rules: ValidationRules,
}

impl ContactForm {
    pub fn new(rules: ValidationRules) -> Self {
        let values = ContactValues::default();
        let errors = validate(&values, &rules);
        Self {
            values,
            touched: BTreeSet::new(),
            errors,
            rules,
        }
    }

    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display: only for touched fields
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        if let Some(text) = self.values.text_mut(field) {
            text.push(c);
            self.revalidate();
        }
    }

    pub fn pop_char(&mut self, field: Field) {
        if let Some(text) = self.values.text_mut(field) {
            text.pop();
            self.revalidate();
        }
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if let Some(text) = self.values.text_mut(field) {
            *text = value.into();
            self.revalidate();
        }
    }

    pub fn set_enquiry(&mut self, enquiry: Enquiry) {
        self.values.enquiry = enquiry;
        self.revalidate();
    }

    /// Mark a field as visited (on leaving it)
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Mark every field as visited, as a submit attempt does
    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    /// Clear values, touched state and errors back to the initial form
    pub fn reset(&mut self) {
        self.values = ContactValues::default();
        self.touched.clear();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values, &self.rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new(ValidationRules::default())
    }

    #[test]
    fn test_initial_errors_hidden_until_touched() {
        let mut form = form();
        assert!(!form.is_valid());
        assert_eq!(form.visible_error(Field::FirstName), None);

        form.touch(Field::FirstName);
        assert_eq!(form.visible_error(Field::FirstName), Some("Required"));
        assert_eq!(form.visible_error(Field::Email), None);
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = form();
        form.touch(Field::FirstName);
        for c in "Ada".chars() {
            form.push_char(Field::FirstName, c);
        }
        assert_eq!(form.visible_error(Field::FirstName), None);

        form.pop_char(Field::FirstName);
        assert_eq!(form.values().first_name, "Ad");
    }

    #[test]
    fn test_enquiry_ignores_text_input() {
        let mut form = form();
        form.push_char(Field::Enquiry, 'x');
        assert_eq!(form.values().enquiry, Enquiry::HireMe);

        form.set_enquiry(Enquiry::HireMe.next());
        assert_eq!(form.values().enquiry, Enquiry::OpenSource);
        assert_eq!(Enquiry::HireMe.prev(), Enquiry::Other);
    }

    #[test]
    fn test_reset() {
        let mut form = form();
        form.set_text(Field::FirstName, "Ada");
        form.set_enquiry(Enquiry::Other);
        form.touch_all();

        form.reset();
        assert_eq!(form.values(), &ContactValues::default());
        assert!(!form.is_touched(Field::Comment));
    }

    #[test]
    fn test_payload_field_names() {
        let values = ContactValues {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            enquiry: Enquiry::OpenSource,
            comment: "Hello".to_string(),
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["type"], "openSource");
        assert_eq!(json["comment"], "Hello");
    }
}
