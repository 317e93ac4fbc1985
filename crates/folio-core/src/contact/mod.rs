//! Contact form: field state, validation and submission

mod form;
mod submit;
mod validate;

pub use form::{ContactForm, ContactValues, Enquiry, Field, FieldErrors};
pub use submit::{send, HttpSubmitter, SubmitOutcome, Submitter};
pub use validate::{is_valid_email, validate, ValidationRules};
