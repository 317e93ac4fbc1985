use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use super::form::ContactValues;
use crate::config::ContactConfig;
use crate::{Error, Result};

/// Delivers a validated contact form somewhere
#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, values: &ContactValues) -> Result<()>;
}

/// POSTs the form as JSON to the configured endpoint.
/// Any 2xx status counts as delivered.
pub struct HttpSubmitter {
    client: Client,
    endpoint: Url,
}

impl HttpSubmitter {
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, values: &ContactValues) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(values)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Submission(format!("{} responded with {}", self.endpoint, status)))
        }
    }
}

/// What the user is told after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success { message: String },
    Failure { message: String },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Success { message } | SubmitOutcome::Failure { message } => message,
        }
    }
}

/// Submit and turn the result into a user-facing outcome
pub async fn send(submitter: &dyn Submitter, values: &ContactValues) -> SubmitOutcome {
    match submitter.submit(values).await {
        Ok(()) => {
            info!(enquiry = ?values.enquiry, "Contact form submitted");
            SubmitOutcome::Success {
                message: format!(
                    "Thanks for your submission {}, we will get back to you shortly!",
                    values.first_name.trim()
                ),
            }
        }
        Err(e) => {
            warn!("Contact form submission failed: {}", e);
            SubmitOutcome::Failure {
                message: "Something went wrong, please try again later!".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubSubmitter {
        fail: bool,
        received: Mutex<Vec<ContactValues>>,
    }

    #[async_trait::async_trait]
    impl Submitter for StubSubmitter {
        async fn submit(&self, values: &ContactValues) -> Result<()> {
            self.received.lock().unwrap().push(values.clone());
            if self.fail {
                Err(Error::Submission("stub refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn values() -> ContactValues {
        ContactValues {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            comment: "Looking forward to working together!".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_success_outcome() {
        let submitter = StubSubmitter::default();
        let outcome = send(&submitter, &values()).await;

        assert!(outcome.is_success());
        assert_eq!(
            outcome.message(),
            "Thanks for your submission Ada, we will get back to you shortly!"
        );
        assert_eq!(submitter.received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_outcome() {
        let submitter = StubSubmitter {
            fail: true,
            ..Default::default()
        };
        let outcome = send(&submitter, &values()).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Something went wrong, please try again later!");
    }

    #[test]
    fn test_http_submitter_rejects_bad_endpoint() {
        let config = ContactConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(HttpSubmitter::new(&config), Err(Error::UrlParse(_))));
    }

    #[test]
    fn test_http_submitter_default_endpoint() {
        let submitter = HttpSubmitter::new(&ContactConfig::default()).unwrap();
        assert_eq!(submitter.endpoint().as_str(), "https://example.com/api");
    }
}
