//! Contact Relay
//!
//! Forwards validated consultation requests to the external form
//! processor as `application/x-www-form-urlencoded`.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use academy_core::ContactForm;

pub type Result<T> = std::result::Result<T, RelayError>;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("No form processor configured")]
    NotConfigured,

    #[error("Form processor returned {0}")]
    Upstream(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl RelayError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotConfigured => "Contact form not configured",
            Self::Upstream(_) | Self::Network(_) => {
                "We couldn't send your request right now. Please email us instead."
            }
        }
    }

    /// Machine-readable code for API error bodies
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "CONTACT_DISABLED",
            Self::Upstream(_) | Self::Network(_) => "RELAY_ERROR",
        }
    }
}

/// Destination for consultation requests (Strategy pattern)
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Deliver one normalized submission
    async fn forward(&self, form: &ContactForm) -> Result<()>;

    /// Relay name for logs
    fn name(&self) -> &str;
}

/// Posts submissions to a hosted form processor (Formspree or similar)
pub struct HttpContactRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactRelay {
    /// Relay to `endpoint`, giving up on any request after `timeout`
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ContactRelay for HttpContactRelay {
    async fn forward(&self, form: &ContactForm) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!(%status, endpoint = %self.endpoint, "form processor rejected submission");
            Err(RelayError::Upstream(status.as_u16()))
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Keeps submissions in memory
#[cfg(test)]
#[derive(Default)]
pub struct MemoryContactRelay {
    submissions: tokio::sync::Mutex<Vec<ContactForm>>,
    reject_with: Option<u16>,
}

#[cfg(test)]
impl MemoryContactRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay whose upstream always answers with `status`
    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::default()
        }
    }

    /// Everything accepted so far
    pub async fn submissions(&self) -> Vec<ContactForm> {
        self.submissions.lock().await.clone()
    }
}

#[cfg(test)]
#[async_trait]
impl ContactRelay for MemoryContactRelay {
    async fn forward(&self, form: &ContactForm) -> Result<()> {
        if let Some(status) = self.reject_with {
            return Err(RelayError::Upstream(status));
        }
        self.submissions.lock().await.push(form.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jason M.".into(),
            email: "jason@example.com".into(),
            message: "B/B plateau".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_memory_relay_records() {
        let relay = MemoryContactRelay::new();
        relay.forward(&form()).await.unwrap();
        assert_eq!(relay.submissions().await, vec![form()]);
    }

    #[tokio::test]
    async fn test_memory_relay_rejects() {
        let relay = MemoryContactRelay::rejecting(500);
        let err = relay.forward(&form()).await.unwrap_err();
        assert!(matches!(err, RelayError::Upstream(500)));
        assert!(relay.submissions().await.is_empty());
    }

    #[tokio::test]
    async fn test_http_relay_times_out() {
        // Accepts the connection but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let relay =
            HttpContactRelay::new(format!("http://{addr}/f/test"), Duration::from_millis(200))
                .unwrap();
        let started = std::time::Instant::now();
        let err = relay.forward(&form()).await.unwrap_err();

        assert!(matches!(&err, RelayError::Network(e) if e.is_timeout()));
        assert_eq!(err.code(), "RELAY_ERROR");
        assert!(started.elapsed() < Duration::from_secs(3));
        server.abort();
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RelayError::NotConfigured.code(), "CONTACT_DISABLED");
        assert_eq!(RelayError::Upstream(500).code(), "RELAY_ERROR");
    }
}
