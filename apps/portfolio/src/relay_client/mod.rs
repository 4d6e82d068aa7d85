/// Form relay client — the single point of entry for outbound contact messages.
///
/// The relay (Formspree by default) accepts the contact form as JSON and
/// forwards it as an email. This module only moves bytes: it reports the raw
/// status and body and leaves the success/failure interpretation to the
/// contact controller.
use async_trait::async_trait;
use reqwest::{header, Client};
use thiserror::Error;
use tracing::debug;

use crate::contact::ContactFormFields;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// What the relay answered, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    /// Mirrors the fetch `ok` flag: any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The relay seam. Carried in `AppState` as `Arc<dyn FormRelay>` so tests can
/// swap in a canned relay without touching handlers or the controller.
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Sends one submission. Exactly one HTTP attempt, no retries.
    async fn send(&self, fields: &ContactFormFields) -> Result<RelayResponse, RelayError>;
}

/// `FormRelay` backed by an HTTP endpoint such as `https://formspree.io/f/<id>`.
#[derive(Clone)]
pub struct HttpFormRelay {
    client: Client,
    endpoint: String,
}

impl HttpFormRelay {
    /// No request timeout is configured; the transport default applies.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn send(&self, fields: &ContactFormFields) -> Result<RelayResponse, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(fields)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Form relay answered {} ({} bytes)", status, body.len());

        Ok(RelayResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Router};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Captured {
        accept: Option<String>,
        content_type: Option<String>,
        body: Option<String>,
    }

    /// Spawns a throwaway relay on 127.0.0.1 that records the request and
    /// answers with the given status and body.
    async fn spawn_relay(status: StatusCode, reply: &'static str) -> (String, Arc<Mutex<Captured>>) {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let sink = captured.clone();
        let app = Router::new().route(
            "/f/test",
            post(move |headers: HeaderMap, body: String| {
                let sink = sink.clone();
                async move {
                    let mut c = sink.lock().unwrap();
                    c.accept = headers
                        .get("accept")
                        .map(|v| v.to_str().unwrap().to_string());
                    c.content_type = headers
                        .get("content-type")
                        .map(|v| v.to_str().unwrap().to_string());
                    c.body = Some(body);
                    (status, reply)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/f/test"), captured)
    }

    fn jane() -> ContactFormFields {
        ContactFormFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_json_with_expected_headers() {
        let (url, captured) = spawn_relay(StatusCode::OK, r#"{"ok":true}"#).await;
        let relay = HttpFormRelay::new(url);

        let response = relay.send(&jane()).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(response.is_success());

        let c = captured.lock().unwrap();
        assert_eq!(c.accept.as_deref(), Some("application/json"));
        assert_eq!(c.content_type.as_deref(), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(c.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "subject": "Hello",
                "message": "Hi there"
            })
        );
    }

    #[tokio::test]
    async fn test_send_passes_rejections_through_untouched() {
        let (url, _) = spawn_relay(StatusCode::BAD_REQUEST, r#"{"error":"bad request"}"#).await;
        let relay = HttpFormRelay::new(url);

        let response = relay.send(&jane()).await.unwrap();
        assert_eq!(response.status, 400);
        assert!(!response.is_success());
        assert_eq!(response.body, r#"{"error":"bad request"}"#);
    }

    #[tokio::test]
    async fn test_send_reports_connection_refused_as_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let relay = HttpFormRelay::new(format!("http://{addr}/f/test"));
        let err = relay.send(&jane()).await.unwrap_err();
        assert!(matches!(err, RelayError::Http(_)));
    }

    #[test]
    fn test_is_success_covers_whole_2xx_range() {
        let r = |status| RelayResponse {
            status,
            body: String::new(),
        };
        assert!(r(200).is_success());
        assert!(r(204).is_success());
        assert!(r(299).is_success());
        assert!(!r(199).is_success());
        assert!(!r(302).is_success());
        assert!(!r(500).is_success());
    }
}
