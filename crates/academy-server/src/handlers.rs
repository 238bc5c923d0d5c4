//! HTTP Handlers

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use academy_core::ContactForm;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub relay_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub id: String,
    pub received_at: DateTime<Utc>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        relay_configured: state.relay.is_some(),
    })
}

/// Consultation request endpoint
///
/// Accepts the contact form as `application/x-www-form-urlencoded`,
/// validates it and hands it to the configured form processor.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(payload): Form<ContactForm>,
) -> Result<(StatusCode, Json<ContactAccepted>), ApiError> {
    let relay = state
        .relay()
        .map_err(|e| api_error(StatusCode::SERVICE_UNAVAILABLE, e.user_message(), e.code()))?;

    let form = payload.validate().map_err(|e| {
        tracing::debug!("Rejected consultation request: {}", e);
        api_error(StatusCode::UNPROCESSABLE_ENTITY, e.user_message(), e.code())
    })?;

    let id = uuid::Uuid::new_v4().to_string();

    relay.forward(&form).await.map_err(|e| {
        tracing::error!(relay = relay.name(), %id, "Contact relay error: {}", e);
        api_error(StatusCode::BAD_GATEWAY, e.user_message(), e.code())
    })?;

    tracing::info!(relay = relay.name(), %id, "Consultation request forwarded");

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactAccepted {
            id,
            received_at: Utc::now(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, header},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::relay::MemoryContactRelay;

    const VALID_BODY: &str =
        "name=Sofia+H.&email=sofia%40example.com&phone=&test_date=June+28%2C+2026&message=Stuck+at+508";

    fn contact_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = crate::router(AppState::default(), Path::new("static"));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["relay_configured"], false);
    }

    #[tokio::test]
    async fn test_contact_forwarded() {
        let relay = Arc::new(MemoryContactRelay::new());
        let app = crate::router(AppState::with_relay(relay.clone()), Path::new("static"));

        let response = app.oneshot(contact_request(VALID_BODY)).await.unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let json = json_body(response).await;
        assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));

        let submissions = relay.submissions().await;
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].email, "sofia@example.com");
        assert_eq!(submissions[0].phone, None);
        assert_eq!(submissions[0].test_date.as_deref(), Some("June 28, 2026"));
    }

    #[tokio::test]
    async fn test_contact_missing_message() {
        let relay = Arc::new(MemoryContactRelay::new());
        let app = crate::router(AppState::with_relay(relay.clone()), Path::new("static"));

        let response = app
            .oneshot(contact_request("name=Sofia&email=sofia%40example.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert_eq!(json["code"], "MISSING_FIELD");
        assert!(relay.submissions().await.is_empty());
    }

    #[tokio::test]
    async fn test_contact_bad_email() {
        let app = crate::router(
            AppState::with_relay(Arc::new(MemoryContactRelay::new())),
            Path::new("static"),
        );

        let response = app
            .oneshot(contact_request("name=Sofia&email=sofia&message=hi"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["code"], "INVALID_EMAIL");
    }

    #[tokio::test]
    async fn test_contact_without_relay() {
        let app = crate::router(AppState::default(), Path::new("static"));

        let response = app.oneshot(contact_request(VALID_BODY)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["code"], "CONTACT_DISABLED");
    }

    #[tokio::test]
    async fn test_contact_upstream_failure() {
        let app = crate::router(
            AppState::with_relay(Arc::new(MemoryContactRelay::rejecting(500))),
            Path::new("static"),
        );

        let response = app.oneshot(contact_request(VALID_BODY)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["code"], "RELAY_ERROR");
    }
}
