//! HTTP Basic Authentication for the host page and host WebSocket

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

use crate::types::Role;
use crate::ws::WsQuery;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Username for host panel (None = auth disabled)
    pub username: Option<String>,
    /// Password for host panel
    pub password: Option<String>,
}

impl AuthConfig {
    /// Load auth config from environment variables
    /// HOST_USERNAME and HOST_PASSWORD must both be set to enable auth
    pub fn from_env() -> Self {
        let username = std::env::var("HOST_USERNAME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let password = std::env::var("HOST_PASSWORD")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if username.is_some() && password.is_some() {
            tracing::info!("Host authentication enabled");
            Self { username, password }
        } else {
            if username.is_some() || password.is_some() {
                tracing::warn!(
                    "HOST_USERNAME and HOST_PASSWORD must both be set to enable authentication"
                );
            }
            tracing::warn!("Host authentication DISABLED - anyone can run the hunt");
            Self::disabled()
        }
    }

    pub fn disabled() -> Self {
        Self {
            username: None,
            password: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    pub fn validate(&self, username: &str, password: &str) -> bool {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => {
                constant_time_eq(u.as_bytes(), username.as_bytes())
                    && constant_time_eq(p.as_bytes(), password.as_bytes())
            }
            _ => true,
        }
    }

    /// Check an `Authorization: Basic ...` header value
    pub fn validate_header(&self, value: &str) -> bool {
        let Some(credentials) = value.strip_prefix("Basic ") else {
            return false;
        };
        let Ok(decoded) = STANDARD.decode(credentials.trim()) else {
            return false;
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            return false;
        };
        match decoded.split_once(':') {
            Some((username, password)) => self.validate(username, password),
            None => false,
        }
    }

    fn authorizes(&self, request: &Request<Body>) -> bool {
        request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .is_some_and(|h| self.validate_header(h))
    }
}

/// Constant-time byte comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

fn unauthorized(realm: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, format!("Basic realm=\"{}\"", realm))],
        "Unauthorized",
    )
        .into_response()
}

/// Middleware for HTTP Basic Authentication on host routes
pub async fn host_auth_middleware(
    State(auth_config): State<Arc<AuthConfig>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !auth_config.is_enabled() || auth_config.authorizes(&request) {
        return next.run(request).await;
    }
    unauthorized("Treasure Hunt Host")
}

/// Decode the query exactly as the upgrade handler will.
///
/// A query the extractor cannot parse never reaches the handler, so it is
/// treated as a host request and must authenticate.
fn requests_host_role(request: &Request<Body>) -> bool {
    match Query::<WsQuery>::try_from_uri(request.uri()) {
        Ok(Query(params)) => params.role() == Role::Host,
        Err(_) => true,
    }
}

/// Middleware to require HTTP Basic Auth for host WebSocket connections.
///
/// Viewers connect without credentials; only `/ws?role=host` is guarded.
pub async fn host_ws_auth_middleware(
    State(auth_config): State<Arc<AuthConfig>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !requests_host_role(&request) {
        return next.run(request).await;
    }

    if !auth_config.is_enabled() {
        tracing::warn!(
            "Host WebSocket requested but host authentication is DISABLED; set HOST_USERNAME and HOST_PASSWORD"
        );
        return next.run(request).await;
    }

    if auth_config.authorizes(&request) {
        return next.run(request).await;
    }
    unauthorized("Treasure Hunt Host (WebSocket)")
}

/// Keep the static fallback from serving host.html around the auth layer
pub async fn redirect_host_html() -> Redirect {
    Redirect::temporary("/host")
}
