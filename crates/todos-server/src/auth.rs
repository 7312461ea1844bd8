use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Controls the shared-token gate in front of the API.
///
/// When `token` is `None` the middleware is a transparent no-op — all
/// requests pass through. The session subsystem proper lives outside this
/// service; this gate only keeps non-local requests out until they present
/// the token once.
#[derive(Clone)]
pub struct AuthConfig {
    pub token: Option<String>,
}

impl AuthConfig {
    /// No token configured — middleware passes all requests through.
    pub fn none() -> Self {
        Self { token: None }
    }

    /// Gate requests behind the given shared token.
    pub fn with_token(token: String) -> Self {
        Self { token: Some(token) }
    }
}

/// Axum middleware gating requests behind a shared token.
///
/// Auth flow (evaluated in order):
/// 1. `token` is `None` → passthrough
/// 2. `Host` header is `localhost` or `127.0.0.1` → passthrough
/// 3. Cookie `todos_auth` matches token → passthrough
/// 4. Query param `?auth=TOKEN` matches → set session cookie, 302 to the
///    same path without the param
/// 5. None matched → 401 (JSON for `/api/*`, HTML for everything else)
pub async fn auth_middleware(
    State(config): State<Arc<AuthConfig>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(token) = config.token.clone() else {
        return next.run(req).await;
    };

    // Local access is always allowed regardless of token.
    let host_value = req
        .headers()
        .get("host")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bare_host = host_value.split(':').next().unwrap_or(&host_value);
    if bare_host == "localhost" || bare_host == "127.0.0.1" {
        return next.run(req).await;
    }

    // Valid session cookie — allow.
    if let Some(cookies) = req.headers().get("cookie").and_then(|v| v.to_str().ok()) {
        for part in cookies.split(';') {
            if let Some(val) = part.trim().strip_prefix("todos_auth=") {
                if val == token {
                    return next.run(req).await;
                }
            }
        }
    }

    // One-time bootstrap via `?auth=TOKEN` — set cookie and redirect.
    let uri = req.uri().clone();
    if let Some(query) = uri.query() {
        if let Some(val) = extract_auth_param(query) {
            if val == token {
                let destination = strip_auth_param(uri.path(), query);
                let cookie = format!("todos_auth={token}; HttpOnly; SameSite=Lax; Path=/");
                return Response::builder()
                    .status(302)
                    .header("Location", destination)
                    .header("Set-Cookie", cookie)
                    .body(Body::empty())
                    .expect("infallible: all header values are valid ASCII");
            }
        }
    }

    // Unauthorized — JSON for API routes, HTML for everything else.
    if req.uri().path().starts_with("/api/") {
        Response::builder()
            .status(401)
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"error":"unauthorized"}"#))
            .expect("infallible: all header values are valid ASCII")
    } else {
        Response::builder()
            .status(401)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(Body::from(concat!(
                "<!DOCTYPE html><html><head><title>Access Denied</title></head>",
                "<body style=\"font-family:sans-serif;padding:2rem\">",
                "<h1>Access Denied</h1>",
                "<p>Ask an administrator for an access link to the todos UI.</p>",
                "</body></html>",
            )))
            .expect("infallible: all header values are valid ASCII")
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn extract_auth_param(query: &str) -> Option<&str> {
    query.split('&').find_map(|kv| kv.strip_prefix("auth="))
}

fn strip_auth_param(path: &str, query: &str) -> String {
    let remaining: Vec<&str> = query
        .split('&')
        .filter(|kv| !kv.starts_with("auth="))
        .collect();
    if remaining.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, remaining.join("&"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
