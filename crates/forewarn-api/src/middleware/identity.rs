use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use forewarn_core::ANONYMOUS_USER;

/// Identity resolution middleware.
///
/// The upstream gateway authenticates callers and forwards the resolved
/// user id in the `x-forewarn-user` header. A missing, empty, or unreadable
/// header resolves to the anonymous sentinel; handlers that need a real
/// user reject it themselves. Auth mechanics live entirely at the gateway.
pub async fn resolve_identity(mut req: Request, next: Next) -> Response {
    let user_id = req
        .headers()
        .get("x-forewarn-user")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(ANONYMOUS_USER)
        .to_string();

    req.extensions_mut().insert(Identity { user_id });

    next.run(req).await
}

/// Resolved request identity, inserted into request extensions.
#[derive(Clone, Debug)]
pub struct Identity {
    pub user_id: String,
}

impl Identity {
    pub fn is_anonymous(&self) -> bool {
        self.user_id == ANONYMOUS_USER
    }
}
