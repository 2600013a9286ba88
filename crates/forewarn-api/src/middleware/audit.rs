use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use forewarn_core::ANONYMOUS_USER;

use super::identity::Identity;

/// Audit logging middleware.
///
/// Emits one structured `api_request` event per request with the resolved
/// caller attached, so anonymous and signed-in traffic can be separated in
/// the log pipeline. Runs inside [`super::identity::resolve_identity`],
/// which inserts the [`Identity`] extension this reads.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let identity = req.extensions().get::<Identity>().cloned();
    let (user_id, anonymous) = match &identity {
        Some(identity) => (identity.user_id.as_str(), identity.is_anonymous()),
        // Only reachable if the identity layer is missing from the stack.
        None => (ANONYMOUS_USER, true),
    };
    let user_id = user_id.to_string();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        user_id = %user_id,
        anonymous = anonymous,
        "api_request"
    );

    response
}
