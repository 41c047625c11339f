use crate::auth::jwt::decode_token;
use crate::auth::models::Session;
use crate::state::AuthState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use museum_core::constants::MASTER_KEY_SUBJECT;
use std::sync::Arc;
use subtle::ConstantTimeEq;

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Resolve the caller from the `Authorization` header.
///
/// Never fails: any credential that cannot be verified yields [`Session::Anonymous`],
/// leaving it to each operation to decide whether anonymous callers are allowed.
pub fn resolve_session(headers: &HeaderMap, auth_state: &AuthState) -> Session {
    let Some(auth_header) = headers.get("Authorization") else {
        return Session::Anonymous;
    };

    let Some(token) = auth_header
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
    else {
        tracing::warn!("Ignoring malformed authorization header");
        return Session::Anonymous;
    };

    if let Some(master_api_key) = &auth_state.master_api_key {
        if secure_compare(token, master_api_key) {
            return Session::Authenticated {
                subject: MASTER_KEY_SUBJECT.to_string(),
            };
        }
    }

    match decode_token(token, &auth_state.jwt_secret) {
        Ok(claims) => Session::Authenticated { subject: claims.sub },
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring invalid bearer token");
            Session::Anonymous
        }
    }
}

/// Attach a [`Session`] to every request. Requests are never rejected here.
pub async fn identify_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = resolve_session(request.headers(), &auth_state);
    if let Some(subject) = session.subject() {
        tracing::debug!(subject = %subject, "Request authenticated");
    }
    request.extensions_mut().insert(session);
    next.run(request).await
}
