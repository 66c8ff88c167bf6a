use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::auth::{AuthError, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated identity for the current request.
///
/// Only the gate creates one, after a token verified with a non-empty `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal(String);

impl Principal {
    fn from_claims(claims: Claims) -> Self {
        Self(claims.id)
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn into_id(self) -> String {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(ApiError::unauthorized)
    }
}

/// Bearer-token gate for protected routes.
///
/// Rejects with `401 {"error":"unauthorized"}` when the header is missing or
/// the token fails verification; otherwise attaches the [`Principal`] to the
/// request extensions and runs the next stage.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = match authenticate(&state, request.headers()) {
        Ok(principal) => principal,
        Err(err) => return ApiError::from(err).into_response(),
    };

    debug!(user_id = %principal.id(), "principal attached, handing off to route handler");
    request.extensions_mut().insert(principal);

    let response = next.run(request).await;
    debug!(status = %response.status(), "route handler completed");

    response
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Principal, AuthError> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::MissingCredential)?;

    // Non-ASCII header values cannot hold a valid token
    let value = header.to_str().map_err(|_| AuthError::InvalidCredential)?;
    let token = extract_token(value);

    let claims = state.verifier.verify(token).map_err(|reason| {
        debug!(%reason, "bearer token rejected");
        AuthError::InvalidCredential
    })?;

    Ok(Principal::from_claims(claims))
}

/// Credential value after the scheme: the text following the first space
fn extract_token(header_value: &str) -> &str {
    header_value
        .split_once(' ')
        .map(|(_, token)| token)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::issue_token;
    use crate::database::MemoryPostStore;
    use axum::{
        body::{to_bytes, Body},
        http::StatusCode,
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tower::ServiceExt;

    const SECRET: &str = "gate-test-secret";

    fn test_app(hits: Arc<AtomicUsize>) -> Router {
        let state = AppState::new(Arc::new(MemoryPostStore::new()), SECRET).unwrap();

        Router::new()
            .route(
                "/whoami",
                get(move |principal: Principal| {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        principal.into_id()
                    }
                }),
            )
            .route_layer(from_fn_with_state(state.clone(), require_auth))
            .with_state(state)
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn bearer(id: &str, secret: &str) -> String {
        let token = issue_token(&Claims::new(id, Some(1)).unwrap(), secret).unwrap();
        format!("Bearer {}", token)
    }

    async fn read_body(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn assert_unauthorized(response: Response) {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body, json!({ "error": "unauthorized" }));
    }

    #[test]
    fn extracts_text_after_first_space() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(extract_token("Token abc"), "abc");
        assert_eq!(extract_token("abc"), "");
        assert_eq!(extract_token("Bearer a b"), "a b");
    }

    #[tokio::test]
    async fn missing_header_is_rejected_before_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = test_app(hits.clone()).oneshot(request(None)).await.unwrap();

        assert_unauthorized(response).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_token_is_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = test_app(hits.clone())
            .oneshot(request(Some("Bearer not-a-real-token")))
            .await
            .unwrap();

        assert_unauthorized(response).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn header_without_space_is_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let token = issue_token(&Claims::new("user-42", Some(1)).unwrap(), SECRET).unwrap();
        let response = test_app(hits.clone()).oneshot(request(Some(&token))).await.unwrap();

        assert_unauthorized(response).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_token_reaches_handler_with_principal() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = test_app(hits.clone())
            .oneshot(request(Some(&bearer("user-42", SECRET))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, b"user-42");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            id: "user-42".to_string(),
            iat: Some(now - 7200),
            exp: Some(now - 3600),
        };
        let header = format!("Bearer {}", issue_token(&claims, SECRET).unwrap());

        let response = test_app(hits.clone()).oneshot(request(Some(&header))).await.unwrap();

        assert_unauthorized(response).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn token_signed_with_other_algorithm_is_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS512),
            &Claims::new("user-42", Some(1)).unwrap(),
            &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        let header = format!("Bearer {}", token);

        let response = test_app(hits.clone()).oneshot(request(Some(&header))).await.unwrap();

        assert_unauthorized(response).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn tampered_signature_matches_malformed_response() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = test_app(hits.clone());

        let forged = app
            .clone()
            .oneshot(request(Some(&bearer("user-42", "some-other-secret"))))
            .await
            .unwrap();
        let garbage = app
            .oneshot(request(Some("Bearer not-a-real-token")))
            .await
            .unwrap();

        assert_eq!(forged.status(), garbage.status());
        assert_eq!(read_body(forged).await, read_body(garbage).await);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn same_token_yields_same_principal() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = test_app(hits.clone());
        let header = bearer("user-42", SECRET);

        let first = app.clone().oneshot(request(Some(&header))).await.unwrap();
        let second = app.oneshot(request(Some(&header))).await.unwrap();

        assert_eq!(read_body(first).await, b"user-42");
        assert_eq!(read_body(second).await, b"user-42");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_requests_keep_their_own_principal() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = test_app(hits.clone());

        let alice = tokio::spawn(app.clone().oneshot(request(Some(&bearer("alice", SECRET)))));
        let bob = tokio::spawn(app.oneshot(request(Some(&bearer("bob", SECRET)))));

        let (alice, bob) = (alice.await.unwrap().unwrap(), bob.await.unwrap().unwrap());
        assert_eq!(read_body(alice).await, b"alice");
        assert_eq!(read_body(bob).await, b"bob");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn principal_extractor_rejects_without_gate() {
        let app: Router = Router::new().route(
            "/whoami",
            get(|principal: Principal| async move { principal.into_id() }),
        );
        let response = app.oneshot(request(None)).await.unwrap();

        assert_unauthorized(response).await;
    }
}
