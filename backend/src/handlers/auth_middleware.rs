use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::AppState;

pub const SESSION_COOKIE: &str = "__session";

/// Internal bundle assets served by trunk.
const BUNDLE_PREFIX: &str = "/pkg/";

static STATIC_ASSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\.(?:html?|css|js|jpe?g|webp|png|gif|svg|ttf|woff2?|ico|csv|docx?|xlsx?|zip|webmanifest|wasm)$",
    )
    .expect("static asset pattern is valid")
});

/// Whether the session gate runs for a request path.
pub fn is_gated_path(path: &str) -> bool {
    if is_under(path, "/api") || is_under(path, "/trpc") {
        return true;
    }
    !path.starts_with(BUNDLE_PREFIX) && !STATIC_ASSET.is_match(path)
}

fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .map(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    SignedIn {
        user_id: String,
        session_id: Option<String>,
    },
    SignedOut,
}

impl Session {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Session::SignedIn { user_id, .. } => Some(user_id),
            Session::SignedOut => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: String,
    sid: Option<String>,
}

#[derive(Debug, Error)]
pub enum GateError {
    #[error("invalid session verification key: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct SessionVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    /// Verifier for RS256 tokens signed by the identity provider.
    pub fn from_rsa_pem(pem: &str) -> Result<Self, GateError> {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())?;
        Ok(Self::new(key, Algorithm::RS256))
    }

    pub fn new(key: DecodingKey, algorithm: Algorithm) -> Self {
        Self {
            key,
            validation: Validation::new(algorithm),
        }
    }

    /// Any token that fails verification is a signed-out session.
    pub fn verify(&self, token: &str) -> Session {
        match decode::<SessionClaims>(token, &self.key, &self.validation) {
            Ok(data) => Session::SignedIn {
                user_id: data.claims.sub,
                session_id: data.claims.sid,
            },
            Err(e) => {
                debug!("Session token rejected: {}", e);
                Session::SignedOut
            }
        }
    }
}

/// Bearer header first, then the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|token| !token.is_empty())
}

/// Annotates gated requests with a `Session` extension. Never rejects.
pub async fn session_gate(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(verifier) = state.verifier.as_ref() else {
        return next.run(request).await;
    };

    if is_gated_path(request.uri().path()) {
        let session = match session_token(request.headers()) {
            Some(token) => verifier.verify(token),
            None => Session::SignedOut,
        };
        if let Session::SignedIn { user_id, session_id } = &session {
            info!(
                "Signed-in request for {} from {} (session {})",
                request.uri().path(),
                user_id,
                session_id.as_deref().unwrap_or("-")
            );
        }
        request.extensions_mut().insert(session);
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    const SECRET: &[u8] = b"test-secret";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: &'a str,
        sid: &'a str,
        exp: usize,
    }

    fn far_future() -> usize {
        4_102_444_800 // 2100-01-01
    }

    fn token(secret: &[u8], exp: usize) -> String {
        encode(
            &Header::default(),
            &TestClaims { sub: "user_2abc", sid: "sess_1", exp },
            &EncodingKey::from_secret(secret),
        )
        .expect("token encodes")
    }

    fn verifier() -> SessionVerifier {
        SessionVerifier::new(DecodingKey::from_secret(SECRET), Algorithm::HS256)
    }

    #[test]
    fn api_and_trpc_are_gated() {
        assert!(is_gated_path("/api"));
        assert!(is_gated_path("/api/session"));
        assert!(is_gated_path("/trpc/user.get"));
        assert!(is_gated_path("/api/export.csv"));
    }

    #[test]
    fn pages_are_gated() {
        assert!(is_gated_path("/"));
        assert!(is_gated_path("/reviews"));
        assert!(is_gated_path("/data.json"));
        assert!(is_gated_path("/apiary"));
    }

    #[test]
    fn static_assets_pass_through() {
        for path in [
            "/index.html",
            "/styles.css",
            "/audio/../logo.svg",
            "/fonts/pretendard.woff2",
            "/favicon.ico",
            "/site.webmanifest",
            "/images/hero.jpeg",
        ] {
            assert!(!is_gated_path(path), "{path} should not be gated");
        }
    }

    #[test]
    fn bundle_paths_pass_through() {
        assert!(!is_gated_path("/pkg/dreamnatural-frontend_bg.wasm"));
        assert!(!is_gated_path("/pkg/chunk"));
    }

    #[test]
    fn valid_token_is_signed_in() {
        let session = verifier().verify(&token(SECRET, far_future()));
        assert_eq!(
            session,
            Session::SignedIn {
                user_id: "user_2abc".into(),
                session_id: Some("sess_1".into()),
            }
        );
        assert_eq!(session.user_id(), Some("user_2abc"));
    }

    #[test]
    fn expired_or_foreign_tokens_are_signed_out() {
        assert_eq!(verifier().verify(&token(SECRET, 1_000)), Session::SignedOut);
        assert_eq!(
            verifier().verify(&token(b"other-secret", far_future())),
            Session::SignedOut
        );
        assert_eq!(verifier().verify("not-a-jwt"), Session::SignedOut);
    }

    #[test]
    fn malformed_pem_is_an_error() {
        assert!(matches!(
            SessionVerifier::from_rsa_pem("not a key"),
            Err(GateError::InvalidKey(_))
        ));
    }

    #[test]
    fn token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        headers.insert(header::COOKIE, HeaderValue::from_static("__session=cookie.tok"));
        assert_eq!(session_token(&headers), Some("abc.def"));
    }

    #[test]
    fn token_from_session_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; __session=cookie.tok; other=1"),
        );
        assert_eq!(session_token(&headers), Some("cookie.tok"));
    }

    #[test]
    fn no_token_without_credentials() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("__session_other=x"));
        assert_eq!(session_token(&headers), None);
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic Zm9v"));
        assert_eq!(session_token(&headers), None);
    }
}
