use anyhow::Context;
use axum::{middleware, routing::get, Router};
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

mod config;
mod handlers {
    pub mod auth_middleware;
    pub mod session_handlers;
}

use config::Config;
use handlers::auth_middleware::{session_gate, SessionVerifier};
use handlers::session_handlers;

pub struct AppState {
    pub config: Config,
    /// Present only when identity is configured.
    pub verifier: Option<SessionVerifier>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let verifier = match &config.identity {
            Some(identity) => Some(
                SessionVerifier::from_rsa_pem(&identity.jwt_key)
                    .context("failed to load CLERK_JWT_KEY")?,
            ),
            None => None,
        };
        Ok(Self { config, verifier })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    let static_files = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(session_handlers::health_check))
        .route("/api/session", get(session_handlers::get_session))
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(state.clone(), session_gate))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION])
                .expose_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if let Some(identity) = &config.identity {
        let key_prefix: String = identity.publishable_key.chars().take(8).collect();
        info!("Identity configured ({}...), session gate enabled", key_prefix);
    } else {
        info!("Identity not configured, session gate disabled");
    }

    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use crate::config::IdentityConfig;
    use http_body_util::BodyExt;
    use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header};
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tower::ServiceExt;

    const SECRET: &[u8] = b"router-secret";

    fn config() -> Config {
        Config {
            identity: None,
            static_dir: PathBuf::from("does-not-exist"),
            bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
        }
    }

    fn unconfigured() -> Router {
        build_router(Arc::new(AppState { config: config(), verifier: None }))
    }

    fn configured() -> Router {
        let mut config = config();
        config.identity = Some(IdentityConfig {
            publishable_key: "pk_test_x".into(),
            jwt_key: String::new(),
        });
        build_router(Arc::new(AppState {
            config,
            verifier: Some(SessionVerifier::new(
                DecodingKey::from_secret(SECRET),
                Algorithm::HS256,
            )),
        }))
    }

    fn session_token() -> String {
        encode(
            &Header::default(),
            &json!({ "sub": "user_2abc", "sid": "sess_1", "exp": 4_102_444_800u64 }),
            &EncodingKey::from_secret(SECRET),
        )
        .expect("token encodes")
    }

    async fn get_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    fn session_request() -> axum::http::request::Builder {
        Request::builder().uri("/api/session")
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let response = unconfigured()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn unconfigured_session_passes_through() {
        let request = session_request()
            .header(header::AUTHORIZATION, format!("Bearer {}", session_token()))
            .body(Body::empty())
            .unwrap();
        let (status, body) = get_json(unconfigured(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "configured": false, "signed_in": false, "user_id": null }));
    }

    #[tokio::test]
    async fn configured_without_token_is_signed_out() {
        let (status, body) = get_json(configured(), session_request().body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "configured": true, "signed_in": false, "user_id": null }));
    }

    #[tokio::test]
    async fn configured_with_cookie_is_signed_in() {
        let request = session_request()
            .header(header::COOKIE, format!("__session={}", session_token()))
            .body(Body::empty())
            .unwrap();
        let (_, body) = get_json(configured(), request).await;
        assert_eq!(body, json!({ "configured": true, "signed_in": true, "user_id": "user_2abc" }));
    }

    #[tokio::test]
    async fn invalid_token_is_not_rejected() {
        let request = session_request()
            .header(header::AUTHORIZATION, "Bearer forged.token.value")
            .body(Body::empty())
            .unwrap();
        let (status, body) = get_json(configured(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["signed_in"], json!(false));
    }

    #[tokio::test]
    async fn missing_static_file_is_not_found() {
        let response = configured()
            .oneshot(Request::builder().uri("/styles.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
