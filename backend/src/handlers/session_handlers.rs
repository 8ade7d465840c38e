use axum::{extract::State, Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::handlers::auth_middleware::Session;
use crate::AppState;

#[derive(Serialize, Debug, PartialEq)]
pub struct SessionResponse {
    pub configured: bool,
    pub signed_in: bool,
    pub user_id: Option<String>,
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    session: Option<Extension<Session>>,
) -> Json<SessionResponse> {
    let user_id = session
        .as_ref()
        .and_then(|Extension(session)| session.user_id())
        .map(str::to_owned);

    Json(SessionResponse {
        configured: state.verifier.is_some(),
        signed_in: user_id.is_some(),
        user_id,
    })
}
