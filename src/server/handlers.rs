//! Request Handlers

use axum::{Json, extract::State, response::Html};
use tracing::debug;

use crate::core::data::Profile;
use crate::server::state::AppState;
use crate::utils::error::AppResult;

/// Handler for the home page.
///
/// The inbound request is never inspected; every call renders the same page.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = state.renderer().render_home(state.profile())?;
    debug!(bytes = html.len(), "rendered home page");
    Ok(Html(html))
}

/// Handler for the profile JSON API.
pub async fn profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile().clone())
}
