use crate::{dto::MapPointResponse, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, instrument};

/// Current cache snapshot as map points. Never fails: an empty or stale
/// cache is served as-is.
#[instrument(skip(state), name = "api_get_map")]
pub async fn get_map(State(state): State<AppState>) -> Json<Vec<MapPointResponse>> {
    let points = state.get_map_snapshot.execute();

    debug!(points = points.len(), "Serving map snapshot");

    Json(points.into_iter().map(MapPointResponse::from).collect())
}

pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
