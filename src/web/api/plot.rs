use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::groundtrack::{self, Plot, PlotRequest, SessionSummary};
use crate::render::Canvas;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::{AppState, Workspace};

#[utoipa::path(
    post,
    path = "/api/plot",
    tag = "plot",
    request_body = PlotRequest,
    responses(
        (status = 200, description = "Track computed and drawn", body = Plot),
        (status = 400, description = "Invalid request fields", body = ErrorResponse),
        (status = 422, description = "TLE rejected or propagation failed", body = ErrorResponse),
        (status = 500, description = "Drawing failed", body = ErrorResponse)
    )
)]
pub async fn plot(
    State(state): State<AppState>,
    Json(request): Json<PlotRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut workspace = state.workspace.lock().await;
    let Workspace { session, canvas } = &mut *workspace;

    let plot = groundtrack::plot(&request, &state.settings, session, canvas)?;

    Ok((StatusCode::OK, Json(plot)))
}

#[utoipa::path(
    post,
    path = "/api/clear",
    tag = "plot",
    responses(
        (status = 200, description = "Session reset and canvas cleared", body = SessionSummary)
    )
)]
pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    let mut workspace = state.workspace.lock().await;
    workspace.reset();
    log::info!("session cleared");

    (StatusCode::OK, Json(workspace.session.summary()))
}

#[utoipa::path(
    get,
    path = "/api/session",
    tag = "plot",
    responses(
        (status = 200, description = "Epochs accumulated since the last clear", body = SessionSummary)
    )
)]
pub async fn session(State(state): State<AppState>) -> impl IntoResponse {
    let workspace = state.workspace.lock().await;
    Json(workspace.session.summary())
}

#[utoipa::path(
    get,
    path = "/api/canvas",
    tag = "plot",
    responses(
        (status = 200, description = "Every plot currently drawn", body = Canvas)
    )
)]
pub async fn canvas(State(state): State<AppState>) -> impl IntoResponse {
    let workspace = state.workspace.lock().await;
    Json(workspace.canvas.clone())
}
