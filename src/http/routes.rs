//! HTTP route definitions

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::debug;
use uuid::Uuid;

use crate::app::AppState;
use crate::game::validate::join_errors;
use crate::game::{
    advance, random_fruit, validate_move_set, validate_state, GameState, Snake, Submission,
    ValidationError,
};
use crate::util::time::uptime_secs;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    // CORS configuration - support multiple origins (comma-separated in CLIENT_ORIGIN)
    let allowed_origins: Vec<header::HeaderValue> = state
        .config
        .client_origin
        .split(',')
        .filter_map(|s| s.trim().parse::<header::HeaderValue>().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // The game client itself is plain static files mounted at the root
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health_handler))
        .route("/new", get(new_game_handler))
        .route("/validate", post(validate_handler))
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ============================================================================
// Health endpoint
// ============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_secs: u64,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: uptime_secs(),
    })
}

// ============================================================================
// Game endpoints
// ============================================================================

#[derive(Deserialize)]
struct NewGameParams {
    w: i32,
    h: i32,
}

/// `GET /new?w=<width>&h=<height>` - issue a fresh game state
async fn new_game_handler(
    State(state): State<AppState>,
    params: Result<Query<NewGameParams>, QueryRejection>,
) -> Result<Json<GameState>, AppError> {
    let Query(params) = params.map_err(|e| AppError::MalformedRequest(e.body_text()))?;

    if params.w <= 0 || params.h <= 0 {
        return Err(AppError::MalformedRequest(
            "board dimensions must be positive".to_string(),
        ));
    }

    let fruit = state
        .fruit_rng
        .with(|rng| random_fruit(params.w, params.h, rng));

    let game = GameState {
        game_id: Uuid::new_v4().to_string(),
        width: params.w,
        height: params.h,
        score: 0,
        fruit,
        snake: Snake {
            x: 0,
            y: 0,
            vel_x: 1,
            vel_y: 0,
        },
    };

    debug!(game_id = %game.game_id, width = game.width, height = game.height, "new game issued");
    Ok(Json(game))
}

/// `POST /validate` - gate a submission through both validators, then advance
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<Json<Submission>, AppError> {
    let Json(submission) = payload.map_err(|e| AppError::MalformedRequest(e.body_text()))?;

    let errors = validate_state(&submission);
    if !errors.is_empty() {
        debug!(
            game_id = %submission.recv_state.game_id,
            count = errors.len(),
            "submission rejected: inconsistent state"
        );
        return Err(AppError::StateInconsistency(errors));
    }

    let recv = &submission.recv_state;
    let errors = validate_move_set(
        recv.snake.position(),
        &submission.ticks,
        recv.width,
        recv.height,
        state.config.grid_step,
    );
    if !errors.is_empty() {
        debug!(
            game_id = %recv.game_id,
            count = errors.len(),
            "submission rejected: illegal move set"
        );
        return Err(AppError::RuleViolation(errors));
    }

    let next = state.fruit_rng.with(|rng| advance(recv, rng));
    debug!(game_id = %next.game_id, score = next.score, "submission accepted");

    Ok(Json(Submission {
        recv_state: next,
        ticks: Vec::new(),
    }))
}

// ============================================================================
// Error handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    MalformedRequest(String),

    #[error("inconsistent game state")]
    StateInconsistency(Vec<ValidationError>),

    #[error("board rule violation")]
    RuleViolation(Vec<ValidationError>),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            AppError::MalformedRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::StateInconsistency(errors) => (StatusCode::BAD_REQUEST, join_errors(errors)),
            // A distinct status so clients can tell a rule violation apart
            // from a malformed submission.
            AppError::RuleViolation(errors) => (StatusCode::IM_A_TEAPOT, join_errors(errors)),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, body).into_response()
    }
}
