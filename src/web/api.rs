use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{DistanceVector, ShortestPathEngine};
use crate::web::models::*;
use crate::Error;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

/// Maps engine errors onto HTTP responses
fn engine_error(err: Error) -> ApiError {
    match &err {
        Error::InvalidGraph { row, expected, found } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_graph".to_string(),
                message: err.to_string(),
                details: Some(serde_json::json!({
                    "row": row,
                    "expected": expected,
                    "found": found,
                })),
            }),
        ),
        Error::OutOfRange { vertex, vertex_count } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "source_out_of_range".to_string(),
                message: err.to_string(),
                details: Some(serde_json::json!({
                    "vertex": vertex,
                    "vertex_count": vertex_count,
                })),
            }),
        ),
        other => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "engine_failure",
            other.to_string(),
        ),
    }
}

fn session_not_found(session_id: Uuid) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "session_not_found",
        format!("Session {} not found", session_id),
    )
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    max_sessions: usize,
    session_timeout_minutes: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_limits(1000, 60)
    }

    /// State that keeps at most `max_sessions` graphs, each for at most
    /// `session_timeout_minutes` (0 keeps them until deleted).
    pub fn with_limits(max_sessions: usize, session_timeout_minutes: u64) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            session_timeout_minutes,
        }
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
    }

    fn engine(&self, session_id: Uuid) -> Result<Arc<ShortestPathEngine<f64>>, ApiError> {
        let sessions = self.lock_sessions()?;
        sessions
            .get(&session_id)
            .map(|session| Arc::clone(&session.engine))
            .ok_or_else(|| session_not_found(session_id))
    }
}

/// Drops sessions older than the configured timeout
fn prune_expired(sessions: &mut HashMap<Uuid, Session>, timeout_minutes: u64) {
    if timeout_minutes == 0 {
        return;
    }
    let timeout = i64::try_from(timeout_minutes).unwrap_or(i64::MAX);
    let now = Utc::now();
    let before = sessions.len();
    sessions.retain(|_, session| now.signed_duration_since(session.created_at).num_minutes() < timeout);
    if sessions.len() < before {
        debug!("Pruned {} expired sessions", before - sessions.len());
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(upload_graph))
        .route("/api/graphs/:session_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:session_id/distances", post(graph_distances))
        .route("/api/distances", post(compute_distances))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

fn distance_response(
    session_id: Option<Uuid>,
    distances: &DistanceVector<f64>,
    started: Instant,
) -> DistanceResponse {
    DistanceResponse {
        session_id,
        source: distances.source(),
        distances: distances_to_wire(distances),
        reachable: distances.reachable_count(),
        execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
    }
}

/// Store a new graph and build its engine
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphUploadRequest>,
) -> Result<(StatusCode, Json<SessionSummary>), ApiError> {
    let matrix = matrix_from_wire(request.matrix).map_err(|err| {
        warn!("Rejected graph upload: {}", err);
        engine_error(err)
    })?;
    let session = Session::new(ShortestPathEngine::new(matrix));
    let summary = session.summary();

    let mut sessions = state.lock_sessions()?;
    prune_expired(&mut sessions, state.session_timeout_minutes);
    if sessions.len() >= state.max_sessions {
        warn!("Session limit of {} reached", state.max_sessions);
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "too_many_sessions",
            format!("At most {} graphs can be stored", state.max_sessions),
        ));
    }
    sessions.insert(summary.id, session);

    info!(
        "Stored graph {} ({} vertices, {} edges)",
        summary.id, summary.vertex_count, summary.edge_count
    );
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Get the summary of a stored graph
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    let sessions = state.lock_sessions()?;
    sessions
        .get(&session_id)
        .map(|session| Json(session.summary()))
        .ok_or_else(|| session_not_found(session_id))
}

/// Forget a stored graph
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.lock_sessions()?;
    match sessions.remove(&session_id) {
        Some(_) => {
            info!("Deleted graph {}", session_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(session_not_found(session_id)),
    }
}

/// Distances from one source over a stored graph
pub async fn graph_distances(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    // The lock is released before the computation starts.
    let engine = state.engine(session_id)?;

    let started = Instant::now();
    let distances = engine.distances_from(request.source).map_err(engine_error)?;
    let response = distance_response(Some(session_id), &distances, started);

    debug!(
        "Graph {} source {}: {} reachable in {:.3} ms",
        session_id, response.source, response.reachable, response.execution_time_ms
    );
    Ok(Json(response))
}

/// Distances from one source over a graph sent with the request
pub async fn compute_distances(
    Json(request): Json<ComputeRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let matrix = matrix_from_wire(request.matrix).map_err(engine_error)?;
    let engine = ShortestPathEngine::new(matrix);

    let started = Instant::now();
    let distances = engine.distances_from(request.source).map_err(engine_error)?;
    Ok(Json(distance_response(None, &distances, started)))
}

/// List all stored graphs
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = state.lock_sessions()?;
    let mut summaries: Vec<SessionSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let sessions = state.lock_sessions()?.len();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sessions,
    }))
}
