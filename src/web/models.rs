use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::{DistanceVector, ShortestPathEngine};
use crate::graph::{CostMatrix, Graph};
use crate::Result;

/// Cost matrix as sent over the wire. `null` cells stand for positive
/// infinity, which JSON cannot encode; `0` still means "no edge".
pub type WireMatrix = Vec<Vec<Option<f64>>>;

/// Converts a wire matrix into a validated cost matrix
pub fn matrix_from_wire(matrix: WireMatrix) -> Result<CostMatrix<f64>> {
    let rows: Vec<Vec<f64>> = matrix
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.unwrap_or(f64::INFINITY))
                .collect()
        })
        .collect();
    CostMatrix::from_rows(rows)
}

/// Converts distances into wire form, unreached vertices become `null`
pub fn distances_to_wire(distances: &DistanceVector<f64>) -> Vec<Option<f64>> {
    distances
        .as_slice()
        .iter()
        .map(|&d| if d.is_finite() { Some(d) } else { None })
        .collect()
}

/// Upload of a graph that will be queried several times
#[derive(Debug, Deserialize)]
pub struct GraphUploadRequest {
    pub matrix: WireMatrix,
}

/// Parameters for a distance query on a stored graph
#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub source: usize,
}

/// One-shot distance query carrying its own graph
#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub matrix: WireMatrix,
    pub source: usize,
}

/// Response containing the distances from one source
#[derive(Debug, Clone, Serialize)]
pub struct DistanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    pub source: usize,
    pub distances: Vec<Option<f64>>,
    pub reachable: usize,
    pub execution_time_ms: f64,
}

/// Public description of a stored graph
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Health probe payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions: usize,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding an engine built from one uploaded matrix
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub engine: Arc<ShortestPathEngine<f64>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(engine: ShortestPathEngine<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            engine: Arc::new(engine),
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            vertex_count: self.engine.vertex_count(),
            edge_count: self.engine.graph().edge_count(),
            created_at: self.created_at,
        }
    }
}
