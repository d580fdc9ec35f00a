use thiserror::Error;

/// Top-level error type for the roomgen geometry engine.
#[derive(Debug, Error)]
pub enum RoomgenError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Errors raised while deriving room geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("degenerate edge {index}: consecutive polygon points coincide")]
    DegenerateEdge { index: usize },

    #[error("invalid room height {0}: must be positive and finite")]
    InvalidHeight(f64),
}

/// Errors related to floor-plan input data.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to parse floor plan: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate room id: {0}")]
    DuplicateRoomId(String),
}

/// Errors related to the scene store.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("room group not found")]
    GroupNotFound,
}

/// Errors surfaced by the prompt-enhancement and image-generation services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("input is empty")]
    EmptyInput,

    #[error("request superseded by a newer request")]
    Superseded,

    #[error("request failed: {0}")]
    Failed(String),
}

impl CollaboratorError {
    /// Returns `true` if re-invoking the request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Convenience type alias for results using [`RoomgenError`].
pub type Result<T> = std::result::Result<T, RoomgenError>;
