use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The (report, voter) pair already exists in the validation ledger.
    #[error("Report {report_id} has already been validated by this user")]
    AlreadyValidated { report_id: DbId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Submission cooldown still active; `wait_secs` until the next allowed report.
    #[error("Rate limited: wait {wait_secs} seconds before submitting another report")]
    RateLimited { wait_secs: i64 },

    /// An external collaborator (geocoding) failed after its retry.
    #[error("Upstream service unavailable: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
