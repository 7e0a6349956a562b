use thiserror::Error;

/// Domain error taxonomy for ticket operations.
///
/// Validation and authorization errors are raised before any store call is
/// attempted; a failed operation never leaves a partial write behind.
#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Validation failed")]
    Validation(validator::ValidationErrors),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl TicketError {
    /// Build a single-field validation error without going through a full
    /// `Validate` pass. Used for late conversion failures (e.g. a field that
    /// exceeds its storage bound).
    pub fn invalid_field(field: &'static str, code: &'static str) -> Self {
        let mut errors = validator::ValidationErrors::new();
        errors.add(field.into(), validator::ValidationError::new(code));
        TicketError::Validation(errors)
    }

    pub fn not_found(ticket_id: uuid::Uuid) -> Self {
        TicketError::NotFound(format!("ticket {ticket_id}"))
    }
}

impl From<validator::ValidationErrors> for TicketError {
    fn from(errors: validator::ValidationErrors) -> Self {
        TicketError::Validation(errors)
    }
}

/// Store-level failures are surfaced unmodified in the message; the caller
/// only needs to know the write did not happen.
impl From<Box<dyn std::error::Error + Send + Sync>> for TicketError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        TicketError::StoreUnavailable(err.to_string())
    }
}

pub type TicketResult<T> = Result<T, TicketError>;
