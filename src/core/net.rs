use crate::core::PulseError;

/// Map a non-success HTTP status to the matching [`PulseError`] variant.
pub(crate) fn status_error(status: u16, url: String) -> PulseError {
    match status {
        404 => PulseError::NotFound { url },
        429 => PulseError::RateLimited { url },
        500..=599 => PulseError::ServerError { status, url },
        _ => PulseError::Status { status, url },
    }
}
