use http::StatusCode;
use thiserror::Error;

/// The error type returned by all client operations.
///
/// Transport failures are passed through from the HTTP collaborator
/// untranslated. A non-2xx response becomes an [`ApiError`], a 2xx
/// response with an undecodable body becomes a [`DecodeError`]; the two
/// are disjoint so callers can tell a rejected request from an
/// unparseable success.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] crate::http::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A non-2xx response from the API.
#[derive(Debug, Error)]
#[error("api error {code}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// A fixed message describing the status code.
    pub message: &'static str,
}

/// A response body that did not match the expected document shape.
#[derive(Debug, Error)]
#[error("decode error: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Classifies a response status. Statuses in `[200, 300)` pass, anything
/// else maps to an [`ApiError`] with a fixed message.
pub(crate) fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }

    let message = match status.as_u16() {
        401 => "API key invalid or missing",
        404 => "The requested resource was not found",
        415 => "Content type incorrect or not specified",
        429 => "Too many requests",
        _ => "Unknown error",
    };

    Err(ApiError {
        code: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::check_status;

    use http::StatusCode;

    #[test]
    fn test_success_statuses() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::CREATED).is_ok());
        assert!(check_status(StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn test_known_error_statuses() {
        let err = check_status(StatusCode::UNAUTHORIZED).unwrap_err();
        assert_eq!(err.code, 401);
        assert_eq!(err.message, "API key invalid or missing");

        let err = check_status(StatusCode::NOT_FOUND).unwrap_err();
        assert_eq!(err.code, 404);
        assert_eq!(err.message, "The requested resource was not found");

        let err = check_status(StatusCode::UNSUPPORTED_MEDIA_TYPE).unwrap_err();
        assert_eq!(err.code, 415);
        assert_eq!(err.message, "Content type incorrect or not specified");

        let err = check_status(StatusCode::TOO_MANY_REQUESTS).unwrap_err();
        assert_eq!(err.code, 429);
        assert_eq!(err.message, "Too many requests");
    }

    #[test]
    fn test_unknown_error_statuses() {
        let err = check_status(StatusCode::INTERNAL_SERVER_ERROR).unwrap_err();
        assert_eq!(err.code, 500);
        assert_eq!(err.message, "Unknown error");

        let err = check_status(StatusCode::MOVED_PERMANENTLY).unwrap_err();
        assert_eq!(err.code, 301);
        assert_eq!(err.message, "Unknown error");
    }
}
