use thiserror::Error;

/// Failure taxonomy of one API call. `Network` means no response was
/// received; `Server` carries the response body of a non-2xx status along
/// with a kind classified once, here, so callers never match on message
/// substrings themselves.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({status}): {message}")]
    Server {
        status: u16,
        kind: ServerErrorKind,
        message: String,
    },
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Kind of a server rejection, if this is one.
    pub fn server_kind(&self) -> Option<ServerErrorKind> {
        match self {
            ApiError::Server { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerErrorKind {
    /// Registration hit an already-registered email.
    DuplicateEmail,
    /// Credentials rejected (login) or token rejected (authenticated call).
    InvalidCredentials,
    /// The server refused the payload as invalid.
    Validation,
    Other,
}

impl ServerErrorKind {
    /// Classify a non-2xx response. The known backend phrases are matched
    /// here and nowhere else.
    pub fn classify(status: u16, body: &str) -> Self {
        if body.contains("ya se encuentra registrado") {
            return ServerErrorKind::DuplicateEmail;
        }
        if status == 401 || status == 403 {
            return ServerErrorKind::InvalidCredentials;
        }
        if status == 422 || body.contains("validation") {
            return ServerErrorKind::Validation;
        }
        ServerErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_phrase_wins_over_status() {
        let kind = ServerErrorKind::classify(400, r#"{"detail":"El correo ya se encuentra registrado"}"#);
        assert_eq!(kind, ServerErrorKind::DuplicateEmail);
    }

    #[test]
    fn unauthorized_status_maps_to_invalid_credentials() {
        assert_eq!(ServerErrorKind::classify(401, ""), ServerErrorKind::InvalidCredentials);
        assert_eq!(ServerErrorKind::classify(403, "forbidden"), ServerErrorKind::InvalidCredentials);
    }

    #[test]
    fn unknown_rejections_fall_back_to_other() {
        assert_eq!(ServerErrorKind::classify(500, "boom"), ServerErrorKind::Other);
        assert_eq!(ServerErrorKind::classify(422, "unprocessable"), ServerErrorKind::Validation);
    }
}
