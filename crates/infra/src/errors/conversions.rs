//! Mapping of transport, parser, and filesystem failures onto [`CallDeckError`].

use calamine::Error as SpreadsheetError;
use calldeck_domain::CallDeckError;
use csv::Error as CsvError;
use reqwest::Error as HttpError;

/// Newtype carrying a classified [`CallDeckError`].
///
/// The orphan rule blocks `impl From<reqwest::Error> for CallDeckError` here,
/// so the `?` conversions land on this wrapper and callers unwrap it with
/// `.into()`.
#[derive(Debug)]
pub struct InfraError(pub CallDeckError);

impl From<InfraError> for CallDeckError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CallDeckError> for InfraError {
    fn from(value: CallDeckError) -> Self {
        InfraError(value)
    }
}

/// Classification seam shared by every external error source in this module.
trait IntoCallDeckError {
    fn into_calldeck(self) -> CallDeckError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CallDeckError */
/* -------------------------------------------------------------------------- */

impl IntoCallDeckError for HttpError {
    fn into_calldeck(self) -> CallDeckError {
        if self.is_timeout() {
            return CallDeckError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CallDeckError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return CallDeckError::Decode(self.to_string());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("unknown status");
            let message = format!("HTTP {code} {reason}");

            return match code {
                404 => CallDeckError::NotFound(message),
                400..=499 => CallDeckError::InvalidInput(message),
                500..=599 => CallDeckError::Backend(message),
                _ => CallDeckError::Network(message),
            };
        }

        CallDeckError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_calldeck())
    }
}

/* -------------------------------------------------------------------------- */
/* csv::Error → CallDeckError */
/* -------------------------------------------------------------------------- */

impl IntoCallDeckError for CsvError {
    fn into_calldeck(self) -> CallDeckError {
        match self.kind() {
            csv::ErrorKind::Io(err) => CallDeckError::File(format!("failed to read CSV: {err}")),
            csv::ErrorKind::Utf8 { .. } => {
                CallDeckError::File("CSV contains invalid UTF-8".into())
            }
            _ => CallDeckError::File(format!("malformed CSV: {self}")),
        }
    }
}

impl From<CsvError> for InfraError {
    fn from(value: CsvError) -> Self {
        InfraError(value.into_calldeck())
    }
}

/* -------------------------------------------------------------------------- */
/* calamine::Error → CallDeckError */
/* -------------------------------------------------------------------------- */

impl IntoCallDeckError for SpreadsheetError {
    fn into_calldeck(self) -> CallDeckError {
        match self {
            SpreadsheetError::Io(err) => {
                CallDeckError::File(format!("failed to read spreadsheet: {err}"))
            }
            other => CallDeckError::File(format!("malformed spreadsheet: {other}")),
        }
    }
}

impl From<SpreadsheetError> for InfraError {
    fn from(value: SpreadsheetError) -> Self {
        InfraError(value.into_calldeck())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CallDeckError */
/* -------------------------------------------------------------------------- */

impl IntoCallDeckError for std::io::Error {
    fn into_calldeck(self) -> CallDeckError {
        match self.kind() {
            std::io::ErrorKind::NotFound => CallDeckError::File("file not found".into()),
            std::io::ErrorKind::PermissionDenied => {
                CallDeckError::File("permission denied".into())
            }
            _ => CallDeckError::File(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_calldeck())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
