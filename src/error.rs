/// All errors that can occur in store, import and insight operations.
///
/// A store running with [`WritePolicy::Permissive`](crate::WritePolicy) never
/// produces the record variants; they are only raised in strict mode.
#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    /// Update or delete targeted an id that is not in the collection.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// Insert with an id that already exists in the collection.
    #[error("{kind} {id} already exists")]
    DuplicateId { kind: &'static str, id: String },

    /// A record references a team or player that does not exist.
    #[error("{kind} references unknown {target} {id}")]
    InvalidForeignKey {
        kind: &'static str,
        target: &'static str,
        id: String,
    },

    /// A field value is out of range or a batch is malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, RosterError>;
