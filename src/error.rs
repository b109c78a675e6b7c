use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while loading or querying the preload list.
///
/// Construction of a client fails with `Status` or `Fetch` when the GET
/// does not yield a 200 body, and with `Parse` when the decommented text
/// is not the expected JSON shape. `EmptyHost` only comes out of the
/// query surface and never disturbs constructed state.
#[derive(Error, Debug)]
pub enum PreloadError {
    /// The endpoint answered with something other than 200, redirects
    /// included.
    #[error("unexpected status {status} fetching {url}")]
    Status { url: String, status: StatusCode },

    /// Transport-level failure: DNS, refused connection, timeout.
    #[error("preload list fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The document was not valid JSON after comment stripping, or an
    /// entry was missing its required `name`.
    #[error("preload list parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// An empty host was passed to a membership query.
    #[error("host must not be empty")]
    EmptyHost,
}

pub type Result<T> = std::result::Result<T, PreloadError>;
