/// Errors produced by the fail-loud helpers and by the HTTP shaping functions.
///
/// The swallow-to-absence helpers never surface these; they collapse any
/// `Err` into [`crate::Maybe::None`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Cannot unwrap None")]
    UnwrapNone,

    /// Carries the caller's message verbatim.
    #[error("{0}")]
    Expect(String),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Failed to parse response body: {0}")]
    Parse(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}
