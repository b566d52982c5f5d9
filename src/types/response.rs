use serde::Deserialize;

/// MIME type for JSON content
pub const MIME_JSON: &str = "application/json";

/// Wrapper returned by the mutating and login endpoints.
///
/// Read endpoints return their records directly and never use it. `success`
/// is mandatory: a body without it is not an envelope. Any `data` payload the
/// server attaches is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Whether the server accepted the operation
    pub success: bool,

    /// Human readable outcome, shown verbatim to the user
    #[serde(default)]
    pub message: String,

    /// Issued by the login endpoint only
    #[serde(default)]
    pub access_token: Option<String>,
}
