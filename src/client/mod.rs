pub mod config;
pub mod factory;

use anyhow::{bail, Context, Result};
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::session::Session;
use crate::types::response::{Envelope, MIME_JSON};

/// HTTP client for the employee API that authorizes every request with the
/// session token.
///
/// The token is read from the session when a request is sent, never cached, so
/// a login or logout performed through the same session takes effect on the
/// very next request. Cookies set by the server are kept and sent back.
pub struct Client {
    url: String,
    client: reqwest::Client,
    session: Session,
}

/// Request body
pub enum Payload {
    Json(String),
    Multipart(Form),
    None,
}

/// Raw server answer, decoded by the caller.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Input refused before any request was sent
    #[error("{0}")]
    Validation(&'static str),

    /// The server answered with an envelope reporting failure
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Server error: status {status}, {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Server returned invalid json: {0:?}")]
    InvalidJson(String),

    #[error("Unexpected error: {0}")]
    Unexpected(&'static str),

    #[error("Session storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl Client {
    pub const API_SUFFIX: &'static str = "/api";

    /// Builds a client for the server rooted at `server`, e.g.
    /// `http://localhost:8000`. All paths are resolved under `<server>/api`.
    pub fn new(server: &str, session: Session, accept_invalid_certs: bool) -> Result<Self> {
        let server = server.trim_end_matches('/');
        let parsed = match Url::parse(server) {
            Ok(url) => url,
            Err(_) => bail!("invalid server url '{server}'"),
        };
        match parsed.scheme() {
            "http" | "https" => {}
            _ => bail!(
                "invalid url scheme, expect 'http' or 'https', not '{}'",
                parsed.scheme()
            ),
        }

        if parsed.path() != "/" {
            bail!(
                "invalid server url, path should be '/', not '{}'",
                parsed.path()
            );
        }

        let mut builder = reqwest::Client::builder().cookie_store(true);
        if accept_invalid_certs && parsed.scheme() == "https" {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().context("build http client")?;

        Ok(Self {
            url: format!("{server}{}", Self::API_SUFFIX),
            client,
            session,
        })
    }

    /// Base url every request path is appended to.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get(&self, path: &str) -> Result<Reply, ApiError> {
        self.do_request(Method::GET, path, Payload::None).await
    }

    pub async fn post(&self, path: &str, payload: Payload) -> Result<Reply, ApiError> {
        self.do_request(Method::POST, path, payload).await
    }

    async fn do_request(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<Reply, ApiError> {
        let url = format!("{}{}", self.url, path);
        let mut req = self.client.request(method, &url).header(ACCEPT, MIME_JSON);

        req = match payload {
            Payload::Json(json) => req.header(CONTENT_TYPE, MIME_JSON).body(json),
            Payload::Multipart(form) => req.multipart(form),
            Payload::None => req,
        };

        if let Some(token) = self.session.get()? {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let req = match req.build() {
            Ok(req) => req,
            Err(e) => return Err(ApiError::Client(format!("build request failed: {e:#}"))),
        };
        debug!("Request server: {} {}", req.method(), req.url());

        let resp = match self.client.execute(req).await {
            Ok(resp) => resp,
            Err(e) => return Err(ApiError::Network(e)),
        };

        let status = resp.status();
        let body = resp.text().await.map_err(ApiError::Network)?;
        debug!("Server replied with status {status}, body size {}", body.len());

        Ok(Reply { status, body })
    }
}

impl Reply {
    /// Decodes a successful reply whose body is the record(s) themselves.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.status.is_success() {
            return Err(self.into_error());
        }
        match serde_json::from_str(&self.body) {
            Ok(data) => Ok(data),
            Err(_) => Err(ApiError::InvalidJson(self.body)),
        }
    }

    /// Decodes an envelope reply, turning `success: false` into
    /// [`ApiError::Rejected`].
    pub fn envelope(self) -> Result<Envelope, ApiError> {
        if !self.status.is_success() {
            return Err(self.into_error());
        }
        let envelope: Envelope = match serde_json::from_str(&self.body) {
            Ok(envelope) => envelope,
            Err(_) => return Err(ApiError::InvalidJson(self.body)),
        };
        if !envelope.success {
            return Err(ApiError::Rejected {
                status: self.status.as_u16(),
                message: envelope.message,
            });
        }
        Ok(envelope)
    }

    fn into_error(self) -> ApiError {
        let status = self.status.as_u16();
        if let Ok(envelope) = serde_json::from_str::<Envelope>(&self.body) {
            return ApiError::Rejected {
                status,
                message: envelope.message,
            };
        }

        let message = match serde_json::from_str::<serde_json::Value>(&self.body) {
            Ok(value) => match value.get("message").and_then(|m| m.as_str()) {
                Some(message) => message.to_string(),
                None => self.body,
            },
            Err(_) if self.body.trim().is_empty() => self
                .status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
            Err(_) => self.body,
        };
        ApiError::Server { status, message }
    }
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Rejected { status, .. } | ApiError::Server { status, .. }
                if *status == StatusCode::UNAUTHORIZED.as_u16()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::storage::MemoryStorage;

    use super::*;

    fn session() -> Session {
        Session::new(Arc::new(MemoryStorage::new()))
    }

    fn reply(status: u16, body: &str) -> Reply {
        Reply {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_new_client() {
        let client = Client::new("http://localhost:8000", session(), false).unwrap();
        assert_eq!(client.url(), "http://localhost:8000/api");

        let client = Client::new("https://example.com/", session(), true).unwrap();
        assert_eq!(client.url(), "https://example.com/api");

        assert!(Client::new("localhost:8000", session(), false).is_err());
        assert!(Client::new("ftp://example.com", session(), false).is_err());
        assert!(Client::new("http://example.com/api", session(), false).is_err());
        assert!(Client::new("", session(), false).is_err());
    }

    #[test]
    fn test_reply_json() {
        let ids: Vec<u64> = reply(200, "[1,2,3]").json().unwrap();
        assert_eq!(ids, vec![1, 2, 3]);

        let err = reply(200, "<html>").json::<Vec<u64>>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(ref body) if body == "<html>"));

        let err = reply(404, r#"{"success":false,"message":"Employee not found"}"#)
            .json::<Vec<u64>>()
            .unwrap_err();
        assert!(
            matches!(err, ApiError::Rejected { status: 404, ref message } if message == "Employee not found")
        );

        let err = reply(401, r#"{"message":"Unauthorized"}"#)
            .json::<Vec<u64>>()
            .unwrap_err();
        assert!(
            matches!(err, ApiError::Server { status: 401, ref message } if message == "Unauthorized")
        );
        assert!(err.is_unauthorized());

        let err = reply(502, "").json::<Vec<u64>>().unwrap_err();
        assert!(
            matches!(err, ApiError::Server { status: 502, ref message } if message == "Bad Gateway")
        );

        let err = reply(500, "boom").json::<Vec<u64>>().unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, ref message } if message == "boom"));
    }

    #[test]
    fn test_reply_envelope() {
        let envelope = reply(200, r#"{"success":true,"message":"Employee added"}"#)
            .envelope()
            .unwrap();
        assert_eq!(envelope.message, "Employee added");

        let err = reply(200, r#"{"success":false,"message":"Email already exists"}"#)
            .envelope()
            .unwrap_err();
        assert!(
            matches!(err, ApiError::Rejected { status: 200, ref message } if message == "Email already exists")
        );
        assert_eq!(err.to_string(), "Email already exists");

        let err = reply(200, r#"{"message":"ok"}"#).envelope().unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(_)));
    }

    #[test]
    fn test_api_error_kind() {
        assert!(ApiError::Validation("Invalid email format").is_validation());
        assert!(!ApiError::Unexpected("x").is_validation());
        assert_eq!(
            ApiError::Validation("Invalid email format").to_string(),
            "Invalid email format"
        );
    }
}
