//! Request descriptors handed to an [`super::transport::ApiTransport`].
//!
//! Services never touch HTTP directly. They describe a call as an [`ApiRequest`]
//! (verb, path, optional query string, optional body) and the dispatcher turns it
//! into a network request. Keeping the descriptor a plain value makes request
//! construction testable without a server.

use crate::error::{WorkOsError, WorkOsResult};
use reqwest::Method;
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Encoded request payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(String),
    Form(String),
}

impl RequestBody {
    /// `Content-Type` header value for the payload, if there is one.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some(CONTENT_TYPE_JSON),
            Self::Form(_) => Some(CONTENT_TYPE_FORM),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Json(body) | Self::Form(body) => Some(body),
        }
    }
}

/// A single API call: verb, path relative to the API base URL, query and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Already URL-encoded, without the leading `?`. `None` when there are no parameters.
    pub query: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Encodes `options` as the query string.
    ///
    /// Absent optional fields are skipped. If nothing remains, the request keeps
    /// no query string at all.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::Encode`] if `options` is not a flat record.
    pub fn with_query<T: Serialize + ?Sized>(mut self, options: &T) -> WorkOsResult<Self> {
        let query = encode_query(options)?;
        self.query = (!query.is_empty()).then_some(query);
        Ok(self)
    }

    /// Encodes `body` as a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::Encode`] if serialization fails.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> WorkOsResult<Self> {
        let json = serde_json::to_string(body).map_err(WorkOsError::encode)?;
        self.body = RequestBody::Json(json);
        Ok(self)
    }

    /// Encodes `body` as an `application/x-www-form-urlencoded` payload.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::Encode`] if `body` is not a flat record.
    pub fn with_form<T: Serialize + ?Sized>(mut self, body: &T) -> WorkOsResult<Self> {
        self.body = RequestBody::Form(encode_query(body)?);
        Ok(self)
    }

    /// Path followed by `?query` when a query string is present.
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// URL-encodes a flat record of options, skipping `None` fields.
///
/// # Errors
///
/// Returns [`WorkOsError::Encode`] for nested or non-record values.
pub fn encode_query<T: Serialize + ?Sized>(options: &T) -> WorkOsResult<String> {
    serde_urlencoded::to_string(options).map_err(WorkOsError::encode)
}
