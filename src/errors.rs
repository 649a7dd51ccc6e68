use reqwest::{StatusCode, blocking::Response};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid domain name {0:?}: {1}")]
    Invalid(String, String),
    #[error("domain {0:?} doesn't have a root")]
    MissingRoot(String),
    #[error("a domain is required when using the international API")]
    MissingDomain,
    #[error("invalid grade of domain: {0}")]
    InvalidGrade(String),
}

/// A non-successful HTTP response from the DNSPod API.
#[derive(Error, Debug)]
#[error("DNSPod API error: {status} - {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn from_response(resp: Response) -> Self {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ErrorResp {
            Plain { message: String },
            Envelope { status: ErrorStatus },
        }

        #[derive(Deserialize)]
        struct ErrorStatus {
            #[serde(default, deserialize_with = "crate::numeric::deserialize_to_string")]
            code: String,
            #[serde(default, deserialize_with = "crate::numeric::deserialize_null_default")]
            message: String,
        }

        let status = resp.status();
        let text = resp
            .text()
            .unwrap_or_else(|e| format!("unable to read response body: {e}"));

        let message = match serde_json::from_str::<ErrorResp>(&text) {
            Ok(ErrorResp::Plain { message }) => message,
            Ok(ErrorResp::Envelope { status }) if status.code.is_empty() => status.message,
            Ok(ErrorResp::Envelope { status }) => format!("{}: {}", status.code, status.message),
            Err(_) => text,
        };

        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A well-formed response whose status code reports a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("code: {code}, message: {message}")]
pub struct StatusError {
    pub code: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] ApiError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error("unable to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unable to parse total count {0:?}")]
    InvalidTotal(String),
    #[error(transparent)]
    Status(#[from] StatusError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    #[error("received an empty page after {received} of {total} items")]
    StalledPagination { received: usize, total: u64 },
}

impl ClientError {
    /// Whether the request failed before a response body could be read.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Http(_) | ClientError::Reqwest(_) | ClientError::UrlParse(_)
        )
    }

    /// Whether the response body didn't match the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode(_) | ClientError::InvalidTotal(_))
    }

    /// Whether the API reported that the call failed.
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status(_))
    }
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
