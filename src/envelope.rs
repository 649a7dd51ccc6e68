//! The outer object wrapping every DNSPod response.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{ClientError, StatusError};

const SUCCESS_CODE: &str = "1";

/// Status block present in every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(deserialize_with = "crate::numeric::deserialize_to_string")]
    pub code: String,
    #[serde(deserialize_with = "crate::numeric::deserialize_null_default")]
    pub message: String,
    #[serde(deserialize_with = "crate::numeric::deserialize_null_default")]
    pub created_at: String,
}

impl Status {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Payload of methods that only report a status.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NoPayload {}

/// A response: the status and the method-specific payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, or returns the status as an error if it isn't a
    /// success.
    pub fn into_result(self) -> Result<T, StatusError> {
        if self.status.is_success() {
            Ok(self.payload)
        } else {
            Err(StatusError {
                code: self.status.code,
                message: self.status.message,
            })
        }
    }
}

/// Decodes a response body into the payload `T`.
///
/// The status is checked before the payload is decoded, so that a failed
/// call is reported as such even when its payload has an unexpected shape.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    #[derive(Deserialize)]
    struct StatusOnly {
        status: Status,
    }

    let StatusOnly { status } = serde_json::from_slice(body)?;
    if !status.is_success() {
        tracing::warn!(code = %status.code, message = %status.message, "DNSPod call failed");
        return Err(StatusError {
            code: status.code,
            message: status.message,
        }
        .into());
    }

    let envelope: Envelope<T> = serde_json::from_slice(body)?;
    Ok(envelope.into_result()?)
}
