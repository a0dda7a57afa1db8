//! Pairing reply types and the bridge error envelope.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Error type the bridge reports when the link button has not been pressed.
pub(crate) const LINK_BUTTON_NOT_PRESSED: u16 = 101;

/// Outcome of a pairing attempt.
///
/// Returned by [`Bridge::pair`](crate::Bridge::pair). Exactly one branch is
/// produced per bridge reply; every other bridge error surfaces as
/// [`Error::Bridge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingOutcome {
    /// The bridge issued a credential, now stored on the client.
    Paired { username: String },
    /// The bridge refused the request until its link button is pressed.
    ///
    /// Pairing is not retried automatically; prompt the user to press the
    /// button and call pair again.
    LinkButtonNotPressed,
}

/// Error record inside a bridge reply.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct ApiError {
    pub address: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u16,
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Bridge {
            kind: err.kind,
            address: err.address,
            description: err.description,
        }
    }
}

/// Success record inside a pairing reply.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct PairingSuccess {
    pub username: String,
}

/// One record of the `POST /api` reply array.
///
/// The bridge answers with an array containing a single object carrying
/// either an `error` or a `success` branch.
#[derive(Debug, Deserialize)]
pub(crate) struct PairingReply {
    pub error: Option<ApiError>,
    pub success: Option<PairingSuccess>,
}

impl PairingReply {
    pub(crate) fn into_outcome(self) -> Result<PairingOutcome, Error> {
        if let Some(success) = self.success {
            return Ok(PairingOutcome::Paired {
                username: success.username,
            });
        }
        match self.error {
            Some(err) if err.kind == LINK_BUTTON_NOT_PRESSED => {
                Ok(PairingOutcome::LinkButtonNotPressed)
            }
            Some(err) => Err(err.into()),
            None => Err(Error::EmptyReply),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ApiError>,
}

/// Probe a reply body for the bridge's error-array envelope.
///
/// Endpoints other than pairing answer `[{"error": {...}}]` instead of the
/// expected object when a request is rejected (e.g. type 1, "unauthorized
/// user"). Returns `None` when the body is not an error array.
pub(crate) fn bridge_error(text: &str) -> Option<Error> {
    let envelopes: Vec<ErrorEnvelope> = serde_json::from_str(text).ok()?;
    envelopes
        .into_iter()
        .find_map(|e| e.error)
        .map(Error::from)
}
