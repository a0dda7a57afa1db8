/// All error types that can occur when interacting with a Hue bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a request body to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize a bridge response.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// An HTTP operation failed while communicating with the bridge.
    #[error("http {action} error: {err:?}")]
    Http { action: String, err: reqwest::Error },

    /// The bridge answered with an error record.
    ///
    /// `kind` is the numeric error type from the bridge (e.g. 1 for
    /// "unauthorized user"); type 101 is surfaced separately through
    /// [`crate::PairingOutcome::LinkButtonNotPressed`].
    #[error("bridge error {kind} at {address:?}: {description}")]
    Bridge {
        kind: u16,
        address: String,
        description: String,
    },

    /// A call that requires a credential was made before pairing.
    #[error("no credential; pair with the bridge first")]
    NoCredential,

    /// The bridge reply contained no records.
    #[error("empty reply from bridge")]
    EmptyReply,

    /// Attempted to send a [`crate::StateUpdate`] with no attributes set.
    #[error("invalid state update; no attributes set")]
    NoAttribute,
}

impl Error {
    /// Create a new http error
    pub fn http(action: &str, err: reqwest::Error) -> Self {
        Error::Http {
            action: action.to_string(),
            err,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
