//! Bridge client.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use indexmap::IndexMap;
use log::{debug, warn};
use reqwest::Method;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::errors::Error;
use crate::history::{Direction, RequestHistory};
use crate::info::LightInfo;
use crate::pairing::{self, PairingOutcome, PairingReply};
use crate::state::{StateUpdate, SwitchOutcome, SwitchReport};

type Result<T> = std::result::Result<T, Error>;

/// A client for one Philips Hue bridge.
///
/// A `Bridge` communicates with the bridge's local HTTP API. It is
/// constructed unpaired; [`pair`](Bridge::pair) obtains the API credential
/// the remaining operations require. The credential, the known light
/// identifiers and the last broadcast power state all live on the value and
/// die with it -- nothing is persisted.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
/// use std::str::FromStr;
/// use hue_bridge_rs::Bridge;
///
/// let bridge = Bridge::new(Ipv4Addr::from_str("192.168.42.75").unwrap(), None);
/// assert!(!bridge.is_paired());
/// assert!(bridge.lights().is_empty());
/// ```
pub struct Bridge {
    base: String,
    devicetype: String,
    credential: Option<String>,
    lights: Vec<String>,
    active: Option<bool>,
    http: reqwest::Client,
    history: Arc<Mutex<RequestHistory>>,
}

impl Bridge {
    /// Application identifier sent with pairing requests when none is given.
    pub const DEFAULT_DEVICETYPE: &'static str = "my_hue_app#rasp pi";
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client for the bridge at `ip` on the standard HTTP port.
    pub fn new(ip: Ipv4Addr, devicetype: Option<&str>) -> Self {
        Self::from_base_url(format!("http://{ip}"), devicetype)
    }

    /// Create a client from a full base URL, e.g. `http://192.168.42.75:8080`.
    ///
    /// Useful for bridges reached through a port forward.
    pub fn from_base_url(base: impl Into<String>, devicetype: Option<&str>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Bridge {
            base,
            devicetype: devicetype.unwrap_or(Self::DEFAULT_DEVICETYPE).to_string(),
            credential: None,
            lights: Vec::new(),
            active: None,
            http: reqwest::Client::new(),
            history: Arc::new(Mutex::new(RequestHistory::new())),
        }
    }

    /// The bridge base URL.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// The application identifier used for pairing.
    pub fn devicetype(&self) -> &str {
        &self.devicetype
    }

    /// The credential issued by the bridge, if paired.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Whether a credential is held.
    pub fn is_paired(&self) -> bool {
        self.credential.is_some()
    }

    /// Supply a previously issued credential instead of pairing.
    ///
    /// The library never stores credentials anywhere outside this value;
    /// callers that keep one across sessions hand it back through here.
    pub fn set_credential(&mut self, username: &str) {
        self.credential = Some(username.to_string());
    }

    /// The known light identifiers, in bridge registry order.
    ///
    /// Empty until [`refresh_lights`](Bridge::refresh_lights) or the first
    /// broadcast populates it.
    pub fn lights(&self) -> &[String] {
        &self.lights
    }

    /// The power flag of the last broadcast, if any.
    ///
    /// Recorded optimistically when a broadcast is issued, regardless of how
    /// many per-light updates actually succeeded.
    pub fn active(&self) -> Option<bool> {
        self.active
    }

    pub async fn history(&self) -> RequestHistory {
        self.history.lock().await.clone()
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
    }

    /// Register this application with the bridge.
    ///
    /// Sends `POST /api` with the devicetype identifier. On success the
    /// issued credential is stored on the client and
    /// [`PairingOutcome::Paired`] is returned. If the bridge's link button
    /// has not been pressed, [`PairingOutcome::LinkButtonNotPressed`] is
    /// returned and nothing changes; the call is never retried
    /// automatically. Every other failure is an error and leaves the client
    /// unpaired.
    ///
    /// ```ignore
    /// match bridge.pair().await? {
    ///     PairingOutcome::Paired { .. } => println!("Connected"),
    ///     PairingOutcome::LinkButtonNotPressed => {
    ///         println!("Press the link button on the bridge, then pair again");
    ///     }
    /// }
    /// ```
    pub async fn pair(&mut self) -> Result<PairingOutcome> {
        let body = json!({ "devicetype": self.devicetype });
        let text = self.send(Method::POST, "/api".to_string(), Some(body)).await?;

        let replies: Vec<PairingReply> = serde_json::from_str(&text).map_err(Error::JsonLoad)?;
        let reply = replies.into_iter().next().ok_or(Error::EmptyReply)?;

        let outcome = reply.into_outcome()?;
        if let PairingOutcome::Paired { username } = &outcome {
            self.credential = Some(username.clone());
            debug!("paired with bridge at {}", self.base);
        }
        Ok(outcome)
    }

    /// Fetch the full light registry (live network call).
    pub async fn get_lights(&self) -> Result<IndexMap<String, LightInfo>> {
        let path = self.api_path("lights")?;
        let text = self.send(Method::GET, path, None).await?;
        parse_reply(&text)
    }

    /// Fetch one light's current snapshot (live network call).
    pub async fn get_light(&self, id: &str) -> Result<LightInfo> {
        let path = self.api_path(&format!("lights/{id}"))?;
        let text = self.send(Method::GET, path, None).await?;
        parse_reply(&text)
    }

    /// Re-enumerate the bridge's lights, replacing the identifier sequence.
    ///
    /// Identifiers are kept in registry order. On failure the previous
    /// sequence is left unchanged.
    pub async fn refresh_lights(&mut self) -> Result<&[String]> {
        let registry = self.get_lights().await?;
        self.lights = registry.keys().cloned().collect();
        debug!("bridge reports {} lights", self.lights.len());
        Ok(&self.lights)
    }

    /// Apply a state update to a single light.
    ///
    /// The reply body is not examined; only transport-level failures and
    /// HTTP error statuses are reported.
    pub async fn set_light(&self, id: &str, update: &StateUpdate) -> Result<()> {
        if !update.is_valid() {
            return Err(Error::NoAttribute);
        }
        let path = self.api_path(&format!("lights/{id}/state"))?;
        let body = serde_json::to_value(update).map_err(Error::JsonDump)?;
        self.send(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// Apply a state update to every known light.
    ///
    /// If no lights are known yet, the identifier sequence is populated
    /// first (suspending until the registry fetch completes). One
    /// independent PUT is then issued per identifier, concurrently; a
    /// failing update is logged and reported in the [`SwitchReport`] without
    /// aborting the others.
    pub async fn set_all(&mut self, update: &StateUpdate) -> Result<SwitchReport> {
        if !update.is_valid() {
            return Err(Error::NoAttribute);
        }
        if self.lights.is_empty() {
            self.refresh_lights().await?;
        }

        let this = &*self;
        let puts = this.lights.iter().map(|id| async move {
            let result = this.set_light(id, update).await;
            if let Err(err) = &result {
                warn!("light {id}: state update failed: {err}");
            }
            SwitchOutcome {
                id: id.clone(),
                error: result.err(),
            }
        });

        Ok(SwitchReport::new(join_all(puts).await))
    }

    /// Switch every known light on or off.
    ///
    /// Broadcast semantics are those of [`set_all`](Bridge::set_all); the
    /// requested flag is additionally recorded as the active state, without
    /// waiting for confirmation that any light applied it.
    pub async fn set_all_lights(&mut self, on: bool) -> Result<SwitchReport> {
        let report = self.set_all(&StateUpdate::from(on)).await?;
        self.active = Some(on);
        Ok(report)
    }

    fn api_path(&self, suffix: &str) -> Result<String> {
        let credential = self.credential.as_ref().ok_or(Error::NoCredential)?;
        Ok(format!("/api/{credential}/{suffix}"))
    }

    async fn send(&self, method: Method, path: String, body: Option<Value>) -> Result<String> {
        let endpoint = format!("{method} {path}");
        self.history.lock().await.record(
            Direction::Send,
            &endpoint,
            body.as_ref().unwrap_or(&Value::Null),
        );

        let mut request = self
            .http
            .request(method, format!("{}{}", self.base, path))
            .timeout(Self::TIMEOUT);
        if let Some(body) = &body {
            request = request.json(body);
        }

        match dispatch(request).await {
            Ok(text) => {
                let parsed: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
                debug!("{endpoint} response: {parsed:?}");
                self.history
                    .lock()
                    .await
                    .record(Direction::Receive, &endpoint, &parsed);
                Ok(text)
            }
            Err(err) => {
                self.history.lock().await.record_error(&err.to_string());
                Err(err)
            }
        }
    }
}

async fn dispatch(request: reqwest::RequestBuilder) -> Result<String> {
    let response = request.send().await.map_err(|e| Error::http("send", e))?;
    let response = response
        .error_for_status()
        .map_err(|e| Error::http("status", e))?;
    response.text().await.map_err(|e| Error::http("read", e))
}

fn parse_reply<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    // Rejections come back as an error array instead of the expected object.
    if let Some(err) = pairing::bridge_error(text) {
        return Err(err);
    }
    serde_json::from_str(text).map_err(Error::JsonLoad)
}
