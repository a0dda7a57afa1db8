//! Light registry snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Alert, ColorMode, Effect};

/// State block of a light as reported by the bridge.
///
/// Color attributes are absent on lights that do not support them (e.g.
/// white-only or plug fixtures).
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LightState {
    pub on: bool,
    /// Brightness (1-254)
    #[serde(default)]
    pub bri: Option<u8>,
    /// Hue on the bridge scale (0-65535)
    #[serde(default)]
    pub hue: Option<u16>,
    /// Saturation (0-254)
    #[serde(default)]
    pub sat: Option<u8>,
    #[serde(default)]
    pub effect: Option<Effect>,
    /// CIE xy color coordinates
    #[serde(default)]
    pub xy: Option<[f64; 2]>,
    /// Color temperature in mired
    #[serde(default)]
    pub ct: Option<u16>,
    #[serde(default)]
    pub alert: Option<Alert>,
    #[serde(default)]
    pub colormode: Option<ColorMode>,
    #[serde(default)]
    pub mode: Option<String>,
    pub reachable: bool,
}

/// A read-only snapshot of one light from the bridge registry.
///
/// Only `state` and the identifying fields are typed; capability and product
/// metadata blocks vary across firmware generations and are passed through
/// unmodified as raw JSON.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LightInfo {
    pub state: LightState,
    #[serde(rename = "type")]
    pub light_type: String,
    pub name: String,
    pub modelid: String,
    #[serde(default)]
    pub manufacturername: Option<String>,
    #[serde(default)]
    pub productname: Option<String>,
    #[serde(default)]
    pub uniqueid: Option<String>,
    #[serde(default)]
    pub swversion: Option<String>,
    #[serde(default)]
    pub swconfigid: Option<String>,
    #[serde(default)]
    pub productid: Option<String>,
    #[serde(default)]
    pub swupdate: Option<Value>,
    #[serde(default)]
    pub capabilities: Option<Value>,
    #[serde(default)]
    pub config: Option<Value>,
}
