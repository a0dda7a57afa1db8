//! Wire-string modes reported and accepted by the bridge.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Temporary visual effect used to identify a light.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Alert {
    /// No alert running
    None,
    /// One breathe cycle
    Select,
    /// Breathe cycles for 15 seconds
    LSelect,
}

/// Dynamic effect applied on top of the current color.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Effect {
    /// No effect running
    None,
    /// Cycle through all hues at the current brightness and saturation
    ColorLoop,
}

/// Color mode a light reports its current state in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorMode {
    /// Hue and saturation
    Hs,
    /// CIE xy coordinates
    Xy,
    /// Color temperature
    Ct,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Alert::LSelect).unwrap(), "\"lselect\"");
        assert_eq!(serde_json::to_string(&Effect::ColorLoop).unwrap(), "\"colorloop\"");
        assert_eq!(serde_json::to_string(&ColorMode::Xy).unwrap(), "\"xy\"");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Alert::from_str("lselect").unwrap(), Alert::LSelect);
        assert_eq!(Effect::from_str("ColorLoop").unwrap(), Effect::ColorLoop);
        assert!(Alert::from_str("blink").is_err());
    }
}
