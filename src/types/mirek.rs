//! Color temperature control.

use serde::{Deserialize, Serialize};

/// Color temperature in mired (reciprocal megakelvin), valid from 153 to 500.
///
/// The Hue API expresses color temperature in mireds, where lower values
/// produce cooler (more blue) light and higher values warmer (more
/// yellow/orange) light. Typical values:
/// - 153: Coolest white (~6500K)
/// - 366: Neutral white (~2700K)
/// - 500: Warmest white (~2000K)
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct Mirek {
    pub(crate) value: u16,
}

impl Mirek {
    const MIN: u16 = 153;
    const MAX: u16 = 500;

    /// Create a new Mirek with the coolest supported value (153).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::Mirek;
    ///
    /// assert_eq!(Mirek::new().value(), 153);
    /// ```
    pub fn new() -> Self {
        Mirek { value: Self::MIN }
    }

    /// Get the mired value.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// The approximate color temperature in Kelvin.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::Mirek;
    ///
    /// assert_eq!(Mirek::create(500).unwrap().kelvin(), 2000);
    /// ```
    pub fn kelvin(&self) -> u32 {
        1_000_000 / u32::from(self.value)
    }

    /// Create a new Mirek with the given value.
    ///
    /// Returns `None` if value is outside the valid range (153-500).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::Mirek;
    ///
    /// assert!(Mirek::create(152).is_none());
    /// assert!(Mirek::create(153).is_some());
    /// assert!(Mirek::create(500).is_some());
    /// assert!(Mirek::create(501).is_none());
    /// ```
    pub fn create(value: u16) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Mirek { value })
        } else {
            None
        }
    }

    /// Create a new Mirek from a color temperature in Kelvin.
    ///
    /// Returns `None` if the converted value falls outside the valid mired
    /// range (roughly 2000K-6500K).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::Mirek;
    ///
    /// assert_eq!(Mirek::from_kelvin(2000).unwrap().value(), 500);
    /// assert!(Mirek::from_kelvin(10_000).is_none());
    /// ```
    pub fn from_kelvin(kelvin: u32) -> Option<Self> {
        if kelvin == 0 {
            return None;
        }
        u16::try_from(1_000_000 / kelvin)
            .ok()
            .and_then(Self::create)
    }
}
