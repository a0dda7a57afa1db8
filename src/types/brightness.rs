//! Brightness control for Hue lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 1 to 254.
///
/// The bridge treats 1 as the dimmest setting a light can reach; brightness 0
/// does not exist, lights are switched off through the `on` flag instead.
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MIN: u8 = 1;
    const MAX: u8 = 254;

    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (1-254).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::Brightness;
    ///
    /// assert!(Brightness::create(0).is_none());
    /// assert!(Brightness::create(1).is_some());
    /// assert!(Brightness::create(254).is_some());
    /// assert!(Brightness::create(255).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Returns default (254) if value is invalid.
    pub fn create_or(value: u8) -> Self {
        if Self::is_valid(value) {
            Brightness { value }
        } else {
            Self::new()
        }
    }

    fn is_valid(value: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}
