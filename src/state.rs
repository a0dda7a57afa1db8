//! State updates for Hue lights.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{Alert, Brightness, Effect, HueSaturation, Mirek};

/// A state update to send to one or more lights.
///
/// Updates can carry multiple attributes (power, brightness, color
/// temperature, etc.) that the bridge applies to the light in a single PUT.
///
/// # Creating Updates
///
/// You can create an update in two ways:
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use hue_bridge_rs::StateUpdate;
///    let update = StateUpdate::from(true); // lights on
///    ```
///
/// 2. **Builder pattern** for combining multiple attributes:
///    ```
///    use hue_bridge_rs::{StateUpdate, Brightness, Mirek};
///    let mut update = StateUpdate::new();
///    update.power(true);
///    update.brightness(&Brightness::create(180).unwrap());
///    update.color_temperature(&Mirek::create(366).unwrap());
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct StateUpdate {
    pub(crate) on: Option<bool>,
    pub(crate) bri: Option<u8>,
    pub(crate) hue: Option<u16>,
    pub(crate) sat: Option<u8>,
    pub(crate) ct: Option<u16>,
    pub(crate) alert: Option<Alert>,
    pub(crate) effect: Option<Effect>,
    /// Transition time in deciseconds
    pub(crate) transitiontime: Option<u16>,
}

impl StateUpdate {
    /// Create a new empty update.
    ///
    /// At least one attribute must be set for the update to be valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::StateUpdate;
    ///
    /// let update = StateUpdate::new();
    /// assert_eq!(update.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this update contains at least one attribute.
    ///
    /// Note: a transition time alone is not valid; it must accompany another
    /// attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::StateUpdate;
    ///
    /// let mut update = StateUpdate::new();
    ///
    /// update.transition_deciseconds(10);
    /// assert_eq!(update.is_valid(), false);
    ///
    /// update.power(false);
    /// assert_eq!(update.is_valid(), true);
    /// ```
    pub fn is_valid(&self) -> bool {
        self.on.is_some()
            || self.bri.is_some()
            || (self.hue.is_some() && self.sat.is_some())
            || self.ct.is_some()
            || self.alert.is_some()
            || self.effect.is_some()
    }

    /// Set the on/off flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::StateUpdate;
    ///
    /// let mut update = StateUpdate::new();
    /// update.power(true);
    /// assert_eq!(update.is_valid(), true);
    /// ```
    pub fn power(&mut self, on: bool) {
        self.on = Some(on);
    }

    /// Set the brightness level.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::{StateUpdate, Brightness};
    ///
    /// let mut update = StateUpdate::new();
    /// update.brightness(&Brightness::create(254).unwrap());
    /// assert_eq!(update.is_valid(), true);
    /// ```
    pub fn brightness(&mut self, brightness: &Brightness) {
        self.bri = Some(brightness.value);
    }

    /// Set the color using hue and saturation.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::{StateUpdate, HueSaturation};
    ///
    /// let mut update = StateUpdate::new();
    /// update.hue_saturation(&HueSaturation::from_degrees(120, 100).unwrap());
    /// assert_eq!(update.is_valid(), true);
    /// ```
    pub fn hue_saturation(&mut self, hs: &HueSaturation) {
        self.hue = Some(hs.hue());
        self.sat = Some(hs.saturation());
    }

    /// Set the color temperature.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::{StateUpdate, Mirek};
    ///
    /// let mut update = StateUpdate::new();
    /// update.color_temperature(&Mirek::create(366).unwrap());
    /// assert_eq!(update.is_valid(), true);
    /// ```
    pub fn color_temperature(&mut self, ct: &Mirek) {
        self.ct = Some(ct.value);
    }

    /// Set the alert effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::{StateUpdate, Alert};
    ///
    /// let mut update = StateUpdate::new();
    /// update.alert(Alert::LSelect);
    /// assert_eq!(update.is_valid(), true);
    /// ```
    pub fn alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    /// Set the dynamic effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::{StateUpdate, Effect};
    ///
    /// let mut update = StateUpdate::new();
    /// update.effect(Effect::ColorLoop);
    /// assert_eq!(update.is_valid(), true);
    /// ```
    pub fn effect(&mut self, effect: Effect) {
        self.effect = Some(effect);
    }

    /// Set the transition time in deciseconds.
    ///
    /// Only effective when combined with another attribute.
    pub fn transition_deciseconds(&mut self, deciseconds: u16) {
        self.transitiontime = Some(deciseconds);
    }
}

impl From<bool> for StateUpdate {
    fn from(on: bool) -> Self {
        let mut u = StateUpdate::new();
        u.power(on);
        u
    }
}

impl From<&Brightness> for StateUpdate {
    fn from(brightness: &Brightness) -> Self {
        let mut u = StateUpdate::new();
        u.brightness(brightness);
        u
    }
}

impl From<&Mirek> for StateUpdate {
    fn from(ct: &Mirek) -> Self {
        let mut u = StateUpdate::new();
        u.color_temperature(ct);
        u
    }
}

impl From<&HueSaturation> for StateUpdate {
    fn from(hs: &HueSaturation) -> Self {
        let mut u = StateUpdate::new();
        u.hue_saturation(hs);
        u
    }
}

/// Per-light outcome of a broadcast state change.
#[derive(Debug)]
pub struct SwitchOutcome {
    /// Identifier of the light the PUT was addressed to.
    pub id: String,
    /// The failure, if the PUT for this light failed.
    pub error: Option<Error>,
}

impl SwitchOutcome {
    /// Whether the state update for this light went through.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Result collection of a broadcast state change.
///
/// A broadcast issues one independent PUT per known light; this report
/// carries the outcome of each, in identifier-sequence order. Partial
/// failures never abort the remaining updates.
#[derive(Debug)]
pub struct SwitchReport {
    outcomes: Vec<SwitchOutcome>,
}

impl SwitchReport {
    pub(crate) fn new(outcomes: Vec<SwitchOutcome>) -> Self {
        SwitchReport { outcomes }
    }

    /// Outcomes per light, in identifier-sequence order.
    pub fn outcomes(&self) -> &[SwitchOutcome] {
        &self.outcomes
    }

    /// Number of lights the broadcast addressed.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Whether every per-light update succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(SwitchOutcome::succeeded)
    }

    /// The outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &SwitchOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}
