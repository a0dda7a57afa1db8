//! # hue_bridge_rs
//!
//! An async Rust library for controlling Philips Hue smart lights through a
//! Hue Bridge.
//!
//! This crate talks to the bridge's **local HTTP API**: it registers an
//! application username with the bridge (pairing), enumerates the lights the
//! bridge knows about, and applies state changes to one light or to all of
//! them at once.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::net::Ipv4Addr;
//! use std::str::FromStr;
//! use hue_bridge_rs::{Bridge, PairingOutcome};
//!
//! async fn lights_on() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client for the bridge's fixed address
//!     let mut bridge = Bridge::new(Ipv4Addr::from_str("192.168.42.75")?, None);
//!
//!     // Pairing requires the bridge's link button to have been pressed
//!     match bridge.pair().await? {
//!         PairingOutcome::Paired { .. } => println!("Connected"),
//!         PairingOutcome::LinkButtonNotPressed => {
//!             println!("Press the link button on the bridge, then pair again");
//!             return Ok(());
//!         }
//!     }
//!
//!     // Switch every light the bridge knows about
//!     let report = bridge.set_all_lights(true).await?;
//!     println!("{} lights addressed", report.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pairing**: Obtain an API credential from the bridge with [`Bridge::pair`]
//! - **Enumeration**: List light identifiers and fetch [`LightInfo`] snapshots
//! - **Broadcasts**: Switch all lights with a per-light result [`SwitchReport`]
//! - **State Updates**: Power, [`Brightness`], [`Mirek`] color temperature,
//!   [`HueSaturation`] color, [`Alert`] and [`Effect`] modes via [`StateUpdate`]
//! - **Diagnostics**: Per-bridge request history via [`RequestHistory`]
//!
//! ## Communication
//!
//! All communication goes over HTTP to the bridge's fixed local address. The
//! credential issued at pairing time authorizes every subsequent call; it is
//! held on the [`Bridge`] value for its lifetime and never persisted. There
//! is no automatic retry: a failed call is reported once and the caller
//! decides whether to trigger it again.

mod bridge;
mod errors;
mod history;
mod info;
mod pairing;
mod state;
mod types;

// Re-export public API
pub use bridge::Bridge;
pub use errors::Error;
pub use history::{Direction, HistoryEntry, HistorySummary, RequestHistory};
pub use info::{LightInfo, LightState};
pub use pairing::PairingOutcome;
pub use state::{StateUpdate, SwitchOutcome, SwitchReport};
pub use types::{Alert, Brightness, ColorMode, Effect, HueSaturation, Mirek};
