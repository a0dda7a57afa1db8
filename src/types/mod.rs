//! Value types for light state parameters.

mod brightness;
mod hue_saturation;
mod mirek;
mod modes;

pub use brightness::Brightness;
pub use hue_saturation::HueSaturation;
pub use mirek::Mirek;
pub use modes::{Alert, ColorMode, Effect};
