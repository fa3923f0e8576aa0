
//! Conversion settings, loadable from JSON.

use crate::decimal::{Rounding, RoundingMode, HalfUpBehavior};
use crate::error::Error;

use serde::{Serialize, Deserialize};
use tracing::debug;

/// How converted magnitudes are rounded.
///
/// Every field is optional in the serialized form. With no `scale`,
/// conversions are exact and `roundingMode` is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionSettings {
  /// Number of fractional digits to keep.
  pub scale: Option<u32>,
  pub rounding_mode: RoundingMode,
  pub half_up: HalfUpBehavior,
}

impl ConversionSettings {
  pub fn exact() -> Self {
    Self::default()
  }

  pub fn rounded(scale: u32, rounding_mode: RoundingMode) -> Self {
    Self { scale: Some(scale), rounding_mode, ..Self::default() }
  }

  pub fn with_half_up(mut self, half_up: HalfUpBehavior) -> Self {
    self.half_up = half_up;
    self
  }

  pub fn from_json(json: &str) -> Result<Self, Error> {
    let settings: ConversionSettings = serde_json::from_str(json)?;
    debug!(?settings, "loaded conversion settings");
    Ok(settings)
  }

  pub fn to_json(&self) -> Result<String, Error> {
    Ok(serde_json::to_string(self)?)
  }

  /// The rounding these settings ask for, if any, with the half-up
  /// behavior already applied to the mode.
  pub fn rounding(&self) -> Option<Rounding> {
    self.scale.map(|scale| Rounding::new(scale, self.rounding_mode.resolve(self.half_up)))
  }
}
