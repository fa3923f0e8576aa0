
use super::dimension::Dimension;
use super::quantity::PhysicalQuantity;
use super::value::ScientificValue;
use crate::util::ErrorWithPayload;

use thiserror::Error;

use std::fmt::Debug;

/// A composite value could not be reinterpreted as a defined
/// quantity, because the two have different dimensions. The rejected
/// value is handed back unchanged.
#[derive(Debug, Clone, Error)]
#[error("Cannot express {found} as {target} (expected {expected})")]
pub struct DimensionMismatchError<U> {
  pub value: ScientificValue<U>,
  pub target: PhysicalQuantity,
  pub expected: Dimension,
  pub found: Dimension,
  _priv: (),
}

impl<U> DimensionMismatchError<U> {
  pub fn new(value: ScientificValue<U>, target: PhysicalQuantity, found: Dimension) -> Self {
    Self {
      value,
      target,
      expected: target.dimension(),
      found,
      _priv: (),
    }
  }
}

impl<U: Debug> ErrorWithPayload<ScientificValue<U>> for DimensionMismatchError<U> {
  fn recover_payload(self) -> ScientificValue<U> {
    self.value
  }
}
