
use crate::decimal::ParseDecimalError;
use crate::units::dimension::Dimension;
use crate::units::error::DimensionMismatchError;
use crate::units::quantity::PhysicalQuantity;

use thiserror::Error;

/// Crate-wide error type, for callers that do not need to recover the
/// payload of a more specific error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ParseDecimal(#[from] ParseDecimalError),
  #[error("Cannot express {found} as {target} (expected {expected})")]
  DimensionMismatch {
    target: PhysicalQuantity,
    expected: Dimension,
    found: Dimension,
  },
  #[error("Invalid settings: {0}")]
  Settings(#[from] serde_json::Error),
}

impl<U> From<DimensionMismatchError<U>> for Error {
  fn from(err: DimensionMismatchError<U>) -> Self {
    Self::DimensionMismatch {
      target: err.target,
      expected: err.expected,
      found: err.found,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::catalog::{Force, Length, Pressure};
  use crate::units::unit::ScientificUnit;

  use std::str::FromStr;

  #[test]
  fn test_parse_error_converts() {
    let err: Error = Decimal::from_str("1.2.3").unwrap_err().into();
    assert_eq!(err.to_string(), "Failed to parse '1.2.3' as a decimal");
  }

  #[test]
  fn test_dimension_mismatch_converts() {
    fn reinterpret() -> Result<(), Error> {
      let value = Force::Newton.of(1).per(&Length::Meter.of(1));
      value.try_into_defined(Pressure::Pascal)?;
      Ok(())
    }
    let err = reinterpret().unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { target: PhysicalQuantity::Pressure, .. }));
    assert_eq!(err.to_string(), "Cannot express mass / time^2 as pressure (expected mass / length time^2)");
  }
}
