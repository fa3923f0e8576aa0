
//! Helpers shared by the unit test modules.

use super::unit::ScientificUnit;
use super::value::ScientificValue;
use crate::decimal::Decimal;

use std::str::FromStr;

pub fn dec(s: &str) -> Decimal {
  Decimal::from_str(s).unwrap()
}

/// Asserts that `actual` has exactly the given magnitude and unit.
pub fn assert_value<U: ScientificUnit>(actual: &ScientificValue<U>, magnitude: &str, unit: U) {
  assert_eq!(actual.unit(), &unit, "unexpected unit for {}", actual);
  assert_eq!(actual.magnitude(), &dec(magnitude), "unexpected magnitude for {}", actual);
}
