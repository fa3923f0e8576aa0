
use super::unit::ScientificUnit;
use super::dimension::Dimension;
use super::quantity::Quantity;
use super::convert;
use crate::decimal::{Decimal, Rounding};
use crate::config::ConversionSettings;

use std::cmp::Ordering;
use std::fmt::{self, Formatter, Display};

/// An immutable magnitude tagged with the unit it is measured in.
///
/// The magnitude is expressed in the scale of `unit` itself, not in
/// the canonical unit. Two values compare equal with `==` only when
/// both the magnitude and the unit agree; use
/// [`ScientificValue::is_equivalent`] to compare physical amounts
/// across units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScientificValue<U> {
  magnitude: Decimal,
  unit: U,
}

impl<U> ScientificValue<U> {
  pub fn new(magnitude: impl Into<Decimal>, unit: U) -> Self {
    Self { magnitude: magnitude.into(), unit }
  }

  pub fn magnitude(&self) -> &Decimal {
    &self.magnitude
  }

  pub fn unit(&self) -> &U {
    &self.unit
  }

  pub fn into_parts(self) -> (Decimal, U) {
    (self.magnitude, self.unit)
  }

  /// Applies `f` to the magnitude, keeping the unit.
  pub fn map_magnitude(self, f: impl FnOnce(Decimal) -> Decimal) -> Self {
    Self { magnitude: f(self.magnitude), unit: self.unit }
  }
}

impl<U: ScientificUnit> ScientificValue<U> {
  /// The magnitude of `self`, expressed in the canonical unit of its
  /// quantity.
  pub fn canonical_magnitude(&self) -> Decimal {
    self.unit.to_canonical(&self.magnitude)
  }

  pub fn quantity(&self) -> Quantity {
    self.unit.quantity()
  }

  pub fn dimension(&self) -> Dimension {
    self.unit.dimension()
  }

  /// Exact conversion into `target`.
  pub fn convert(&self, target: U) -> ScientificValue<U> {
    convert::convert(self, target, None)
  }

  /// Conversion into `target`, rounded as `rounding` requests.
  pub fn convert_rounded(&self, target: U, rounding: Rounding) -> ScientificValue<U> {
    convert::convert(self, target, Some(rounding))
  }

  /// Conversion into `target`, rounded according to `settings`. With
  /// no scale configured, the conversion is exact.
  pub fn convert_with(&self, target: U, settings: &ConversionSettings) -> ScientificValue<U> {
    convert::convert(self, target, settings.rounding())
  }

  /// Whether `self` and `other` describe the same physical amount,
  /// regardless of the units they are written in.
  pub fn is_equivalent(&self, other: &ScientificValue<U>) -> bool {
    self.canonical_magnitude() == other.canonical_magnitude()
  }

  /// The dimensionless quotient `self / other`, or `None` if `other`
  /// is zero.
  pub fn ratio_to(&self, other: &ScientificValue<U>) -> Option<Decimal> {
    self.canonical_magnitude().checked_div(&other.canonical_magnitude())
  }

  /// Orders two values by physical amount.
  pub fn cmp_magnitude(&self, other: &ScientificValue<U>) -> Ordering {
    self.canonical_magnitude().cmp(&other.canonical_magnitude())
  }
}

impl<U: ScientificUnit> Display for ScientificValue<U> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} {}", self.magnitude, self.unit.symbol())
  }
}
