
use super::dimension::Dimension;
use super::quantity::{Quantity, PhysicalQuantity};
use super::system::{MeasurementSystem, MeasurementSystems};
use super::value::ScientificValue;
use crate::decimal::Decimal;

use std::fmt::Debug;
use std::hash::Hash;

/// A unit is a named scale for some quantity which can be converted
/// to and from the canonical unit of that quantity.
///
/// The Rust type implementing this trait identifies the quantity at
/// compile time: a [`ScientificValue<U>`] can only be converted into
/// another unit of the same type `U`. Every conversion routes through
/// the canonical unit, so a quantity with `n` units needs `n`
/// conversion pairs rather than `n^2`.
pub trait ScientificUnit: Clone + Debug + PartialEq + Eq + Hash {
  /// Display symbol of the unit, such as `"km"` or `"N/m²"`.
  fn symbol(&self) -> String;

  fn quantity(&self) -> Quantity;

  fn systems(&self) -> MeasurementSystems;

  /// Converts a magnitude in this unit into the canonical unit of its
  /// quantity.
  fn to_canonical(&self, value: &Decimal) -> Decimal;

  /// Converts a magnitude in the canonical unit of this quantity into
  /// this unit.
  fn from_canonical(&self, value: &Decimal) -> Decimal;

  fn dimension(&self) -> Dimension {
    self.quantity().dimension()
  }

  fn used_in(&self, system: MeasurementSystem) -> bool {
    self.systems().used_in(system)
  }

  /// Tags `magnitude` with this unit.
  fn of(self, magnitude: impl Into<Decimal>) -> ScientificValue<Self>
  where Self: Sized {
    ScientificValue::new(magnitude, self)
  }
}

/// A unit drawn from the named-quantity catalog.
///
/// Defined units are stateless constants: each quantity is an enum
/// whose variants are its units.
pub trait DefinedUnit: ScientificUnit + Copy + 'static {
  const QUANTITY: PhysicalQuantity;

  /// The unit every conversion of this quantity is routed through.
  const CANONICAL: Self;

  /// Every unit of this quantity in the catalog.
  fn all() -> &'static [Self];

  /// The unit a derived result of this quantity is expressed in when
  /// its operands agree on `system`. With no common system, this is
  /// the canonical unit.
  fn natural_unit(system: Option<MeasurementSystem>) -> Self;
}
