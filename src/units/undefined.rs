
//! Composite units that do not belong to any quantity in the catalog.
//!
//! An undefined unit is built out of defined units by wrapping them
//! and dividing them by one another. Multiplication is expressed as
//! division by a reciprocal, so that `A x B` is `A per (1 / B)`.
//! Conversions go through the canonical units of the leaves, exactly
//! as they do for defined units.

use super::unit::{ScientificUnit, DefinedUnit};
use super::quantity::{Quantity, UndefinedQuantity};
use super::system::MeasurementSystems;
use super::value::ScientificValue;
use super::error::DimensionMismatchError;
use super::convert::{by_multiplying, by_dividing, by_inverting};
use crate::decimal::Decimal;

use itertools::Itertools;

use std::fmt::{self, Formatter, Display};

/// A defined unit, viewed as a member of the undefined algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wrapped<U> {
  unit: U,
}

/// The reciprocal of a defined unit, such as `1/s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inverted<U> {
  unit: U,
}

/// The quotient of two undefined units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Divided<N, D> {
  numerator: N,
  denominator: D,
}

/// Units which have a reciprocal in the undefined algebra.
///
/// On undefined units, `reciprocal` is an involution: taking it twice
/// yields the unit it started from, with the same type.
pub trait Reciprocal {
  type Output: UndefinedUnit;

  fn reciprocal(self) -> Self::Output;
}

pub trait UndefinedUnit: ScientificUnit + Reciprocal {
  fn undefined_quantity(&self) -> UndefinedQuantity;

  /// The symbols of the defined leaves that end up in the numerator
  /// and denominator of this unit, in order.
  fn symbol_parts(&self) -> (Vec<String>, Vec<String>);
}

/// Conversion of any unit into the undefined algebra. Defined units
/// become [`Wrapped`]; undefined units are returned unchanged.
pub trait IntoUndefined: ScientificUnit {
  type Undefined: UndefinedUnit;

  fn into_undefined(self) -> Self::Undefined;
}

/// Unit-level construction of composite units.
pub trait UnitAlgebra: IntoUndefined {
  /// `self / rhs`.
  fn per<R: IntoUndefined>(self, rhs: R) -> Divided<Self::Undefined, R::Undefined> {
    Divided::new(self.into_undefined(), rhs.into_undefined())
  }

  /// `self * rhs`, formed as `self / (1 / rhs)`.
  fn x<R: IntoUndefined>(self, rhs: R) -> Divided<Self::Undefined, <R::Undefined as Reciprocal>::Output> {
    Divided::new(self.into_undefined(), rhs.into_undefined().reciprocal())
  }
}

impl<T: IntoUndefined> UnitAlgebra for T {}

impl<U> Wrapped<U> {
  pub fn new(unit: U) -> Self {
    Self { unit }
  }
}

impl<U: Copy> Wrapped<U> {
  pub fn unit(&self) -> U {
    self.unit
  }
}

impl<U> Inverted<U> {
  pub fn new(unit: U) -> Self {
    Self { unit }
  }
}

impl<U: Copy> Inverted<U> {
  pub fn unit(&self) -> U {
    self.unit
  }
}

impl<N, D> Divided<N, D> {
  pub fn new(numerator: N, denominator: D) -> Self {
    Self { numerator, denominator }
  }

  pub fn numerator(&self) -> &N {
    &self.numerator
  }

  pub fn denominator(&self) -> &D {
    &self.denominator
  }
}

fn symbol_factor(symbol: &str, compound: bool) -> String {
  if compound && symbol.contains('/') {
    format!("({})", symbol)
  } else {
    symbol.to_owned()
  }
}

/// Renders a composite symbol such as `m/s`, `m⋅s`, or `N/(m²⋅s)`.
fn render_symbol(numerator: &[String], denominator: &[String]) -> String {
  let compound = numerator.len() + denominator.len() > 1;
  let numerator_text = if numerator.is_empty() {
    String::from("1")
  } else {
    numerator.iter().map(|s| symbol_factor(s, compound)).join("⋅")
  };
  match denominator {
    [] => numerator_text,
    [single] => format!("{}/{}", numerator_text, symbol_factor(single, true)),
    many => format!("{}/({})", numerator_text, many.iter().map(|s| symbol_factor(s, true)).join("⋅")),
  }
}

impl<U: DefinedUnit> ScientificUnit for Wrapped<U> {
  fn symbol(&self) -> String {
    self.unit.symbol()
  }

  fn quantity(&self) -> Quantity {
    Quantity::Undefined(self.undefined_quantity())
  }

  fn systems(&self) -> MeasurementSystems {
    self.unit.systems()
  }

  fn to_canonical(&self, value: &Decimal) -> Decimal {
    self.unit.to_canonical(value)
  }

  fn from_canonical(&self, value: &Decimal) -> Decimal {
    self.unit.from_canonical(value)
  }
}

impl<U: DefinedUnit> ScientificUnit for Inverted<U> {
  fn symbol(&self) -> String {
    let (numerator, denominator) = self.symbol_parts();
    render_symbol(&numerator, &denominator)
  }

  fn quantity(&self) -> Quantity {
    Quantity::Undefined(self.undefined_quantity())
  }

  fn systems(&self) -> MeasurementSystems {
    self.unit.systems()
  }

  // A magnitude in `1/U` scales by the reciprocal of the factor of
  // `U`.
  fn to_canonical(&self, value: &Decimal) -> Decimal {
    self.unit.from_canonical(value)
  }

  fn from_canonical(&self, value: &Decimal) -> Decimal {
    self.unit.to_canonical(value)
  }
}

impl<N: UndefinedUnit, D: UndefinedUnit> ScientificUnit for Divided<N, D> {
  fn symbol(&self) -> String {
    let (numerator, denominator) = self.symbol_parts();
    render_symbol(&numerator, &denominator)
  }

  fn quantity(&self) -> Quantity {
    Quantity::Undefined(self.undefined_quantity())
  }

  /// A quotient only belongs to the systems both of its halves belong
  /// to.
  fn systems(&self) -> MeasurementSystems {
    self.numerator.systems() & self.denominator.systems()
  }

  fn to_canonical(&self, value: &Decimal) -> Decimal {
    self.denominator.from_canonical(&self.numerator.to_canonical(value))
  }

  fn from_canonical(&self, value: &Decimal) -> Decimal {
    self.denominator.to_canonical(&self.numerator.from_canonical(value))
  }
}

impl<U: DefinedUnit> UndefinedUnit for Wrapped<U> {
  fn undefined_quantity(&self) -> UndefinedQuantity {
    UndefinedQuantity::Wrapped(U::QUANTITY)
  }

  fn symbol_parts(&self) -> (Vec<String>, Vec<String>) {
    (vec![self.unit.symbol()], vec![])
  }
}

impl<U: DefinedUnit> UndefinedUnit for Inverted<U> {
  fn undefined_quantity(&self) -> UndefinedQuantity {
    UndefinedQuantity::Inverted(U::QUANTITY)
  }

  fn symbol_parts(&self) -> (Vec<String>, Vec<String>) {
    (vec![], vec![self.unit.symbol()])
  }
}

impl<N: UndefinedUnit, D: UndefinedUnit> UndefinedUnit for Divided<N, D> {
  fn undefined_quantity(&self) -> UndefinedQuantity {
    UndefinedQuantity::Divided(
      Box::new(self.numerator.undefined_quantity()),
      Box::new(self.denominator.undefined_quantity()),
    )
  }

  fn symbol_parts(&self) -> (Vec<String>, Vec<String>) {
    let (mut numerator, mut denominator) = self.numerator.symbol_parts();
    let (inner_numerator, inner_denominator) = self.denominator.symbol_parts();
    numerator.extend(inner_denominator);
    denominator.extend(inner_numerator);
    (numerator, denominator)
  }
}

impl<U: DefinedUnit> Reciprocal for Wrapped<U> {
  type Output = Inverted<U>;

  fn reciprocal(self) -> Inverted<U> {
    Inverted::new(self.unit)
  }
}

impl<U: DefinedUnit> Reciprocal for Inverted<U> {
  type Output = Wrapped<U>;

  fn reciprocal(self) -> Wrapped<U> {
    Wrapped::new(self.unit)
  }
}

impl<N: UndefinedUnit, D: UndefinedUnit> Reciprocal for Divided<N, D> {
  type Output = Divided<D, N>;

  fn reciprocal(self) -> Divided<D, N> {
    Divided::new(self.denominator, self.numerator)
  }
}

impl<U: DefinedUnit> IntoUndefined for Wrapped<U> {
  type Undefined = Self;

  fn into_undefined(self) -> Self {
    self
  }
}

impl<U: DefinedUnit> IntoUndefined for Inverted<U> {
  type Undefined = Self;

  fn into_undefined(self) -> Self {
    self
  }
}

impl<N: UndefinedUnit, D: UndefinedUnit> IntoUndefined for Divided<N, D> {
  type Undefined = Self;

  fn into_undefined(self) -> Self {
    self
  }
}

impl<U: DefinedUnit> Display for Wrapped<U> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl<U: DefinedUnit> Display for Inverted<U> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl<N: UndefinedUnit, D: UndefinedUnit> Display for Divided<N, D> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl<U: IntoUndefined> ScientificValue<U> {
  /// `self / rhs` as a value of a composite unit.
  ///
  /// # Panics
  ///
  /// Panics if `rhs` is zero.
  pub fn per<R: IntoUndefined>(&self, rhs: &ScientificValue<R>) -> ScientificValue<Divided<U::Undefined, R::Undefined>> {
    let unit = self.unit().clone().per(rhs.unit().clone());
    by_dividing(self, rhs, unit)
  }

  /// `self * rhs` as a value of a composite unit.
  pub fn x<R: IntoUndefined>(
    &self,
    rhs: &ScientificValue<R>,
  ) -> ScientificValue<Divided<U::Undefined, <R::Undefined as Reciprocal>::Output>> {
    let unit = self.unit().clone().x(rhs.unit().clone());
    by_multiplying(self, rhs, unit)
  }
}

impl<U: ScientificUnit + Reciprocal> ScientificValue<U> {
  /// `1 / self`, in the reciprocal unit.
  ///
  /// # Panics
  ///
  /// Panics if `self` is zero.
  pub fn reciprocal(&self) -> ScientificValue<U::Output> {
    by_inverting(self, self.unit().clone().reciprocal())
  }
}

impl<U: DefinedUnit> ScientificValue<U> {
  pub fn wrapped(self) -> ScientificValue<Wrapped<U>> {
    let (magnitude, unit) = self.into_parts();
    ScientificValue::new(magnitude, Wrapped::new(unit))
  }
}

impl<U: DefinedUnit> ScientificValue<Wrapped<U>> {
  pub fn unwrapped(self) -> ScientificValue<U> {
    let (magnitude, unit) = self.into_parts();
    ScientificValue::new(magnitude, unit.unit)
  }
}

impl<U: UndefinedUnit> ScientificValue<U> {
  /// Reinterprets `self` as a value of the defined quantity of
  /// `target`, expressed in `target`. Fails, handing `self` back, if
  /// the dimensions disagree.
  pub fn try_into_defined<T: DefinedUnit>(self, target: T) -> Result<ScientificValue<T>, DimensionMismatchError<U>> {
    let found = self.dimension();
    if found != T::QUANTITY.dimension() {
      return Err(DimensionMismatchError::new(self, T::QUANTITY, found));
    }
    let magnitude = target.from_canonical(&self.canonical_magnitude());
    Ok(ScientificValue::new(magnitude, target))
  }
}
