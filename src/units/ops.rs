
//! Arithmetic operators on [`ScientificValue`].
//!
//! Multiplication and division between quantities are available
//! exactly when the relation table (or the undefined unit algebra)
//! says what the result is; anything else fails to compile. Addition
//! and subtraction are only defined between values of the same
//! quantity, and keep the unit of the left operand.

use super::unit::ScientificUnit;
use super::value::ScientificValue;
use super::relation::{Multiply, Divide};
use super::convert::{convert_value, by_multiplying, by_dividing};
use crate::decimal::Decimal;

use std::ops::{Add, Sub, Mul, Div, Neg};

macro_rules! impl_derived_op {
  (impl $trait_: ident via $relation: ident { fn $method: ident => $unit_method: ident, $engine: ident }) => {
    impl<'a, 'b, L, R> $trait_<&'b ScientificValue<R>> for &'a ScientificValue<L>
    where L: $relation<R>,
          R: ScientificUnit {
      type Output = ScientificValue<<L as $relation<R>>::Output>;

      fn $method(self, rhs: &'b ScientificValue<R>) -> Self::Output {
        let unit = self.unit().$unit_method(rhs.unit());
        $engine(self, rhs, unit)
      }
    }

    impl<L, R> $trait_<ScientificValue<R>> for ScientificValue<L>
    where L: $relation<R>,
          R: ScientificUnit {
      type Output = ScientificValue<<L as $relation<R>>::Output>;

      fn $method(self, rhs: ScientificValue<R>) -> Self::Output {
        $trait_::$method(&self, &rhs)
      }
    }
  };
}

macro_rules! impl_same_unit_op {
  (impl $trait_: ident { fn $method: ident }) => {
    impl<'a, 'b, U: ScientificUnit> $trait_<&'b ScientificValue<U>> for &'a ScientificValue<U> {
      type Output = ScientificValue<U>;

      fn $method(self, rhs: &'b ScientificValue<U>) -> ScientificValue<U> {
        let rhs_magnitude = convert_value(rhs, self.unit());
        ScientificValue::new($trait_::$method(self.magnitude(), &rhs_magnitude), self.unit().clone())
      }
    }

    impl<U: ScientificUnit> $trait_ for ScientificValue<U> {
      type Output = ScientificValue<U>;

      fn $method(self, rhs: ScientificValue<U>) -> ScientificValue<U> {
        $trait_::$method(&self, &rhs)
      }
    }
  };
}

impl_derived_op! { impl Mul via Multiply { fn mul => product_unit, by_multiplying } }
// Division panics on a zero divisor.
impl_derived_op! { impl Div via Divide { fn div => quotient_unit, by_dividing } }

impl_same_unit_op! { impl Add { fn add } }
impl_same_unit_op! { impl Sub { fn sub } }

impl<U> Mul<Decimal> for ScientificValue<U> {
  type Output = ScientificValue<U>;

  fn mul(self, rhs: Decimal) -> ScientificValue<U> {
    self.map_magnitude(|m| m * rhs)
  }
}

impl<U> Mul<ScientificValue<U>> for Decimal {
  type Output = ScientificValue<U>;

  fn mul(self, rhs: ScientificValue<U>) -> ScientificValue<U> {
    rhs.map_magnitude(|m| self * m)
  }
}

impl<U> Div<Decimal> for ScientificValue<U> {
  type Output = ScientificValue<U>;

  fn div(self, rhs: Decimal) -> ScientificValue<U> {
    self.map_magnitude(|m| m / rhs)
  }
}

impl<U> Neg for ScientificValue<U> {
  type Output = ScientificValue<U>;

  fn neg(self) -> ScientificValue<U> {
    self.map_magnitude(|m| -m)
  }
}

impl<'a, U: Clone> Neg for &'a ScientificValue<U> {
  type Output = ScientificValue<U>;

  fn neg(self) -> ScientificValue<U> {
    ScientificValue::new(-self.magnitude(), self.unit().clone())
  }
}
