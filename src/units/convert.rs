
//! The conversion engine.
//!
//! Every function here routes through canonical units: a magnitude is
//! first converted into the canonical unit of its own quantity, the
//! arithmetic happens on canonical magnitudes, and the result is
//! converted out of the canonical unit of the target. Because every
//! canonical unit is a coherent SI unit, the product (or quotient) of
//! two canonical magnitudes is already canonical for the derived
//! quantity, so no pairwise conversion tables are needed.

use super::unit::ScientificUnit;
use super::value::ScientificValue;
use crate::decimal::{Decimal, Rounding};

use tracing::trace;

/// The magnitude of `value` expressed in `target`, exactly.
pub fn convert_value<U: ScientificUnit>(value: &ScientificValue<U>, target: &U) -> Decimal {
  if value.unit() == target {
    return value.magnitude().clone();
  }
  let canonical = value.unit().to_canonical(value.magnitude());
  let result = target.from_canonical(&canonical);
  trace!(from = %value.unit().symbol(), to = %target.symbol(), %canonical, %result, "converted");
  result
}

/// Converts `value` into `target`, then rounds the magnitude if a
/// rounding is requested.
pub fn convert<U: ScientificUnit>(
  value: &ScientificValue<U>,
  target: U,
  rounding: Option<Rounding>,
) -> ScientificValue<U> {
  let mut magnitude = convert_value(value, &target);
  if let Some(rounding) = rounding {
    magnitude = rounding.apply(&magnitude);
    trace!(scale = rounding.scale, mode = ?rounding.mode, %magnitude, "rounded");
  }
  ScientificValue::new(magnitude, target)
}

/// The product of `left` and `right`, expressed in `result_unit`.
///
/// The caller is responsible for `result_unit` having the dimension
/// of the product.
pub fn by_multiplying<L, R, O>(
  left: &ScientificValue<L>,
  right: &ScientificValue<R>,
  result_unit: O,
) -> ScientificValue<O>
where L: ScientificUnit,
      R: ScientificUnit,
      O: ScientificUnit {
  let canonical = left.canonical_magnitude() * right.canonical_magnitude();
  let magnitude = result_unit.from_canonical(&canonical);
  trace!(left = %left, right = %right, result_unit = %result_unit.symbol(), %magnitude, "multiplied");
  ScientificValue::new(magnitude, result_unit)
}

/// The quotient of `numerator` by `denominator`, expressed in
/// `result_unit`.
///
/// # Panics
///
/// Panics if `denominator` is zero.
pub fn by_dividing<N, D, O>(
  numerator: &ScientificValue<N>,
  denominator: &ScientificValue<D>,
  result_unit: O,
) -> ScientificValue<O>
where N: ScientificUnit,
      D: ScientificUnit,
      O: ScientificUnit {
  let canonical = numerator.canonical_magnitude() / denominator.canonical_magnitude();
  let magnitude = result_unit.from_canonical(&canonical);
  trace!(numerator = %numerator, denominator = %denominator, result_unit = %result_unit.symbol(), %magnitude, "divided");
  ScientificValue::new(magnitude, result_unit)
}

/// The quotient of `numerator` by `denominator`, or `None` if
/// `denominator` is zero.
pub fn try_by_dividing<N, D, O>(
  numerator: &ScientificValue<N>,
  denominator: &ScientificValue<D>,
  result_unit: O,
) -> Option<ScientificValue<O>>
where N: ScientificUnit,
      D: ScientificUnit,
      O: ScientificUnit {
  let canonical = numerator.canonical_magnitude().checked_div(&denominator.canonical_magnitude())?;
  Some(ScientificValue::new(result_unit.from_canonical(&canonical), result_unit))
}

/// The reciprocal of `value`, expressed in `result_unit`.
///
/// # Panics
///
/// Panics if `value` is zero.
pub fn by_inverting<U, O>(value: &ScientificValue<U>, result_unit: O) -> ScientificValue<O>
where U: ScientificUnit,
      O: ScientificUnit {
  let canonical = value.canonical_magnitude().recip();
  let magnitude = result_unit.from_canonical(&canonical);
  trace!(value = %value, result_unit = %result_unit.symbol(), %magnitude, "inverted");
  ScientificValue::new(magnitude, result_unit)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::catalog::{Length, Area, Time, Speed, Frequency, Force, Pressure, Energy};
  use crate::units::test_utils::dec;
  use crate::decimal::RoundingMode;

  #[test]
  fn test_convert_value() {
    let value = Speed::MeterPerSecond.of(5);
    assert_eq!(convert_value(&value, &Speed::KilometerPerHour), Decimal::from(18));
  }

  #[test]
  fn test_convert_with_rounding() {
    let value = Length::Foot.of(1);
    let rounded = convert(&value, Length::Meter, Some(Rounding::new(2, RoundingMode::HalfUp)));
    assert_eq!(rounded, Length::Meter.of(dec("0.30")));
    let exact = convert(&value, Length::Meter, None);
    assert_eq!(exact, Length::Meter.of(dec("0.3048")));
  }

  #[test]
  fn test_by_multiplying_into_chosen_unit() {
    let a = Length::Centimeter.of(100);
    let b = Length::Meter.of(2);
    assert_eq!(by_multiplying(&a, &b, Area::SquareMeter), Area::SquareMeter.of(2));
    assert_eq!(by_multiplying(&a, &b, Area::SquareCentimeter), Area::SquareCentimeter.of(20_000));
  }

  #[test]
  fn test_by_dividing_into_chosen_unit() {
    let distance = Length::Kilometer.of(36);
    let time = Time::Hour.of(1);
    assert_eq!(by_dividing(&distance, &time, Speed::MeterPerSecond), Speed::MeterPerSecond.of(10));
    let force = Force::Newton.of(10);
    let area = Area::SquareMeter.of(2);
    assert_eq!(by_dividing(&force, &area, Pressure::Pascal), Pressure::Pascal.of(5));
  }

  #[test]
  fn test_try_by_dividing_by_zero() {
    let energy = Energy::Joule.of(1);
    let time = Time::Second.of(0);
    assert_eq!(try_by_dividing(&energy, &time, crate::units::catalog::Power::Watt), None);
  }

  #[test]
  #[should_panic]
  fn test_by_dividing_by_zero() {
    by_dividing(&Length::Meter.of(1), &Time::Second.of(0), Speed::MeterPerSecond);
  }

  #[test]
  fn test_by_inverting() {
    let frequency = Frequency::Hertz.of(2);
    assert_eq!(by_inverting(&frequency, Time::Second), Time::Second.of(dec("0.5")));
    assert_eq!(by_inverting(&frequency, Time::Millisecond), Time::Millisecond.of(500));
    let period = Time::Minute.of(1);
    assert_eq!(by_inverting(&period, Frequency::BeatsPerMinute), Frequency::BeatsPerMinute.of(1));
  }
}
