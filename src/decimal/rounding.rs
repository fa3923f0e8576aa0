
use super::Decimal;

use num::{BigInt, BigRational, Zero, One, Signed, Integer};
use serde::{Serialize, Deserialize};
use tracing::debug;

use std::cmp::Ordering;

/// Strategies for discarding fractional digits in [`Decimal::round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
  /// Towards positive infinity.
  Ceiling,
  /// Towards negative infinity.
  Floor,
  /// To the nearest neighbor, ties to the even neighbor.
  #[default]
  HalfEven,
  /// To the nearest neighbor, ties away from zero.
  HalfUp,
  /// To the nearest neighbor, ties towards zero.
  HalfDown,
  /// Towards zero.
  Down,
  /// Away from zero.
  Up,
}

/// How [`RoundingMode::HalfUp`] is interpreted.
///
/// Some platform decimal backends have historically implemented
/// half-up rounding as plain flooring. `FloorCompatible` reproduces
/// that behavior for callers that need results matching those
/// platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfUpBehavior {
  #[default]
  Standard,
  FloorCompatible,
}

/// A request to round to `scale` fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rounding {
  pub scale: u32,
  pub mode: RoundingMode,
}

impl RoundingMode {
  /// The mode that is actually applied under the given
  /// [`HalfUpBehavior`].
  pub fn resolve(self, behavior: HalfUpBehavior) -> RoundingMode {
    match (self, behavior) {
      (RoundingMode::HalfUp, HalfUpBehavior::FloorCompatible) => {
        debug!("half-up rounding resolved to floor for platform compatibility");
        RoundingMode::Floor
      }
      (mode, _) => mode,
    }
  }
}

impl Rounding {
  pub fn new(scale: u32, mode: RoundingMode) -> Self {
    Self { scale, mode }
  }

  /// Rounds to `scale` digits with the default mode,
  /// [`RoundingMode::HalfEven`].
  pub fn with_scale(scale: u32) -> Self {
    Self::new(scale, RoundingMode::default())
  }

  pub fn apply(&self, value: &Decimal) -> Decimal {
    value.round(self.scale, self.mode)
  }
}

impl Decimal {
  /// Rounds `self` to `scale` fractional digits using `mode`.
  pub fn round(&self, scale: u32, mode: RoundingMode) -> Decimal {
    let factor = BigRational::from_integer(num::pow(BigInt::from(10), scale as usize));
    let scaled = &self.inner * &factor;
    let floor = scaled.floor();
    let fraction = &scaled - &floor;
    if fraction.is_zero() {
      return Decimal { inner: scaled / factor };
    }
    let ceiling = &floor + BigRational::one();
    // `scaled` is not an integer here, so its sign is never zero.
    let positive = scaled.is_positive();
    let toward_zero = if positive { floor.clone() } else { ceiling.clone() };
    let away_from_zero = if positive { ceiling.clone() } else { floor.clone() };
    let half = BigRational::new(BigInt::from(1), BigInt::from(2));
    let rounded = match mode {
      RoundingMode::Ceiling => ceiling,
      RoundingMode::Floor => floor,
      RoundingMode::Down => toward_zero,
      RoundingMode::Up => away_from_zero,
      RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
        match fraction.cmp(&half) {
          Ordering::Less => floor,
          Ordering::Greater => ceiling,
          Ordering::Equal => match mode {
            RoundingMode::HalfUp => away_from_zero,
            RoundingMode::HalfDown => toward_zero,
            _ => if floor.to_integer().is_even() { floor } else { ceiling },
          },
        }
      }
    };
    Decimal { inner: rounded / factor }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::str::FromStr;

  const INPUTS: [&str; 10] = ["5.5", "2.5", "1.6", "1.1", "1.0", "-1.0", "-1.1", "-1.6", "-2.5", "-5.5"];

  fn assert_rounds(mode: RoundingMode, expected: [i64; 10]) {
    for (input, expected) in INPUTS.iter().zip(expected) {
      let value = Decimal::from_str(input).unwrap();
      assert_eq!(value.round(0, mode), Decimal::from(expected), "{:?} of {}", mode, input);
    }
  }

  #[test]
  fn test_round_up() {
    assert_rounds(RoundingMode::Up, [6, 3, 2, 2, 1, -1, -2, -2, -3, -6]);
  }

  #[test]
  fn test_round_down() {
    assert_rounds(RoundingMode::Down, [5, 2, 1, 1, 1, -1, -1, -1, -2, -5]);
  }

  #[test]
  fn test_round_ceiling() {
    assert_rounds(RoundingMode::Ceiling, [6, 3, 2, 2, 1, -1, -1, -1, -2, -5]);
  }

  #[test]
  fn test_round_floor() {
    assert_rounds(RoundingMode::Floor, [5, 2, 1, 1, 1, -1, -2, -2, -3, -6]);
  }

  #[test]
  fn test_round_half_up() {
    assert_rounds(RoundingMode::HalfUp, [6, 3, 2, 1, 1, -1, -1, -2, -3, -6]);
  }

  #[test]
  fn test_round_half_down() {
    assert_rounds(RoundingMode::HalfDown, [5, 2, 2, 1, 1, -1, -1, -2, -2, -5]);
  }

  #[test]
  fn test_round_half_even() {
    assert_rounds(RoundingMode::HalfEven, [6, 2, 2, 1, 1, -1, -1, -2, -2, -6]);
  }

  #[test]
  fn test_round_to_scale() {
    let value = Decimal::from_str("3.14159").unwrap();
    assert_eq!(value.round(2, RoundingMode::HalfEven), Decimal::from_str("3.14").unwrap());
    assert_eq!(value.round(3, RoundingMode::Ceiling), Decimal::from_str("3.142").unwrap());
    assert_eq!(value.round(10, RoundingMode::Floor), value);
    assert_eq!(Decimal::ratio(1, 3).round(4, RoundingMode::Up), Decimal::from_str("0.3334").unwrap());
  }

  #[test]
  fn test_default_mode_is_half_even() {
    assert_eq!(RoundingMode::default(), RoundingMode::HalfEven);
    assert_eq!(Rounding::with_scale(0).apply(&Decimal::from_str("2.5").unwrap()), Decimal::from(2));
  }

  // Known discrepancy, pending product clarification: some platform
  // backends floor where half-up rounding is requested. The
  // FloorCompatible behavior reproduces that; Standard does not.
  #[test]
  fn test_half_up_floor_compatible_discrepancy() {
    let value = Decimal::from_str("2.5").unwrap();
    let compat = RoundingMode::HalfUp.resolve(HalfUpBehavior::FloorCompatible);
    assert_eq!(compat, RoundingMode::Floor);
    assert_eq!(value.round(0, compat), Decimal::from(2));
    let standard = RoundingMode::HalfUp.resolve(HalfUpBehavior::Standard);
    assert_eq!(standard, RoundingMode::HalfUp);
    assert_eq!(value.round(0, standard), Decimal::from(3));
  }

  #[test]
  fn test_resolve_leaves_other_modes_alone() {
    assert_eq!(RoundingMode::HalfDown.resolve(HalfUpBehavior::FloorCompatible), RoundingMode::HalfDown);
    assert_eq!(RoundingMode::Ceiling.resolve(HalfUpBehavior::FloorCompatible), RoundingMode::Ceiling);
  }
}
