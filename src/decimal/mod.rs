
//! Exact decimal arithmetic backing every measured magnitude.

mod rounding;

pub use rounding::{RoundingMode, HalfUpBehavior, Rounding};

use num::{BigInt, BigRational, Zero, One, Signed, Integer};
use num::traits::ToPrimitive;
use thiserror::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::ops;
use std::cmp::Ordering;
use std::convert::TryFrom;

/// Largest written exponent (in absolute value) the parser will
/// accept.
const MAX_EXPONENT: i64 = 4096;

/// Number of fractional digits shown by [`Display`] for values with
/// no terminating decimal expansion, such as `1/3`.
const DISPLAY_PRECISION: u32 = 32;

/// Arbitrary-precision decimal number.
///
/// Internally, a `Decimal` is an exact rational number, so every unit
/// factor in the catalog (all of which are exact ratios) converts
/// without loss. Rounding only ever happens when explicitly requested
/// through [`Decimal::round`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal {
  inner: BigRational,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse '{input}' as a decimal")]
pub struct ParseDecimalError {
  pub input: String,
  _priv: (),
}

impl Decimal {
  /// Produces the exact quotient `numer / denom`.
  ///
  /// # Panics
  ///
  /// Panics if `denom == 0`.
  pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Decimal {
    Decimal { inner: BigRational::new(numer.into(), denom.into()) }
  }

  /// `10^exp`, exactly.
  pub fn pow10(exp: i32) -> Decimal {
    let magnitude = num::pow(BigInt::from(10), exp.unsigned_abs() as usize);
    if exp >= 0 {
      Decimal::from(magnitude)
    } else {
      Decimal::ratio(1, magnitude)
    }
  }

  /// Parses a decimal literal such as `"12"`, `"-0.25"` or `"1.5e-3"`.
  /// Returns `None` if the input is not a decimal literal. Leading
  /// and trailing whitespace is ignored.
  pub fn parse(input: &str) -> Option<Decimal> {
    static RE: Lazy<Regex> = Lazy::new(|| {
      Regex::new(r"^([+-]?)(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?$").unwrap()
    });
    let caps = RE.captures(input.trim())?;
    let negative = caps.get(1).map_or("", |m| m.as_str()) == "-";
    let whole = caps.get(2).map_or("", |m| m.as_str());
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    if whole.is_empty() && fraction.is_empty() {
      return None;
    }
    let exponent = match caps.get(4) {
      Some(m) => m.as_str().parse::<i64>().ok()?,
      None => 0,
    };
    if exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
      return None;
    }
    let fraction_digits = i64::try_from(fraction.len()).ok()?;
    let shift = i32::try_from(exponent.checked_sub(fraction_digits)?).ok()?;
    let mut mantissa = BigInt::from_str(&format!("{}{}", whole, fraction)).ok()?;
    if negative {
      mantissa = -mantissa;
    }
    Some(Decimal::from(mantissa) * Decimal::pow10(shift))
  }

  pub fn as_ratio(&self) -> &BigRational {
    &self.inner
  }

  pub fn is_negative(&self) -> bool {
    self.inner.is_negative()
  }

  pub fn is_positive(&self) -> bool {
    self.inner.is_positive()
  }

  pub fn is_integer(&self) -> bool {
    self.inner.is_integer()
  }

  pub fn abs(&self) -> Decimal {
    Decimal { inner: self.inner.abs() }
  }

  /// The multiplicative inverse of `self`.
  ///
  /// # Panics
  ///
  /// Panics if `self` is zero.
  pub fn recip(&self) -> Decimal {
    Decimal { inner: self.inner.recip() }
  }

  /// Division which returns `None` instead of panicking when `rhs` is
  /// zero.
  pub fn checked_div(&self, rhs: &Decimal) -> Option<Decimal> {
    if rhs.is_zero() {
      None
    } else {
      Some(self / rhs)
    }
  }

  /// Raises `self` to an integer power by repeated squaring.
  ///
  /// The indeterminate form `0^0` is treated as 1.
  ///
  /// # Panics
  ///
  /// Panics if `self` is zero and `exp` is negative.
  pub fn powi(&self, exp: i32) -> Decimal {
    match exp.cmp(&0) {
      Ordering::Equal => Decimal::one(),
      Ordering::Less => Decimal { inner: powi_by_repeated_square(self.inner.recip(), exp.unsigned_abs()) },
      Ordering::Greater => Decimal { inner: powi_by_repeated_square(self.inner.clone(), exp.unsigned_abs()) },
    }
  }

  /// Converts `self` to an `f64` on a best-effort basis.
  pub fn to_f64(&self) -> Option<f64> {
    self.inner.to_f64()
  }

  /// The number of fractional digits needed to write `self` exactly,
  /// or `None` if the decimal expansion of `self` does not terminate.
  pub fn decimal_places(&self) -> Option<u32> {
    let two = BigInt::from(2);
    let five = BigInt::from(5);
    let mut denom = self.inner.denom().clone();
    let mut twos = 0;
    let mut fives = 0;
    while denom.is_even() {
      denom /= &two;
      twos += 1;
    }
    while (&denom % &five).is_zero() {
      denom /= &five;
      fives += 1;
    }
    if denom.is_one() {
      Some(u32::max(twos, fives))
    } else {
      None
    }
  }
}

fn powi_by_repeated_square(mut base: BigRational, mut exp: u32) -> BigRational {
  let mut result = BigRational::one();
  while exp > 0 {
    if exp & 1 == 1 {
      result = result * &base;
    }
    base = &base * &base;
    exp >>= 1;
  }
  result
}

/// Writes the integer `digits` with a decimal point inserted `places`
/// digits from the right, dropping trailing fractional zeroes.
fn write_scaled(f: &mut Formatter<'_>, digits: &BigInt, places: u32) -> fmt::Result {
  let places = places as usize;
  let mut text = digits.abs().to_string();
  if text.len() <= places {
    text = format!("{}{}", "0".repeat(places + 1 - text.len()), text);
  }
  let (whole, fraction) = text.split_at(text.len() - places);
  let fraction = fraction.trim_end_matches('0');
  if digits.is_negative() {
    write!(f, "-")?;
  }
  write!(f, "{}", whole)?;
  if !fraction.is_empty() {
    write!(f, ".{}", fraction)?;
  }
  Ok(())
}

impl Display for Decimal {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let places = self.decimal_places().unwrap_or(DISPLAY_PRECISION);
    let rounded = self.round(places, RoundingMode::HalfEven);
    let digits = (rounded.inner * BigRational::from_integer(num::pow(BigInt::from(10), places as usize))).to_integer();
    write_scaled(f, &digits, places)
  }
}

impl ParseDecimalError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into(), _priv: () }
  }
}

impl FromStr for Decimal {
  type Err = ParseDecimalError;

  fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
    Decimal::parse(s).ok_or_else(|| ParseDecimalError::new(s))
  }
}

/// Converts through the shortest decimal representation of the float,
/// so `0.1` becomes exactly one tenth rather than the nearest binary
/// fraction.
impl TryFrom<f64> for Decimal {
  type Error = ParseDecimalError;

  fn try_from(value: f64) -> Result<Decimal, ParseDecimalError> {
    if !value.is_finite() {
      return Err(ParseDecimalError::new(value.to_string()));
    }
    value.to_string().parse()
  }
}

impl From<i32> for Decimal {
  fn from(i: i32) -> Decimal {
    Decimal::from(BigInt::from(i))
  }
}

impl From<i64> for Decimal {
  fn from(i: i64) -> Decimal {
    Decimal::from(BigInt::from(i))
  }
}

impl From<u32> for Decimal {
  fn from(i: u32) -> Decimal {
    Decimal::from(BigInt::from(i))
  }
}

impl From<u64> for Decimal {
  fn from(i: u64) -> Decimal {
    Decimal::from(BigInt::from(i))
  }
}

impl From<usize> for Decimal {
  fn from(i: usize) -> Decimal {
    Decimal::from(BigInt::from(i))
  }
}

impl From<BigInt> for Decimal {
  fn from(i: BigInt) -> Decimal {
    Decimal { inner: BigRational::from_integer(i) }
  }
}

impl From<BigRational> for Decimal {
  fn from(r: BigRational) -> Decimal {
    Decimal { inner: r }
  }
}

impl Default for Decimal {
  fn default() -> Decimal {
    Decimal::zero()
  }
}

macro_rules! decimal_binop {
  (impl $trait_: ident { fn $method: ident }) => {
    impl ops::$trait_ for Decimal {
      type Output = Decimal;

      fn $method(self, rhs: Decimal) -> Decimal {
        Decimal { inner: ops::$trait_::$method(self.inner, rhs.inner) }
      }
    }

    impl<'a> ops::$trait_<&'a Decimal> for Decimal {
      type Output = Decimal;

      fn $method(self, rhs: &'a Decimal) -> Decimal {
        Decimal { inner: ops::$trait_::$method(self.inner, &rhs.inner) }
      }
    }

    impl<'a, 'b> ops::$trait_<&'b Decimal> for &'a Decimal {
      type Output = Decimal;

      fn $method(self, rhs: &'b Decimal) -> Decimal {
        Decimal { inner: ops::$trait_::$method(&self.inner, &rhs.inner) }
      }
    }
  };
}

decimal_binop! { impl Add { fn add } }
decimal_binop! { impl Sub { fn sub } }
decimal_binop! { impl Mul { fn mul } }
// Division panics on a zero divisor, like the underlying rational type.
decimal_binop! { impl Div { fn div } }

impl ops::Neg for Decimal {
  type Output = Decimal;

  fn neg(self) -> Decimal {
    Decimal { inner: -self.inner }
  }
}

impl ops::Neg for &Decimal {
  type Output = Decimal;

  fn neg(self) -> Decimal {
    Decimal { inner: -&self.inner }
  }
}

impl Zero for Decimal {
  fn zero() -> Decimal {
    Decimal { inner: BigRational::zero() }
  }

  fn is_zero(&self) -> bool {
    self.inner.is_zero()
  }
}

impl One for Decimal {
  fn one() -> Decimal {
    Decimal { inner: BigRational::one() }
  }

  fn is_one(&self) -> bool {
    self.inner.is_one()
  }
}

impl AbsDiffEq for Decimal {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Decimal, epsilon: f64) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.abs_diff_eq(&right, epsilon)
  }
}

impl RelativeEq for Decimal {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Decimal, epsilon: f64, max_relative: f64) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.relative_eq(&right, epsilon, max_relative)
  }
}

impl UlpsEq for Decimal {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Decimal, epsilon: f64, max_ulps: u32) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.ulps_eq(&right, epsilon, max_ulps)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
  }

  #[test]
  fn test_parse_integer() {
    assert_eq!(dec("7"), Decimal::from(7));
    assert_eq!(dec("-99"), Decimal::from(-99));
    assert_eq!(dec("+12"), Decimal::from(12));
    assert_eq!(
      dec("888888888888888888888888888888888"),
      Decimal::from(BigInt::from_str("888888888888888888888888888888888").unwrap()),
    );
  }

  #[test]
  fn test_parse_fraction() {
    assert_eq!(dec("0.5"), Decimal::ratio(1, 2));
    assert_eq!(dec("-0.25"), Decimal::ratio(-1, 4));
    assert_eq!(dec(".5"), Decimal::ratio(1, 2));
    assert_eq!(dec("5."), Decimal::from(5));
    assert_eq!(dec("0.3048"), Decimal::ratio(3048, 10_000));
  }

  #[test]
  fn test_parse_exponent() {
    assert_eq!(dec("1.5e3"), Decimal::from(1500));
    assert_eq!(dec("3E-6"), Decimal::ratio(3, 1_000_000));
    assert_eq!(dec("-2.5e+1"), Decimal::from(-25));
  }

  #[test]
  fn test_parse_failure() {
    assert_eq!(Decimal::parse(""), None);
    assert_eq!(Decimal::parse("."), None);
    assert_eq!(Decimal::parse("-"), None);
    assert_eq!(Decimal::parse("abc"), None);
    assert_eq!(Decimal::parse("1.2.3"), None);
    assert_eq!(Decimal::parse("1e"), None);
    assert_eq!(Decimal::parse("1e99999"), None);
    assert_eq!(Decimal::parse("1e-9223372036854775808"), None);
    assert_eq!(Decimal::parse("1.5e-9223372036854775807"), None);
    assert_eq!(Decimal::parse("1e99999999999999999999"), None);
    assert_eq!(Decimal::from_str("x1"), Err(ParseDecimalError::new("x1")));
  }

  #[test]
  fn test_parse_long_fraction() {
    let literal = format!("0.{}1", "0".repeat(5000));
    assert_eq!(Decimal::parse(&literal), Some(Decimal::ratio(1, num::pow(BigInt::from(10), 5001))));
    let literal = format!("{}e-4096", "1".repeat(10));
    assert_eq!(Decimal::parse(&literal), Some(Decimal::from(1111111111) * Decimal::pow10(-4096)));
    assert_eq!(Decimal::parse("2.5e4096"), Some(Decimal::from(25) * Decimal::pow10(4095)));
  }

  #[test]
  fn test_from_f64() {
    assert_eq!(Decimal::try_from(0.1).unwrap(), Decimal::ratio(1, 10));
    assert_eq!(Decimal::try_from(-2.5).unwrap(), Decimal::ratio(-5, 2));
    assert_eq!(Decimal::try_from(1e21).unwrap(), Decimal::pow10(21));
    Decimal::try_from(f64::NAN).unwrap_err();
    Decimal::try_from(f64::INFINITY).unwrap_err();
  }

  #[test]
  fn test_display_terminating() {
    assert_eq!(Decimal::from(12).to_string(), "12");
    assert_eq!(Decimal::ratio(1, 2).to_string(), "0.5");
    assert_eq!(Decimal::ratio(-1, 20).to_string(), "-0.05");
    assert_eq!(Decimal::ratio(3048, 10_000).to_string(), "0.3048");
    assert_eq!(Decimal::zero().to_string(), "0");
  }

  #[test]
  fn test_display_non_terminating() {
    assert_eq!(Decimal::ratio(1, 3).to_string(), "0.33333333333333333333333333333333");
    assert_eq!(Decimal::ratio(-2, 3).to_string(), "-0.66666666666666666666666666666667");
  }

  #[test]
  fn test_display_roundtrip() {
    for s in ["0", "1", "-1", "0.001", "123456789.987654321", "-0.3048"] {
      assert_eq!(dec(s).to_string(), s);
    }
  }

  #[test]
  fn test_arithmetic() {
    assert_eq!(dec("0.1") + dec("0.2"), dec("0.3"));
    assert_eq!(dec("1") - dec("0.75"), dec("0.25"));
    assert_eq!(&dec("1.5") * &dec("4"), Decimal::from(6));
    assert_eq!(Decimal::from(1) / Decimal::from(3) * Decimal::from(3), Decimal::one());
    assert_eq!(-dec("2.5"), dec("-2.5"));
  }

  #[test]
  #[should_panic]
  fn test_division_by_zero_panics() {
    let _ = Decimal::one() / Decimal::zero();
  }

  #[test]
  fn test_checked_div() {
    assert_eq!(Decimal::one().checked_div(&Decimal::zero()), None);
    assert_eq!(Decimal::one().checked_div(&Decimal::from(4)), Some(dec("0.25")));
  }

  #[test]
  fn test_powi() {
    assert_eq!(Decimal::from(3).powi(0), Decimal::one());
    assert_eq!(Decimal::zero().powi(0), Decimal::one());
    assert_eq!(Decimal::from(3).powi(10), Decimal::from(59049));
    assert_eq!(Decimal::ratio(3, 2).powi(10), Decimal::ratio(59049, 1024));
    assert_eq!(Decimal::from(3).powi(-2), Decimal::ratio(1, 9));
    assert_eq!(Decimal::from(10).powi(-3), Decimal::pow10(-3));
  }

  #[test]
  fn test_decimal_places() {
    assert_eq!(Decimal::from(12).decimal_places(), Some(0));
    assert_eq!(dec("0.125").decimal_places(), Some(3));
    assert_eq!(dec("0.05").decimal_places(), Some(2));
    assert_eq!(Decimal::ratio(1, 3).decimal_places(), None);
  }

  #[test]
  fn test_ordering() {
    assert!(dec("0.5") < dec("0.51"));
    assert!(dec("-3") < dec("-2.9"));
    assert_eq!(dec("1.0"), dec("1"));
  }

  #[test]
  fn test_approx() {
    assert_abs_diff_eq!(Decimal::ratio(1, 3), dec("0.3333333"), epsilon = 1e-6);
  }
}
