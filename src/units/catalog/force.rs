
unit_catalog! {
  /// Units of force. The canonical unit is the newton.
  pub enum Force for Force {
    Millinewton => "mN", METRIC, 1 / 1_000;
    Newton => "N", METRIC, 1 / 1;
    Kilonewton => "kN", METRIC, 1_000 / 1;
    Dyne => "dyn", METRIC, 1 / 100_000;
    KilogramForce => "kgf", METRIC, 980_665 / 100_000;
    PoundForce => "lbf", COMMON_IMPERIAL, 44_482_216_152_605 / 10_000_000_000_000;
    Poundal => "pdl", COMMON_IMPERIAL, 17_281_869_297 / 125_000_000_000;
    OunceForce => "ozf", COMMON_IMPERIAL, 8_896_443_230_521 / 32_000_000_000_000;
  }
  canonical: Newton;
  natural {
    metric: Newton,
    imperial: PoundForce,
    uk_imperial: PoundForce,
    us_customary: PoundForce,
  }
}

unit_catalog! {
  /// Units of pressure. The canonical unit is the pascal.
  pub enum Pressure for Pressure {
    Pascal => "Pa", METRIC, 1 / 1;
    Hectopascal => "hPa", METRIC, 100 / 1;
    Kilopascal => "kPa", METRIC, 1_000 / 1;
    Megapascal => "MPa", METRIC, 1_000_000 / 1;
    Millibar => "mbar", METRIC, 100 / 1;
    Bar => "bar", METRIC, 100_000 / 1;
    PoundPerSquareInch => "psi", COMMON_IMPERIAL, 8_896_443_230_521 / 1_290_320_000;
    PoundPerSquareFoot => "psf", COMMON_IMPERIAL, 8_896_443_230_521 / 185_806_080_000;
  }
  canonical: Pascal;
  natural {
    metric: Pascal,
    imperial: PoundPerSquareInch,
    uk_imperial: PoundPerSquareInch,
    us_customary: PoundPerSquareInch,
  }
}

unit_catalog! {
  /// Units of momentum. The canonical unit is the kilogram meter per
  /// second.
  pub enum Momentum for Momentum {
    KilogramMeterPerSecond => "kg⋅m/s", METRIC, 1 / 1;
    NewtonSecond => "N⋅s", METRIC, 1 / 1;
    GramCentimeterPerSecond => "g⋅cm/s", METRIC, 1 / 100_000;
    PoundFootPerSecond => "lb⋅ft/s", COMMON_IMPERIAL, 17_281_869_297 / 125_000_000_000;
    PoundForceSecond => "lbf⋅s", COMMON_IMPERIAL, 44_482_216_152_605 / 10_000_000_000_000;
  }
  canonical: KilogramMeterPerSecond;
  natural {
    metric: KilogramMeterPerSecond,
    imperial: PoundFootPerSecond,
    uk_imperial: PoundFootPerSecond,
    us_customary: PoundFootPerSecond,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::unit::ScientificUnit;

  #[test]
  fn test_pound_force_in_ounce_force() {
    let canonical = Force::PoundForce.to_canonical(&Decimal::from(1));
    assert_eq!(Force::OunceForce.from_canonical(&canonical), Decimal::from(16));
  }

  #[test]
  fn test_psi_in_psf() {
    let canonical = Pressure::PoundPerSquareInch.to_canonical(&Decimal::from(1));
    assert_eq!(Pressure::PoundPerSquareFoot.from_canonical(&canonical), Decimal::from(144));
  }

  #[test]
  fn test_bar() {
    let canonical = Pressure::Bar.to_canonical(&Decimal::from(1));
    assert_eq!(Pressure::Millibar.from_canonical(&canonical), Decimal::from(1_000));
    assert_eq!(Pressure::Hectopascal.from_canonical(&canonical), Decimal::from(1_000));
  }

  #[test]
  fn test_newton_second_is_canonical_momentum() {
    let canonical = Momentum::NewtonSecond.to_canonical(&Decimal::from(7));
    assert_eq!(Momentum::KilogramMeterPerSecond.from_canonical(&canonical), Decimal::from(7));
  }
}
