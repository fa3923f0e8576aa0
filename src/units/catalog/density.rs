
unit_catalog! {
  /// Units of mass density. The canonical unit is the kilogram per
  /// cubic meter.
  pub enum Density for Density {
    KilogramPerCubicMeter => "kg/m³", METRIC, 1 / 1;
    GramPerCubicCentimeter => "g/cm³", METRIC, 1_000 / 1;
    GramPerLiter => "g/l", METRIC, 1 / 1;
    KilogramPerLiter => "kg/l", METRIC, 1_000 / 1;
    GramPerMilliliter => "g/ml", METRIC, 1_000 / 1;
    PoundPerCubicFoot => "lb/ft³", COMMON_IMPERIAL, 28_349_523_125 / 1_769_802_912;
    PoundPerCubicInch => "lb/in³", COMMON_IMPERIAL, 56_699_046_250 / 2_048_383;
    PoundPerUsGallon => "lb/US gal", US_CUSTOMARY_ONLY, 736_351_250 / 6_145_149;
    PoundPerImperialGallon => "lb/imp gal", UK_IMPERIAL_ONLY, 45_359_237 / 454_609;
  }
  canonical: KilogramPerCubicMeter;
  natural {
    metric: KilogramPerCubicMeter,
    imperial: PoundPerCubicFoot,
    uk_imperial: PoundPerImperialGallon,
    us_customary: PoundPerUsGallon,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::unit::ScientificUnit;

  #[test]
  fn test_water() {
    let canonical = Density::GramPerCubicCentimeter.to_canonical(&Decimal::from(1));
    assert_eq!(canonical, Decimal::from(1_000));
    assert_eq!(Density::KilogramPerLiter.from_canonical(&canonical), Decimal::from(1));
    assert_eq!(Density::GramPerLiter.from_canonical(&canonical), Decimal::from(1_000));
  }

  #[test]
  fn test_cubic_inch_against_cubic_foot() {
    let canonical = Density::PoundPerCubicInch.to_canonical(&Decimal::from(1));
    assert_eq!(Density::PoundPerCubicFoot.from_canonical(&canonical), Decimal::from(1_728));
  }
}
