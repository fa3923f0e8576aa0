
unit_catalog! {
  /// Units of volume. The canonical unit is the cubic meter.
  ///
  /// The UK and US systems disagree on every liquid measure, so those
  /// units are tagged with one regional system only.
  pub enum Volume for Volume {
    CubicMillimeter => "mm³", METRIC, 1 / 1_000_000_000;
    CubicCentimeter => "cm³", METRIC, 1 / 1_000_000;
    Milliliter => "ml", METRIC, 1 / 1_000_000;
    Centiliter => "cl", METRIC, 1 / 100_000;
    Deciliter => "dl", METRIC, 1 / 10_000;
    Liter => "l", METRIC, 1 / 1_000;
    CubicMeter => "m³", METRIC, 1 / 1;
    CubicInch => "in³", COMMON_IMPERIAL, 2_048_383 / 125_000_000_000;
    CubicFoot => "ft³", COMMON_IMPERIAL, 55_306_341 / 1_953_125_000;
    CubicYard => "yd³", COMMON_IMPERIAL, 1_493_271_207 / 1_953_125_000;
    UsFluidOunce => "US fl oz", US_CUSTOMARY_ONLY, 473_176_473 / 16_000_000_000_000;
    UsCup => "US cup", US_CUSTOMARY_ONLY, 473_176_473 / 2_000_000_000_000;
    UsPint => "US pt", US_CUSTOMARY_ONLY, 473_176_473 / 1_000_000_000_000;
    UsQuart => "US qt", US_CUSTOMARY_ONLY, 473_176_473 / 500_000_000_000;
    UsGallon => "US gal", US_CUSTOMARY_ONLY, 473_176_473 / 125_000_000_000;
    ImperialFluidOunce => "imp fl oz", UK_IMPERIAL_ONLY, 454_609 / 16_000_000_000;
    ImperialPint => "imp pt", UK_IMPERIAL_ONLY, 454_609 / 800_000_000;
    ImperialQuart => "imp qt", UK_IMPERIAL_ONLY, 454_609 / 400_000_000;
    ImperialGallon => "imp gal", UK_IMPERIAL_ONLY, 454_609 / 100_000_000;
  }
  canonical: CubicMeter;
  natural {
    metric: CubicMeter,
    imperial: CubicFoot,
    uk_imperial: ImperialGallon,
    us_customary: UsGallon,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::unit::ScientificUnit;

  fn convert(value: i64, from: Volume, to: Volume) -> Decimal {
    to.from_canonical(&from.to_canonical(&Decimal::from(value)))
  }

  #[test]
  fn test_us_gallon_is_231_cubic_inches() {
    assert_eq!(convert(1, Volume::UsGallon, Volume::CubicInch), Decimal::from(231));
  }

  #[test]
  fn test_liquid_ladders() {
    assert_eq!(convert(1, Volume::UsGallon, Volume::UsFluidOunce), Decimal::from(128));
    assert_eq!(convert(1, Volume::UsQuart, Volume::UsCup), Decimal::from(4));
    assert_eq!(convert(1, Volume::ImperialGallon, Volume::ImperialFluidOunce), Decimal::from(160));
    assert_eq!(convert(1, Volume::ImperialGallon, Volume::ImperialPint), Decimal::from(8));
  }

  #[test]
  fn test_metric_aliases() {
    assert_eq!(convert(250, Volume::Milliliter, Volume::CubicCentimeter), Decimal::from(250));
    assert_eq!(convert(3, Volume::Liter, Volume::Deciliter), Decimal::from(30));
  }
}
