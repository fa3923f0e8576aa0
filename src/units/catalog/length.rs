
unit_catalog! {
  /// Units of length. The canonical unit is the meter.
  pub enum Length for Length {
    Nanometer => "nm", METRIC, 1 / 1_000_000_000;
    Micrometer => "µm", METRIC, 1 / 1_000_000;
    Millimeter => "mm", METRIC, 1 / 1_000;
    Centimeter => "cm", METRIC, 1 / 100;
    Decimeter => "dm", METRIC, 1 / 10;
    Meter => "m", METRIC, 1 / 1;
    Decameter => "dam", METRIC, 10 / 1;
    Hectometer => "hm", METRIC, 100 / 1;
    Kilometer => "km", METRIC, 1_000 / 1;
    Megameter => "Mm", METRIC, 1_000_000 / 1;
    Gigameter => "Gm", METRIC, 1_000_000_000 / 1;
    Inch => "in", COMMON_IMPERIAL, 254 / 10_000;
    Foot => "ft", COMMON_IMPERIAL, 3_048 / 10_000;
    Yard => "yd", COMMON_IMPERIAL, 9_144 / 10_000;
    Mile => "mi", COMMON_IMPERIAL, 1_609_344 / 1_000;
  }
  canonical: Meter;
  natural {
    metric: Meter,
    imperial: Foot,
    uk_imperial: Foot,
    us_customary: Foot,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::unit::ScientificUnit;
  use crate::units::system::MeasurementSystem;

  use std::str::FromStr;

  #[test]
  fn test_metric_ladder_is_exact() {
    let one = Decimal::from(1);
    assert_eq!(Length::Nanometer.to_canonical(&one), Decimal::pow10(-9));
    assert_eq!(Length::Gigameter.to_canonical(&one), Decimal::pow10(9));
    assert_eq!(Length::Kilometer.from_canonical(&Decimal::from(1500)), Decimal::from_str("1.5").unwrap());
  }

  #[test]
  fn test_imperial_factors() {
    assert_eq!(Length::Foot.from_canonical(&Length::Mile.to_canonical(&Decimal::from(1))), Decimal::from(5280));
    assert_eq!(Length::Inch.from_canonical(&Length::Yard.to_canonical(&Decimal::from(1))), Decimal::from(36));
  }

  #[test]
  fn test_membership() {
    assert!(Length::Meter.used_in(MeasurementSystem::Metric));
    assert!(!Length::Meter.used_in(MeasurementSystem::Imperial));
    assert!(Length::Foot.used_in(MeasurementSystem::UsCustomary));
    assert!(Length::Foot.used_in(MeasurementSystem::UkImperial));
  }

  #[test]
  fn test_symbol() {
    assert_eq!(Length::Micrometer.to_string(), "µm");
    assert_eq!(Length::Mile.symbol(), "mi");
  }
}
