
unit_catalog! {
  /// Units of speed. The canonical unit is the meter per second.
  pub enum Speed for Speed {
    MeterPerSecond => "m/s", METRIC, 1 / 1;
    KilometerPerHour => "km/h", METRIC, 5 / 18;
    FootPerSecond => "ft/s", COMMON_IMPERIAL, 3_048 / 10_000;
    MilePerHour => "mph", COMMON_IMPERIAL, 1_397 / 3_125;
    Knot => "kn", METRIC_AND_IMPERIAL, 463 / 900;
  }
  canonical: MeterPerSecond;
  natural {
    metric: MeterPerSecond,
    imperial: FootPerSecond,
    uk_imperial: FootPerSecond,
    us_customary: FootPerSecond,
  }
}

unit_catalog! {
  /// Units of acceleration. The canonical unit is the meter per
  /// second squared.
  pub enum Acceleration for Acceleration {
    MeterPerSecondSquared => "m/s²", METRIC, 1 / 1;
    Gal => "Gal", METRIC, 1 / 100;
    FootPerSecondSquared => "ft/s²", COMMON_IMPERIAL, 3_048 / 10_000;
    MilePerHourPerSecond => "mph/s", COMMON_IMPERIAL, 1_397 / 3_125;
    /// Standard gravity.
    StandardGravity => "g₀", METRIC_AND_IMPERIAL, 980_665 / 100_000;
  }
  canonical: MeterPerSecondSquared;
  natural {
    metric: MeterPerSecondSquared,
    imperial: FootPerSecondSquared,
    uk_imperial: FootPerSecondSquared,
    us_customary: FootPerSecondSquared,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::unit::ScientificUnit;

  #[test]
  fn test_kilometers_per_hour() {
    let canonical = Speed::MeterPerSecond.to_canonical(&Decimal::from(5));
    assert_eq!(Speed::KilometerPerHour.from_canonical(&canonical), Decimal::from(18));
  }

  #[test]
  fn test_mile_per_hour_in_feet_per_second() {
    let canonical = Speed::MilePerHour.to_canonical(&Decimal::from(15));
    assert_eq!(Speed::FootPerSecond.from_canonical(&canonical), Decimal::from(22));
  }

  #[test]
  fn test_standard_gravity() {
    let canonical = Acceleration::StandardGravity.to_canonical(&Decimal::from(1));
    assert_eq!(canonical, Decimal::ratio(980_665, 100_000));
    assert_eq!(Acceleration::Gal.from_canonical(&canonical), Decimal::ratio(980_665, 1_000));
  }
}
