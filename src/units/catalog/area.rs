
unit_catalog! {
  /// Units of area. The canonical unit is the square meter.
  pub enum Area for Area {
    SquareNanometer => "nm²", METRIC, 1 / 1_000_000_000_000_000_000;
    SquareMillimeter => "mm²", METRIC, 1 / 1_000_000;
    SquareCentimeter => "cm²", METRIC, 1 / 10_000;
    SquareMeter => "m²", METRIC, 1 / 1;
    Are => "a", METRIC, 100 / 1;
    Hectare => "ha", METRIC, 10_000 / 1;
    SquareKilometer => "km²", METRIC, 1_000_000 / 1;
    SquareInch => "in²", COMMON_IMPERIAL, 16_129 / 25_000_000;
    SquareFoot => "ft²", COMMON_IMPERIAL, 145_161 / 1_562_500;
    SquareYard => "yd²", COMMON_IMPERIAL, 1_306_449 / 1_562_500;
    Acre => "acre", COMMON_IMPERIAL, 316_160_658 / 78_125;
    SquareMile => "mi²", COMMON_IMPERIAL, 40_468_564_224 / 15_625;
  }
  canonical: SquareMeter;
  natural {
    metric: SquareMeter,
    imperial: SquareFoot,
    uk_imperial: SquareFoot,
    us_customary: SquareFoot,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decimal::Decimal;
  use crate::units::unit::ScientificUnit;

  #[test]
  fn test_acre_in_square_feet() {
    let acre = Area::Acre.to_canonical(&Decimal::from(1));
    assert_eq!(Area::SquareFoot.from_canonical(&acre), Decimal::from(43_560));
  }

  #[test]
  fn test_square_mile_in_acres() {
    let square_mile = Area::SquareMile.to_canonical(&Decimal::from(1));
    assert_eq!(Area::Acre.from_canonical(&square_mile), Decimal::from(640));
  }
}
