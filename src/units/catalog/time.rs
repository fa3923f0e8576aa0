
unit_catalog! {
  /// Units of time. The canonical unit is the second.
  pub enum Time for Time {
    Nanosecond => "ns", METRIC_AND_IMPERIAL, 1 / 1_000_000_000;
    Microsecond => "µs", METRIC_AND_IMPERIAL, 1 / 1_000_000;
    Millisecond => "ms", METRIC_AND_IMPERIAL, 1 / 1_000;
    Centisecond => "cs", METRIC_AND_IMPERIAL, 1 / 100;
    Decisecond => "ds", METRIC_AND_IMPERIAL, 1 / 10;
    Second => "s", METRIC_AND_IMPERIAL, 1 / 1;
    Minute => "min", METRIC_AND_IMPERIAL, 60 / 1;
    Hour => "h", METRIC_AND_IMPERIAL, 3_600 / 1;
    Day => "d", METRIC_AND_IMPERIAL, 86_400 / 1;
    Week => "wk", METRIC_AND_IMPERIAL, 604_800 / 1;
  }
  canonical: Second;
  natural {
    metric: Second,
    imperial: Second,
    uk_imperial: Second,
    us_customary: Second,
  }
}
