//! Per-indicator metrics and the category-level reduction.

use sipeka_common::{coerce_numeric_or_zero, Indicator, YearlyValue};

use super::types::{IndicatorBreakdown, TrendStatus};

/// Growth above this percentage classifies as rising.
pub(crate) const RISING_THRESHOLD: f64 = 5.0;
/// Growth below this percentage classifies as falling.
pub(crate) const FALLING_THRESHOLD: f64 = -5.0;
/// Number of trailing entries kept in the trend series.
const TREND_WINDOW: usize = 3;

impl TrendStatus {
    /// Classify a growth percentage. Values exactly on a boundary are stable.
    pub fn classify(growth: f64) -> Self {
        if growth > RISING_THRESHOLD {
            Self::Rising
        } else if growth < FALLING_THRESHOLD {
            Self::Falling
        } else {
            Self::Stable
        }
    }
}

/// Compute the breakdown row for one indicator.
///
/// Values are stable-sorted ascending by year, so if the store ever holds
/// duplicate (indicator, year) rows, the one appearing last in store order
/// wins the `latest` slot.
pub(crate) fn breakdown_for(indicator: &Indicator, values: &[YearlyValue]) -> IndicatorBreakdown {
    let mut history: Vec<&YearlyValue> = values
        .iter()
        .filter(|v| v.indicator_id == indicator.id)
        .collect();
    history.sort_by_key(|v| v.year);

    let window_start = history.len().saturating_sub(TREND_WINDOW);
    let trend_series: Vec<f64> = history[window_start..]
        .iter()
        .map(|v| coerce_numeric_or_zero(&v.value))
        .collect();

    let latest = history.last();
    let previous = history.len().checked_sub(2).and_then(|i| history.get(i));

    let mut growth = 0.0;
    let mut last_value = 0.0;

    match (latest, previous) {
        (Some(latest), Some(previous)) => {
            last_value = coerce_numeric_or_zero(&latest.value);
            let baseline = coerce_numeric_or_zero(&previous.value);
            // A zero or negative baseline gives no meaningful percentage;
            // growth stays 0 rather than propagating a division by zero.
            if baseline > 0.0 {
                growth = (last_value - baseline) / baseline * 100.0;
            }
        }
        (Some(latest), None) => {
            last_value = coerce_numeric_or_zero(&latest.value);
        }
        _ => {}
    }

    IndicatorBreakdown {
        id: indicator.id.clone(),
        name: indicator.name.clone(),
        last_value,
        growth,
        status: TrendStatus::classify(growth),
        trend_series,
        unit: indicator.unit.clone().unwrap_or_default(),
    }
}

// ============================================================================
// Category Aggregate
// ============================================================================

/// Best or worst performing indicator within the category.
#[derive(Debug, Clone)]
pub(crate) struct Extreme {
    pub name: String,
    pub growth: f64,
}

/// Category-level totals produced by a single reduction over the breakdown.
#[derive(Debug, Clone, Default)]
pub(crate) struct CategoryAggregate {
    pub rising: usize,
    pub falling: usize,
    pub stable: usize,
    pub growth_sum: f64,
    pub top_gainer: Option<Extreme>,
    pub top_loser: Option<Extreme>,
}

impl CategoryAggregate {
    /// Reduce the breakdown rows into category totals.
    ///
    /// Strict comparisons keep the earliest indicator on ties; the first
    /// row becomes both top gainer and top loser.
    pub fn from_breakdown(breakdown: &[IndicatorBreakdown]) -> Self {
        breakdown.iter().fold(Self::default(), |mut acc, item| {
            match item.status {
                TrendStatus::Rising => acc.rising += 1,
                TrendStatus::Falling => acc.falling += 1,
                TrendStatus::Stable => acc.stable += 1,
            }
            acc.growth_sum += item.growth;

            if acc
                .top_gainer
                .as_ref()
                .map_or(true, |best| item.growth > best.growth)
            {
                acc.top_gainer = Some(Extreme {
                    name: item.name.clone(),
                    growth: item.growth,
                });
            }
            if acc
                .top_loser
                .as_ref()
                .map_or(true, |worst| item.growth < worst.growth)
            {
                acc.top_loser = Some(Extreme {
                    name: item.name.clone(),
                    growth: item.growth,
                });
            }

            acc
        })
    }

    /// Number of indicators reduced into this aggregate.
    pub fn indicator_count(&self) -> usize {
        self.rising + self.falling + self.stable
    }

    /// Average growth across the category, 0 when empty.
    pub fn avg_growth(&self) -> f64 {
        let count = self.indicator_count();
        if count == 0 {
            0.0
        } else {
            self.growth_sum / count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sipeka_common::{IndicatorKind, RawValue, StatCategory};

    fn make_indicator(id: &str, name: &str) -> Indicator {
        Indicator {
            id: id.to_string(),
            category: StatCategory::Perpustakaan,
            name: name.to_string(),
            kind: IndicatorKind::Number,
            unit: Some("Orang".to_string()),
        }
    }

    fn make_value(indicator_id: &str, year: i32, value: f64) -> YearlyValue {
        YearlyValue {
            id: format!("val-{indicator_id}-{year}"),
            indicator_id: indicator_id.to_string(),
            year,
            value: RawValue::Number(value),
            note: None,
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(TrendStatus::classify(5.0), TrendStatus::Stable);
        assert_eq!(TrendStatus::classify(5.01), TrendStatus::Rising);
        assert_eq!(TrendStatus::classify(-5.0), TrendStatus::Stable);
        assert_eq!(TrendStatus::classify(-5.01), TrendStatus::Falling);
        assert_eq!(TrendStatus::classify(0.0), TrendStatus::Stable);
    }

    #[test]
    fn test_growth_from_last_two_years() {
        let ind = make_indicator("i1", "Jumlah Pengunjung");
        let values = vec![
            make_value("i1", 2022, 100.0),
            make_value("i1", 2023, 110.0),
        ];

        let row = breakdown_for(&ind, &values);
        assert!((row.growth - 10.0).abs() < 1e-9);
        assert_eq!(row.status, TrendStatus::Rising);
        assert_eq!(row.last_value, 110.0);
    }

    #[test]
    fn test_single_value_is_stable_with_zero_growth() {
        let ind = make_indicator("i1", "Jumlah Pengunjung");
        let values = vec![make_value("i1", 2024, 42.0)];

        let row = breakdown_for(&ind, &values);
        assert_eq!(row.growth, 0.0);
        assert_eq!(row.status, TrendStatus::Stable);
        assert_eq!(row.last_value, 42.0);
        assert_eq!(row.trend_series, vec![42.0]);
    }

    #[test]
    fn test_no_values_yields_zero_row() {
        let ind = make_indicator("i1", "Jumlah Pengunjung");

        let row = breakdown_for(&ind, &[]);
        assert_eq!(row.last_value, 0.0);
        assert_eq!(row.growth, 0.0);
        assert_eq!(row.status, TrendStatus::Stable);
        assert!(row.trend_series.is_empty());
    }

    #[test]
    fn test_zero_baseline_masks_growth() {
        let ind = make_indicator("i1", "Jumlah Pengunjung");
        let values = vec![make_value("i1", 2022, 0.0), make_value("i1", 2023, 500.0)];

        let row = breakdown_for(&ind, &values);
        assert_eq!(row.growth, 0.0);
        assert_eq!(row.status, TrendStatus::Stable);
        assert_eq!(row.last_value, 500.0);
    }

    #[test]
    fn test_text_value_coerces_to_zero() {
        let ind = make_indicator("i1", "Kondisi Gedung");
        let values = vec![YearlyValue {
            id: "v1".into(),
            indicator_id: "i1".into(),
            year: 2024,
            value: RawValue::Text("Baik".into()),
            note: None,
        }];

        let row = breakdown_for(&ind, &values);
        assert_eq!(row.last_value, 0.0);
        assert_eq!(row.trend_series, vec![0.0]);
    }

    #[test]
    fn test_trend_series_keeps_last_three() {
        let ind = make_indicator("i1", "Jumlah Pengunjung");
        let values = vec![
            make_value("i1", 2020, 1.0),
            make_value("i1", 2021, 2.0),
            make_value("i1", 2022, 3.0),
            make_value("i1", 2023, 4.0),
            make_value("i1", 2024, 5.0),
        ];

        let row = breakdown_for(&ind, &values);
        assert_eq!(row.trend_series, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_unsorted_history_is_sorted_by_year() {
        let ind = make_indicator("i1", "Jumlah Pengunjung");
        let values = vec![
            make_value("i1", 2024, 120.0),
            make_value("i1", 2022, 80.0),
            make_value("i1", 2023, 100.0),
        ];

        let row = breakdown_for(&ind, &values);
        assert_eq!(row.last_value, 120.0);
        assert!((row.growth - 20.0).abs() < 1e-9);
        assert_eq!(row.trend_series, vec![80.0, 100.0, 120.0]);
    }

    #[test]
    fn test_duplicate_year_last_in_store_order_wins() {
        let ind = make_indicator("i1", "Jumlah Pengunjung");
        let values = vec![
            make_value("i1", 2023, 100.0),
            make_value("i1", 2024, 150.0),
            make_value("i1", 2024, 200.0),
        ];

        let row = breakdown_for(&ind, &values);
        assert_eq!(row.last_value, 200.0);
        assert!((row.growth - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_other_indicators_are_ignored() {
        let ind = make_indicator("i1", "Jumlah Pengunjung");
        let values = vec![
            make_value("i1", 2023, 100.0),
            make_value("i1", 2024, 104.0),
            make_value("i2", 2024, 9999.0),
        ];

        let row = breakdown_for(&ind, &values);
        assert_eq!(row.last_value, 104.0);
        assert_eq!(row.status, TrendStatus::Stable);
    }

    #[test]
    fn test_aggregate_counts_and_average() {
        let rows = vec![
            breakdown_for(
                &make_indicator("i1", "A"),
                &[make_value("i1", 2023, 100.0), make_value("i1", 2024, 120.0)],
            ),
            breakdown_for(
                &make_indicator("i2", "B"),
                &[make_value("i2", 2023, 100.0), make_value("i2", 2024, 90.0)],
            ),
            breakdown_for(
                &make_indicator("i3", "C"),
                &[make_value("i3", 2023, 100.0), make_value("i3", 2024, 101.0)],
            ),
        ];

        let agg = CategoryAggregate::from_breakdown(&rows);
        assert_eq!(agg.rising, 1);
        assert_eq!(agg.falling, 1);
        assert_eq!(agg.stable, 1);
        assert_eq!(agg.indicator_count(), 3);
        // (20 - 10 + 1) / 3
        assert!((agg.avg_growth() - 11.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_extremes_first_row_seeds_both() {
        let rows = vec![breakdown_for(
            &make_indicator("i1", "Solo"),
            &[make_value("i1", 2023, 100.0), make_value("i1", 2024, 110.0)],
        )];

        let agg = CategoryAggregate::from_breakdown(&rows);
        assert_eq!(agg.top_gainer.as_ref().unwrap().name, "Solo");
        assert_eq!(agg.top_loser.as_ref().unwrap().name, "Solo");
    }

    #[test]
    fn test_aggregate_extremes_ties_keep_earliest() {
        let rows = vec![
            breakdown_for(
                &make_indicator("i1", "First"),
                &[make_value("i1", 2023, 100.0), make_value("i1", 2024, 110.0)],
            ),
            breakdown_for(
                &make_indicator("i2", "Second"),
                &[make_value("i2", 2023, 100.0), make_value("i2", 2024, 110.0)],
            ),
        ];

        let agg = CategoryAggregate::from_breakdown(&rows);
        assert_eq!(agg.top_gainer.as_ref().unwrap().name, "First");
        assert_eq!(agg.top_loser.as_ref().unwrap().name, "First");
    }
}
