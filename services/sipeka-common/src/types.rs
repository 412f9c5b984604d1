//! Domain types for annual statistic indicators.
//!
//! These mirror the rows of the agency's `statistic_indicators` and
//! `statistic_yearly_values` tables. Field names match the store's
//! snake_case columns so rows deserialize directly.

use serde::{Deserialize, Serialize};

// ============================================================================
// Categories
// ============================================================================

/// Grouping category for annual statistic indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatCategory {
    /// Library services (Perpustakaan)
    Perpustakaan,
    /// Archives services (Kearsipan)
    Kearsipan,
    /// General affairs and staffing (Umum)
    Umum,
}

impl std::fmt::Display for StatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Perpustakaan => write!(f, "Perpustakaan"),
            Self::Kearsipan => write!(f, "Kearsipan"),
            Self::Umum => write!(f, "Umum"),
        }
    }
}

impl std::str::FromStr for StatCategory {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Perpustakaan" => Ok(Self::Perpustakaan),
            "Kearsipan" => Ok(Self::Kearsipan),
            "Umum" => Ok(Self::Umum),
            other => Err(crate::error::Error::InvalidInput(format!(
                "Unknown category: {other}"
            ))),
        }
    }
}

// ============================================================================
// Indicators
// ============================================================================

/// Measurement type of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    /// Plain numeric count
    Number,
    /// Free-text value (coerces to 0 for analysis)
    Text,
    /// Percentage value
    Percentage,
}

/// A named, categorized performance metric tracked across years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// Opaque identifier minted by the store
    pub id: String,
    /// Grouping category
    pub category: StatCategory,
    /// Display name
    pub name: String,
    /// Measurement type
    #[serde(rename = "type")]
    pub kind: IndicatorKind,
    /// Optional unit label (e.g. "Orang", "Berkas")
    #[serde(default)]
    pub unit: Option<String>,
}

// ============================================================================
// Yearly Values
// ============================================================================

/// A raw stored value: the store keeps numbers and numbers-as-text in the
/// same column, so both shapes must deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Numeric value
    Number(f64),
    /// Text value, possibly numeric-as-text
    Text(String),
}

/// One (indicator, year) measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyValue {
    /// Opaque identifier minted by the store
    pub id: String,
    /// Indicator this value belongs to
    pub indicator_id: String,
    /// Calendar year of the measurement
    pub year: i32,
    /// Recorded value
    pub value: RawValue,
    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_and_display() {
        let cat: StatCategory = "Kearsipan".parse().unwrap();
        assert_eq!(cat, StatCategory::Kearsipan);
        assert_eq!(cat.to_string(), "Kearsipan");

        assert!("Keuangan".parse::<StatCategory>().is_err());
    }

    #[test]
    fn test_indicator_from_store_row() {
        let row = r#"{
            "id": "ind-arc-2",
            "category": "Kearsipan",
            "name": "Digitalisasi Arsip Vital",
            "type": "number",
            "unit": "File PDF"
        }"#;

        let ind: Indicator = serde_json::from_str(row).unwrap();
        assert_eq!(ind.category, StatCategory::Kearsipan);
        assert_eq!(ind.kind, IndicatorKind::Number);
        assert_eq!(ind.unit.as_deref(), Some("File PDF"));
    }

    #[test]
    fn test_yearly_value_numeric_and_text() {
        let numeric = r#"{"id": "v1", "indicator_id": "i1", "year": 2023, "value": 5600}"#;
        let text = r#"{"id": "v2", "indicator_id": "i1", "year": 2024, "value": "5800"}"#;

        let n: YearlyValue = serde_json::from_str(numeric).unwrap();
        let t: YearlyValue = serde_json::from_str(text).unwrap();

        assert_eq!(n.value, RawValue::Number(5600.0));
        assert_eq!(t.value, RawValue::Text("5800".into()));
        assert_eq!(n.note, None);
    }
}
