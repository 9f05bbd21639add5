use super::record::RiskRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk band derived from the risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl RiskCategory {
    /// Display order used by tables and charts
    pub const ALL: [RiskCategory; 3] = [RiskCategory::Low, RiskCategory::Medium, RiskCategory::High];

    /// Label shown to the user and written into reports
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Bajo",
            RiskCategory::Medium => "Medio",
            RiskCategory::High => "Alto",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record paired with its derived score and category.
///
/// Built on every read by the classifier and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: RiskRecord,
    pub score: u8,
    pub category: RiskCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_names() {
        assert_eq!(serde_json::to_string(&RiskCategory::Low).unwrap(), r#""low""#);
        assert_eq!(serde_json::to_string(&RiskCategory::High).unwrap(), r#""high""#);
        let medium: RiskCategory = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(medium, RiskCategory::Medium);
        assert!(serde_json::from_str::<RiskCategory>(r#""Alto""#).is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(RiskCategory::Low.to_string(), "Bajo");
        assert_eq!(RiskCategory::Medium.to_string(), "Medio");
        assert_eq!(RiskCategory::High.to_string(), "Alto");
    }

    #[test]
    fn test_category_ordering() {
        assert!(RiskCategory::Low < RiskCategory::Medium);
        assert!(RiskCategory::Medium < RiskCategory::High);
        let mut sorted = RiskCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, RiskCategory::ALL);
    }

    #[test]
    fn test_classified_record_serializes_flat() {
        let classified = ClassifiedRecord {
            record: RiskRecord::new("Soldadura", "Chispas", "Quemadura", 4, 5, "EPP").unwrap(),
            score: 20,
            category: RiskCategory::High,
        };
        let json = serde_json::to_value(&classified).unwrap();
        assert_eq!(json["activity"], "Soldadura");
        assert_eq!(json["score"], 20);
        assert_eq!(json["category"], "high");
    }
}
