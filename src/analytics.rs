//! Risk distribution statistics
//!
//! Counts classified records per category and shapes the counts into the
//! bar-chart data the dashboard shows.

use crate::models::{ClassifiedRecord, RiskCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Count records per category. Categories with no records are absent.
pub fn aggregate(records: &[ClassifiedRecord]) -> HashMap<RiskCategory, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.category).or_insert(0) += 1;
    }
    counts
}

/// One bar of the distribution chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistributionBar {
    pub category: RiskCategory,
    pub label: String,
    pub count: usize,
}

/// Chart data: title, axis labels and bars in Bajo, Medio, Alto order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskDistribution {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<DistributionBar>,
}

impl RiskDistribution {
    pub fn from_counts(counts: &HashMap<RiskCategory, usize>) -> Self {
        let bars = RiskCategory::ALL
            .iter()
            .filter_map(|category| {
                counts.get(category).map(|&count| DistributionBar {
                    category: *category,
                    label: category.label().to_string(),
                    count,
                })
            })
            .collect();

        Self {
            title: "Cantidad de Riesgos por Clasificación".to_string(),
            x_label: "Clasificación del Riesgo".to_string(),
            y_label: "Cantidad de Casos".to_string(),
            bars,
        }
    }

    pub fn from_records(records: &[ClassifiedRecord]) -> Self {
        Self::from_counts(&aggregate(records))
    }

    /// Count for `category`, zero when it has no bar
    pub fn count(&self, category: RiskCategory) -> usize {
        self.bars
            .iter()
            .find(|bar| bar.category == category)
            .map_or(0, |bar| bar.count)
    }

    pub fn total(&self) -> usize {
        self.bars.iter().map(|bar| bar.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_all;
    use crate::models::RiskRecord;

    fn classified(levels: &[(i64, i64)]) -> Vec<ClassifiedRecord> {
        let records: Vec<RiskRecord> = levels
            .iter()
            .map(|&(p, s)| RiskRecord::new("Actividad", "Peligro", "", p, s, "").unwrap())
            .collect();
        classify_all(&records)
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_single_high() {
        let counts = aggregate(&classified(&[(4, 5)]));
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&RiskCategory::High), Some(&1));
        assert_eq!(counts.get(&RiskCategory::Low), None);
    }

    #[test]
    fn test_aggregate_counts_sum_to_total() {
        let records = classified(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (1, 5)]);
        let counts = aggregate(&records);
        assert_eq!(counts.values().sum::<usize>(), records.len());
        assert_eq!(counts[&RiskCategory::Low], 3);
        assert_eq!(counts[&RiskCategory::Medium], 1);
        assert_eq!(counts[&RiskCategory::High], 2);
    }

    #[test]
    fn test_distribution_orders_bars() {
        let distribution = RiskDistribution::from_records(&classified(&[(5, 5), (1, 1), (5, 5)]));
        let labels: Vec<&str> = distribution.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Bajo", "Alto"]);
        assert_eq!(distribution.count(RiskCategory::High), 2);
        assert_eq!(distribution.count(RiskCategory::Medium), 0);
        assert_eq!(distribution.total(), 3);
    }

    #[test]
    fn test_distribution_labels() {
        let distribution = RiskDistribution::from_records(&[]);
        assert!(distribution.bars.is_empty());
        assert_eq!(distribution.title, "Cantidad de Riesgos por Clasificación");
        assert_eq!(distribution.x_label, "Clasificación del Riesgo");
        assert_eq!(distribution.y_label, "Cantidad de Casos");
    }
}
