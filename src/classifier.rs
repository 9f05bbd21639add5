//! Risk score and classification
//!
//! The score is probability x severity on two 1-5 scales, so it always lies in
//! [1, 25]. Bands are inclusive on their lower bound:
//! - 1-5: Bajo
//! - 6-15: Medio
//! - 16-25: Alto

use crate::models::{ClassifiedRecord, RiskCategory, RiskLevel, RiskRecord};

/// Lowest score classified as Medio
pub const MEDIUM_THRESHOLD: u8 = 6;
/// Lowest score classified as Alto
pub const HIGH_THRESHOLD: u8 = 16;

pub fn score(probability: RiskLevel, severity: RiskLevel) -> u8 {
    probability.value() * severity.value()
}

pub fn classify(score: u8) -> RiskCategory {
    if score >= HIGH_THRESHOLD {
        RiskCategory::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

/// Build the derived view of one record
pub fn classify_record(record: &RiskRecord) -> ClassifiedRecord {
    let score = score(record.probability, record.severity);
    ClassifiedRecord {
        record: record.clone(),
        score,
        category: classify(score),
    }
}

pub fn classify_all(records: &[RiskRecord]) -> Vec<ClassifiedRecord> {
    records.iter().map(classify_record).collect()
}
