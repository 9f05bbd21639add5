use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A probability or severity rating on the 1-5 scale.
///
/// Out-of-range values are rejected at construction, so a stored record can
/// never carry one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub struct RiskLevel(u8);

impl RiskLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate `value` for the form field named `field`
    pub fn new(field: &'static str, value: i64) -> Result<Self, RecordError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(RiskLevel(value as u8))
        } else {
            Err(RecordError::RangeViolation { field, value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RiskLevel {
    type Error = RecordError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        RiskLevel::new("Nivel", value)
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> Self {
        level.0
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One observed hazard scenario in the risk matrix
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskRecord {
    pub activity: String,
    pub hazard: String,
    pub consequence: String,
    pub probability: RiskLevel,
    pub severity: RiskLevel,
    pub controls: String,
}

impl RiskRecord {
    pub fn new(
        activity: impl Into<String>,
        hazard: impl Into<String>,
        consequence: impl Into<String>,
        probability: i64,
        severity: i64,
        controls: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            activity: activity.into(),
            hazard: hazard.into(),
            consequence: consequence.into(),
            probability: RiskLevel::new("Probabilidad", probability)?,
            severity: RiskLevel::new("Severidad", severity)?,
            controls: controls.into(),
        })
    }
}

/// Raw field bundle as the form submits it, before any validation.
///
/// Editing works copy-in/copy-out: a draft is filled from the stored record,
/// changed by the user, and submitted back as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecordDraft {
    pub activity: String,
    pub hazard: String,
    pub consequence: String,
    pub probability: i64,
    pub severity: i64,
    pub controls: String,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            activity: String::new(),
            hazard: String::new(),
            consequence: String::new(),
            probability: i64::from(RiskLevel::MIN),
            severity: i64::from(RiskLevel::MIN),
            controls: String::new(),
        }
    }
}

impl TryFrom<RecordDraft> for RiskRecord {
    type Error = RecordError;

    fn try_from(draft: RecordDraft) -> Result<Self, Self::Error> {
        RiskRecord::new(
            draft.activity,
            draft.hazard,
            draft.consequence,
            draft.probability,
            draft.severity,
            draft.controls,
        )
    }
}

impl From<&RiskRecord> for RecordDraft {
    fn from(record: &RiskRecord) -> Self {
        Self {
            activity: record.activity.clone(),
            hazard: record.hazard.clone(),
            consequence: record.consequence.clone(),
            probability: i64::from(record.probability.value()),
            severity: i64::from(record.severity.value()),
            controls: record.controls.clone(),
        }
    }
}
