//! Common test helpers for integration tests
//!
//! Builds sessions and form drafts so each test starts from an isolated,
//! explicitly constructed session.

#![allow(dead_code)]

use riskmatrix::{RecordDraft, Session};

/// Form submission with the given activity and ratings
pub fn draft(activity: &str, probability: i64, severity: i64) -> RecordDraft {
    RecordDraft {
        activity: activity.to_string(),
        hazard: "Peligro".to_string(),
        consequence: "Consecuencia".to_string(),
        probability,
        severity,
        controls: "Controles".to_string(),
    }
}

/// The welding scenario: score 20, classified Alto
pub fn welding_draft() -> RecordDraft {
    RecordDraft {
        activity: "Soldadura".to_string(),
        hazard: "Chispas".to_string(),
        consequence: "Quemadura".to_string(),
        probability: 4,
        severity: 5,
        controls: "EPP".to_string(),
    }
}

/// Session pre-loaded with one record per `(probability, severity)` pair,
/// activities named "R0", "R1", ...
pub fn session_with(levels: &[(i64, i64)]) -> Session {
    let session = Session::new();
    for (i, &(p, s)) in levels.iter().enumerate() {
        session
            .add_record(draft(&format!("R{}", i), p, s))
            .expect("valid draft");
    }
    session
}

pub fn activities(session: &Session) -> Vec<String> {
    session.records().into_iter().map(|r| r.activity).collect()
}
