//! Record editing commands
//!
//! Errors come back to the frontend as their display text, ready to show as a
//! notification.

use crate::models::{ClassifiedRecord, Notice, RecordDraft, RiskRecord};
use crate::session::Session;
use tauri::State;

/// Add a record from the entry form
///
/// # Arguments
/// * `draft` - Raw form fields; probability and severity must be 1-5
#[tauri::command]
pub fn add_record(session: State<'_, Session>, draft: RecordDraft) -> Result<Notice, String> {
    session.add_record(draft).map_err(|e| e.to_string())
}

/// Replace the record at `position` with the submitted edit form
#[tauri::command]
pub fn edit_record(
    session: State<'_, Session>,
    position: i64,
    draft: RecordDraft,
) -> Result<Notice, String> {
    session.edit_record(position, draft).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_record(session: State<'_, Session>, position: i64) -> Result<Notice, String> {
    session.delete_record(position).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_record_draft(session: State<'_, Session>, position: i64) -> Result<RecordDraft, String> {
    session.draft_for(position).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_records(session: State<'_, Session>) -> Vec<RiskRecord> {
    session.records()
}

#[tauri::command]
pub fn get_classified_records(session: State<'_, Session>) -> Vec<ClassifiedRecord> {
    session.classified_records()
}
