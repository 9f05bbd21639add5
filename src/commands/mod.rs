//! Tauri IPC Commands - Frontend to Backend Communication
//!
//! Every command works on the `Session` managed by the Tauri app.
//!
//! Record Commands (6):
//! - add_record: Validate the form and append a record
//! - edit_record: Validate the edit form and replace a record
//! - delete_record: Remove a record by position
//! - get_record_draft: Copy of a record for pre-filling the edit form
//! - get_records: Raw records in order
//! - get_classified_records: Records with risk score and classification
//!
//! Analytics Commands (1):
//! - get_risk_distribution: Chart data of records per classification
//!
//! Export Commands (2):
//! - request_pdf: PDF report download
//! - request_excel: Excel report download
//!
//! Logger Commands (1):
//! - log_frontend_message: Forward frontend console output to the log

pub mod analytics;
pub mod export;
pub mod logger;
pub mod record;

// Re-export all commands
pub use analytics::get_risk_distribution;
pub use export::{request_excel, request_pdf};
pub use logger::log_frontend_message;
pub use record::{
    add_record, delete_record, edit_record, get_classified_records, get_record_draft, get_records,
};
