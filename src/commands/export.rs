//! Report export commands
//!
//! The frontend receives the file name, MIME type and bytes and offers them
//! as a download.

use crate::export::ExportPayload;
use crate::session::Session;
use tauri::State;

#[tauri::command]
pub fn request_pdf(session: State<'_, Session>) -> Result<ExportPayload, String> {
    session.request_pdf().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn request_excel(session: State<'_, Session>) -> Result<ExportPayload, String> {
    session.request_excel().map_err(|e| e.to_string())
}
