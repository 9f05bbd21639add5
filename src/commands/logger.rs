/// Frontend console logging command
///
/// Forwards console messages from the frontend into the backend log
/// so they can be seen in the dev server output
#[tauri::command]
pub fn log_frontend_message(level: String, message: String) {
    match level.as_str() {
        "error" => tracing::error!(target: "frontend", "{}", message),
        "warn" => tracing::warn!(target: "frontend", "{}", message),
        "debug" => tracing::debug!(target: "frontend", "{}", message),
        _ => tracing::info!(target: "frontend", "{}", message),
    }
}
