//! Risk matrix desktop application
//!
//! Registers the Tauri IPC commands the form frontend calls. All state lives
//! in one `Session` created here and dropped when the window closes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use riskmatrix::commands::{analytics, export, logger, record};
use riskmatrix::{utils, AppConfig, Session};

fn main() {
    let config = AppConfig::from_env();
    if let Err(e) = utils::init_logging(&config.log_filter) {
        eprintln!("[riskmatrix] {}", e);
    }

    tracing::info!("Starting risk matrix session");

    if let Err(e) = tauri::Builder::default()
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_notification::init())
        .manage(Session::with_config(config.report))
        .invoke_handler(tauri::generate_handler![
            // Record Commands (6)
            record::add_record,
            record::edit_record,
            record::delete_record,
            record::get_record_draft,
            record::get_records,
            record::get_classified_records,
            // Analytics Commands (1)
            analytics::get_risk_distribution,
            // Export Commands (2)
            export::request_pdf,
            export::request_excel,
            // Logger Commands (1)
            logger::log_frontend_message,
        ])
        .run(tauri::generate_context!())
    {
        tracing::error!("Application failed to start: {}", e);
        std::process::exit(1);
    }
}
