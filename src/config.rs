//! Application configuration
//!
//! Report layout is fixed by default; `AppConfig::from_env` only picks up the
//! log filter from the environment (or a `.env` file).

use crate::utils::env;

/// Layout and labels of the exported reports. Lengths are PDF points.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub title: String,
    pub timestamp_prefix: String,
    pub sheet_name: String,
    pub page_width: f32,
    pub page_height: f32,
    pub left_margin: f32,
    /// Distance from the top edge to the title baseline, also where
    /// continuation pages start
    pub top_margin: f32,
    pub timestamp_offset: f32,
    pub header_offset: f32,
    pub bottom_margin: f32,
    pub line_height: f32,
    pub title_font_size: f32,
    pub timestamp_font_size: f32,
    pub table_font_size: f32,
    /// Characters kept per PDF cell
    pub cell_width: usize,
    pub column_separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Reporte de Matriz de Riesgos - SST".to_string(),
            timestamp_prefix: "Generado el: ".to_string(),
            sheet_name: "Matriz de Riesgos".to_string(),
            // US Letter
            page_width: 612.0,
            page_height: 792.0,
            left_margin: 40.0,
            top_margin: 40.0,
            timestamp_offset: 55.0,
            header_offset: 80.0,
            bottom_margin: 40.0,
            line_height: 15.0,
            title_font_size: 14.0,
            timestamp_font_size: 10.0,
            table_font_size: 9.0,
            cell_width: 15,
            column_separator: " | ".to_string(),
        }
    }
}

/// Top-level configuration for the desktop application
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: env::DEFAULT_LOG_FILTER.to_string(),
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        env::load_env();
        Self {
            log_filter: env::log_filter(),
            ..Self::default()
        }
    }
}
