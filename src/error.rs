//! Error types for the record editor and the report exporters

use thiserror::Error;

/// Failures raised by the record editor.
///
/// A failed operation never mutates the store; the `Display` text is what the
/// form shows the user as a notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("El registro {position} no existe (hay {len} registros)")]
    IndexOutOfRange { position: i64, len: usize },

    #[error("{field} debe estar entre 1 y 5 (valor recibido: {value})")]
    RangeViolation { field: &'static str, value: i64 },
}

impl RecordError {
    pub fn out_of_range(position: i64, len: usize) -> Self {
        RecordError::IndexOutOfRange { position, len }
    }
}

/// Failures raised while serializing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to build PDF report: {0}")]
    Pdf(String),

    #[error("Failed to build Excel report: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
