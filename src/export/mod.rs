//! Report exporters
//!
//! Both exporters consume the classified record set and return the file
//! contents as bytes, ready to be offered as a download.

pub mod pdf;
pub mod xlsx;

pub use self::pdf::PdfExporter;
pub use self::xlsx::XlsxExporter;

use crate::error::ReportError;
use crate::models::ClassifiedRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names shared by both reports, in output order
pub const COLUMNS: [&str; 8] = [
    "Actividad",
    "Peligro",
    "Consecuencias",
    "Probabilidad",
    "Severidad",
    "Controles",
    "Nivel de Riesgo",
    "Clasificación",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "xlsx")]
    Xlsx,
}

impl ReportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "reporte_matriz_riesgos.pdf",
            ReportFormat::Xlsx => "matriz_riesgos.xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// A rendered report plus the metadata needed to download it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn new(format: ReportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format.file_name().to_string(),
            mime_type: format.mime_type().to_string(),
            bytes,
        }
    }
}

/// Trait for export formats
pub trait Exporter {
    fn format(&self) -> ReportFormat;

    fn render(&self, records: &[ClassifiedRecord]) -> Result<Vec<u8>, ReportError>;

    fn export(&self, records: &[ClassifiedRecord]) -> Result<ExportPayload, ReportError> {
        let bytes = self.render(records)?;
        tracing::debug!(
            "Rendered {} report: {} records, {} bytes",
            self.format().file_name(),
            records.len(),
            bytes.len()
        );
        Ok(ExportPayload::new(self.format(), bytes))
    }
}

/// A single report cell. Numbers stay numeric in the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(u32),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Cells of one record in `COLUMNS` order
pub fn row_values(classified: &ClassifiedRecord) -> [CellValue; 8] {
    let record = &classified.record;
    [
        CellValue::Text(record.activity.clone()),
        CellValue::Text(record.hazard.clone()),
        CellValue::Text(record.consequence.clone()),
        CellValue::Number(u32::from(record.probability.value())),
        CellValue::Number(u32::from(record.severity.value())),
        CellValue::Text(record.controls.clone()),
        CellValue::Number(u32::from(classified.score)),
        CellValue::Text(classified.category.label().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_record;
    use crate::models::RiskRecord;

    #[test]
    fn test_report_format_metadata() {
        assert_eq!(ReportFormat::Pdf.file_name(), "reporte_matriz_riesgos.pdf");
        assert_eq!(ReportFormat::Pdf.mime_type(), "application/pdf");
        assert_eq!(ReportFormat::Xlsx.file_name(), "matriz_riesgos.xlsx");
        assert_eq!(
            ReportFormat::Xlsx.mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
    }

    #[test]
    fn test_row_values_follow_column_order() {
        let record = RiskRecord::new("Soldadura", "Chispas", "Quemadura", 4, 5, "EPP").unwrap();
        let cells = row_values(&classify_record(&record));
        let rendered: Vec<String> = cells.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Soldadura", "Chispas", "Quemadura", "4", "5", "EPP", "20", "Alto"]
        );
        assert_eq!(cells[6], CellValue::Number(20));
    }

    #[test]
    fn test_payload_carries_format_metadata() {
        let payload = ExportPayload::new(ReportFormat::Pdf, vec![1, 2, 3]);
        assert_eq!(payload.file_name, "reporte_matriz_riesgos.pdf");
        assert_eq!(payload.mime_type, "application/pdf");
        assert_eq!(payload.bytes, vec![1, 2, 3]);
    }
}
