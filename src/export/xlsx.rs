//! Excel report: a single unstyled sheet with one header row and one row per
//! record, values untruncated up to Excel's per-cell limit.

use super::{row_values, CellValue, Exporter, ReportFormat, COLUMNS};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::models::ClassifiedRecord;
use rust_xlsxwriter::{Workbook, XlsxError};

/// Most characters Excel accepts in one cell
pub const MAX_CELL_CHARS: usize = 32_767;

pub struct XlsxExporter {
    sheet_name: String,
}

impl XlsxExporter {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            sheet_name: config.sheet_name.clone(),
        }
    }

    /// Sheet contents, header row first
    pub fn sheet_rows(&self, records: &[ClassifiedRecord]) -> Vec<Vec<CellValue>> {
        let header = COLUMNS
            .iter()
            .map(|name| CellValue::Text(name.to_string()))
            .collect();

        std::iter::once(header)
            .chain(records.iter().map(|record| row_values(record).to_vec()))
            .collect()
    }
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new(&ReportConfig::default())
    }
}

impl Exporter for XlsxExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Xlsx
    }

    fn render(&self, records: &[ClassifiedRecord]) -> Result<Vec<u8>, ReportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;

        for (row_index, row) in self.sheet_rows(records).iter().enumerate() {
            let row_num = u32::try_from(row_index).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col_index, cell) in row.iter().enumerate() {
                let col_num = col_index as u16;
                match cell {
                    CellValue::Text(text) => {
                        worksheet.write_string(row_num, col_num, fit_cell(text))?;
                    }
                    CellValue::Number(number) => {
                        worksheet.write_number(row_num, col_num, *number)?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

/// Cut `text` to `MAX_CELL_CHARS` characters, never splitting a character
fn fit_cell(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
