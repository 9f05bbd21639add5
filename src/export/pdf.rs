//! PDF report
//!
//! A fixed-width text table: title, generation timestamp, one header line and
//! one line per record, cells truncated and joined with " | ". A new page
//! starts when the cursor drops below the bottom margin; the header is only
//! printed on the first page.

use super::{row_values, Exporter, ReportFormat, COLUMNS};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::models::ClassifiedRecord;
use chrono::{Local, NaiveDateTime};
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// One positioned line of text, coordinates in points from the bottom-left
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub font: FontStyle,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<TextLine>,
}

pub struct PdfExporter {
    config: ReportConfig,
}

impl PdfExporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Place every line of the report on its page
    pub fn layout(&self, records: &[ClassifiedRecord], generated_at: NaiveDateTime) -> Vec<PageLayout> {
        let cfg = &self.config;
        let top = cfg.page_height - cfg.top_margin;
        let mut pages = Vec::new();
        let mut page = PageLayout::default();

        page.lines.push(self.line(cfg.title.clone(), FontStyle::Bold, cfg.title_font_size, top));
        page.lines.push(self.line(
            format!("{}{}", cfg.timestamp_prefix, generated_at.format(TIMESTAMP_FORMAT)),
            FontStyle::Regular,
            cfg.timestamp_font_size,
            cfg.page_height - cfg.timestamp_offset,
        ));

        let mut y = cfg.page_height - cfg.header_offset;
        page.lines.push(self.line(
            self.join_cells(COLUMNS.iter().copied()),
            FontStyle::Bold,
            cfg.table_font_size,
            y,
        ));
        y -= cfg.line_height;

        for record in records {
            let cells = row_values(record).map(|cell| cell.to_string());
            let text = self.join_cells(cells.iter().map(String::as_str));
            page.lines.push(self.line(text, FontStyle::Regular, cfg.table_font_size, y));

            y -= cfg.line_height;
            if y < cfg.bottom_margin {
                pages.push(std::mem::take(&mut page));
                y = top;
            }
        }

        if !page.lines.is_empty() {
            pages.push(page);
        }
        pages
    }

    /// Render with an explicit timestamp
    pub fn render_at(
        &self,
        records: &[ClassifiedRecord],
        generated_at: NaiveDateTime,
    ) -> Result<Vec<u8>, ReportError> {
        let pages = self.layout(records, generated_at);
        self.write_document(&pages)
    }

    fn write_document(&self, pages: &[PageLayout]) -> Result<Vec<u8>, ReportError> {
        let cfg = &self.config;
        let width = Mm::from(Pt(cfg.page_width));
        let height = Mm::from(Pt(cfg.page_height));

        let (doc, first_page, first_layer) =
            PdfDocument::new(cfg.title.as_str(), width, height, "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        let mut first = Some((first_page, first_layer));
        for page in pages {
            let (page_index, layer_index) = match first.take() {
                Some(indices) => indices,
                None => doc.add_page(width, height, "Layer 1"),
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                let font = match line.font {
                    FontStyle::Regular => &regular,
                    FontStyle::Bold => &bold,
                };
                layer.use_text(
                    line.text.as_str(),
                    line.size,
                    Mm::from(Pt(line.x)),
                    Mm::from(Pt(line.y)),
                    font,
                );
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }

    fn line(&self, text: String, font: FontStyle, size: f32, y: f32) -> TextLine {
        TextLine {
            text,
            font,
            size,
            x: self.config.left_margin,
            y,
        }
    }

    fn join_cells<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        cells
            .map(|cell| fit_cell(cell, self.config.cell_width))
            .collect::<Vec<_>>()
            .join(&self.config.column_separator)
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl Exporter for PdfExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }

    fn render(&self, records: &[ClassifiedRecord]) -> Result<Vec<u8>, ReportError> {
        self.render_at(records, Local::now().naive_local())
    }
}

/// Flatten control characters (line breaks, tabs) to spaces and keep at most
/// `width` characters
fn fit_cell(value: &str, width: usize) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .take(width)
        .collect()
}

fn pdf_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(err.to_string())
}
