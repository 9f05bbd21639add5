//! Session state: one record store plus the operations the form calls
//!
//! A `Session` is created when the application (or a test) starts and passed
//! explicitly to every operation. The store sits behind a single mutex so
//! position checks and the mutation they guard happen under the same lock.

use crate::analytics::{aggregate, RiskDistribution};
use crate::classifier::classify_all;
use crate::config::ReportConfig;
use crate::error::{RecordError, ReportError};
use crate::export::{ExportPayload, Exporter, PdfExporter, XlsxExporter};
use crate::models::{ClassifiedRecord, Notice, RecordDraft, RiskCategory, RiskRecord};
use crate::store::RecordStore;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct Session {
    store: Mutex<RecordStore>,
    report: ReportConfig,
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    pub fn with_config(report: ReportConfig) -> Self {
        Self {
            store: Mutex::new(RecordStore::new()),
            report,
        }
    }

    fn store(&self) -> MutexGuard<'_, RecordStore> {
        // Every mutation is a single Vec operation, so a poisoned store is
        // still consistent
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate a submitted form and append it
    pub fn add_record(&self, draft: RecordDraft) -> Result<Notice, RecordError> {
        let record = RiskRecord::try_from(draft).inspect_err(|e| {
            tracing::warn!("Rejected new record: {}", e);
        })?;

        let mut store = self.store();
        store.append(record);
        tracing::info!("Record added at position {}", store.len() - 1);
        Ok(Notice::record_added())
    }

    /// Validate a submitted edit form and replace the record at `position`
    pub fn edit_record(&self, position: i64, draft: RecordDraft) -> Result<Notice, RecordError> {
        let record = RiskRecord::try_from(draft).inspect_err(|e| {
            tracing::warn!("Rejected edit of record {}: {}", position, e);
        })?;

        self.store().update(position, record).inspect_err(|e| {
            tracing::warn!("Edit failed: {}", e);
        })?;
        tracing::info!("Record {} updated", position);
        Ok(Notice::record_updated())
    }

    pub fn delete_record(&self, position: i64) -> Result<Notice, RecordError> {
        self.store().remove(position).inspect_err(|e| {
            tracing::warn!("Delete failed: {}", e);
        })?;
        tracing::info!("Record {} removed", position);
        Ok(Notice::record_removed())
    }

    pub fn record(&self, position: i64) -> Result<RiskRecord, RecordError> {
        self.store().get(position).cloned()
    }

    /// Editable copy of the record at `position`, for pre-filling the edit form
    pub fn draft_for(&self, position: i64) -> Result<RecordDraft, RecordError> {
        self.store().get(position).map(RecordDraft::from)
    }

    pub fn records(&self) -> Vec<RiskRecord> {
        self.store().all()
    }

    pub fn classified_records(&self) -> Vec<ClassifiedRecord> {
        classify_all(&self.records())
    }

    pub fn category_counts(&self) -> HashMap<RiskCategory, usize> {
        aggregate(&self.classified_records())
    }

    pub fn distribution(&self) -> RiskDistribution {
        RiskDistribution::from_counts(&self.category_counts())
    }

    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    pub fn request_pdf(&self) -> Result<ExportPayload, ReportError> {
        self.export_with(&PdfExporter::new(self.report.clone()))
    }

    pub fn request_excel(&self) -> Result<ExportPayload, ReportError> {
        self.export_with(&XlsxExporter::new(&self.report))
    }

    fn export_with(&self, exporter: &dyn Exporter) -> Result<ExportPayload, ReportError> {
        // Snapshot first; rendering runs without holding the lock
        let records = self.classified_records();
        let payload = exporter.export(&records).inspect_err(|e| {
            tracing::warn!("Export failed: {}", e);
        })?;
        tracing::info!("Exported {} ({} records)", payload.file_name, records.len());
        Ok(payload)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
