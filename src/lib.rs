// Risk matrix - occupational health and safety risk assessment
// Module re-exports

pub mod analytics;
pub mod classifier;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
pub mod store;
pub mod utils;

#[cfg(feature = "desktop")]
pub mod commands;

// Re-export commonly used types
pub use models::{
    ClassifiedRecord, Notice, NoticeLevel, RecordDraft, RiskCategory, RiskLevel, RiskRecord,
};

pub use analytics::{aggregate, RiskDistribution};
pub use classifier::{classify, classify_record, score};
pub use config::{AppConfig, ReportConfig};
pub use error::{RecordError, ReportError};
pub use export::{ExportPayload, Exporter, PdfExporter, ReportFormat, XlsxExporter};
pub use session::Session;
pub use store::RecordStore;
