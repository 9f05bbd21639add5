// Risk matrix data models

pub mod category;
pub mod notice;
pub mod record;

// Re-exports for convenience
pub use category::{ClassifiedRecord, RiskCategory};
pub use notice::{Notice, NoticeLevel};
pub use record::{RecordDraft, RiskLevel, RiskRecord};
