use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "warning")]
    Warning,
}

/// Short message the form shows after an editor operation succeeds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn record_added() -> Self {
        Self::success("Registro agregado correctamente.")
    }

    pub fn record_updated() -> Self {
        Self::success("Registro actualizado correctamente.")
    }

    pub fn record_removed() -> Self {
        Self::warning("Registro eliminado.")
    }
}
