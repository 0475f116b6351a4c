use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Text,
    Pdf,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug)]
pub struct DocumentInfo {
    pub path: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub format: DocumentFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub terms: Vec<String>,
    pub saved_at: String,
}
