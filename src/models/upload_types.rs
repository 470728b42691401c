use serde::{Deserialize, Serialize};

/// Classification data the backend returns for one submitted file.
/// Field names match the wire format; everything past `extracted_text`
/// is absent when the classifier declined the file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FileResult {
    pub filename: String,
    pub content_type: String,
    pub size: u64,
    pub extracted_text: String,
    pub category: Option<String>,
    pub probabilities: Option<Vec<f32>>,
    pub suggested_response: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadResponse {
    pub message: String,
    pub files: Option<Vec<FileResult>>,
}

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// A file the user picked but has not submitted yet.
#[derive(Debug, Serialize, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub content_type: String,
}
