use crate::error::AppError;
use crate::models::upload_types::{ApiErrorBody, SelectedFile, UploadResponse};
use crate::services::file_service;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const API_URL_ENV: &str = "MAILLENSE_API_URL";

/// Client for the remote classification service. One instance is built at
/// startup and shared through Tauri managed state.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }

    /// Submit every selected file as one multipart request under the
    /// `files` field.
    pub async fn upload_files(&self, files: &[SelectedFile]) -> Result<UploadResponse, AppError> {
        let mut form = Form::new();
        for file in files {
            let bytes = file_service::read_file_bytes(file).await?;
            let part = Part::bytes(bytes)
                .file_name(file.name.clone())
                .mime_str(&file.content_type)
                .map_err(|e| AppError {
                    message: format!("Invalid content type {}: {}", file.content_type, e),
                })?;
            form = form.part("files", part);
        }
        self.post_upload(form).await
    }

    /// Submit pasted email text as a single `email_text` form field.
    pub async fn upload_email_text(&self, email_text: &str) -> Result<UploadResponse, AppError> {
        let form = Form::new().text("email_text", email_text.to_string());
        self.post_upload(form).await
    }

    async fn post_upload(&self, form: Form) -> Result<UploadResponse, AppError> {
        let response = self.client.post(self.upload_url()).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_body(status, &body));
        }

        response.json::<UploadResponse>().await.map_err(|e| AppError {
            message: format!("Failed to parse server response: {}", e),
        })
    }
}

/// The backend reports failures as `{"error": "..."}`. Anything else
/// (proxy pages, empty bodies) falls back to the bare status.
fn error_from_body(status: StatusCode, body: &str) -> AppError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.into(),
        Err(_) => format!("Server returned HTTP {}", status).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_tolerates_trailing_slash() {
        let plain = ApiClient::new("http://localhost:5000");
        let slashed = ApiClient::new("http://localhost:5000/");
        assert_eq!(plain.upload_url(), "http://localhost:5000/upload");
        assert_eq!(plain.upload_url(), slashed.upload_url());
    }

    #[test]
    fn test_error_from_body_uses_server_message() {
        let err = error_from_body(
            StatusCode::BAD_REQUEST,
            r#"{"error": "No valid email content provided."}"#,
        );
        assert_eq!(err.message, "No valid email content provided.");
    }

    #[test]
    fn test_error_from_body_falls_back_to_status() {
        let err = error_from_body(StatusCode::BAD_GATEWAY, "<html>upstream down</html>");
        assert_eq!(err.message, "Server returned HTTP 502 Bad Gateway");

        let err = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(err.message.contains("500"));
    }
}
