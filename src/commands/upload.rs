use crate::error::AppError;
use crate::models::upload_types::UploadResponse;
use crate::services::api_client::ApiClient;
use crate::services::session::UploadSession;
use tauri::State;

/// Submit the current selection for classification. Fails before any
/// network activity when nothing is selected.
#[tauri::command]
pub async fn submit_files(
    session: State<'_, UploadSession>,
    api: State<'_, ApiClient>,
) -> Result<UploadResponse, AppError> {
    let selection = session.selection().await;
    if selection.is_empty() {
        return Err("No file selected. Choose at least one .txt or .pdf file first.".into());
    }

    log::info!(
        "Submitting {} file(s) to {}",
        selection.len(),
        api.upload_url()
    );

    match api.upload_files(&selection).await {
        Ok(response) => {
            session.store_response(response.clone()).await;
            Ok(response)
        }
        Err(e) => {
            // A failed submission invalidates whatever was displayed before
            session.clear_response().await;
            log::error!("File submission failed: {}", e);
            Err(e)
        }
    }
}

/// Submit pasted email text for classification. Whitespace-only input is
/// rejected locally.
#[tauri::command]
pub async fn submit_email_text(
    session: State<'_, UploadSession>,
    api: State<'_, ApiClient>,
    email_text: String,
) -> Result<UploadResponse, AppError> {
    let email_text = email_text.trim();
    if email_text.is_empty() {
        return Err("Email text is empty. Paste the email contents first.".into());
    }

    log::info!("Submitting pasted email text to {}", api.upload_url());

    match api.upload_email_text(email_text).await {
        Ok(response) => {
            session.store_response(response.clone()).await;
            Ok(response)
        }
        Err(e) => {
            session.clear_response().await;
            log::error!("Email text submission failed: {}", e);
            Err(e)
        }
    }
}

#[tauri::command]
pub async fn get_last_response(
    session: State<'_, UploadSession>,
) -> Result<Option<UploadResponse>, AppError> {
    Ok(session.last_response().await)
}
