use crate::error::AppError;
use crate::models::upload_types::SelectedFile;
use crate::services::file_service;
use crate::services::session::UploadSession;
use tauri::State;

/// Replace the current selection with the picked paths. Passing an empty
/// list clears the selection, matching a cancelled file picker.
#[tauri::command]
pub async fn select_files(
    session: State<'_, UploadSession>,
    paths: Vec<String>,
) -> Result<Vec<SelectedFile>, AppError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        files.push(file_service::inspect_file(path)?);
    }

    log::info!("Selection replaced with {} file(s)", files.len());
    session.replace_selection(files.clone()).await;
    Ok(files)
}

#[tauri::command]
pub async fn clear_selection(session: State<'_, UploadSession>) -> Result<(), AppError> {
    session.clear().await;
    Ok(())
}

#[tauri::command]
pub async fn get_selection(
    session: State<'_, UploadSession>,
) -> Result<Vec<SelectedFile>, AppError> {
    Ok(session.selection().await)
}
