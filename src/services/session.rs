use crate::models::upload_types::{SelectedFile, UploadResponse};
use tokio::sync::Mutex;

#[derive(Default)]
struct SessionState {
    selection: Vec<SelectedFile>,
    last_response: Option<UploadResponse>,
}

/// In-memory form state for the current app session. Nothing here survives
/// an app restart.
pub struct UploadSession {
    state: Mutex<SessionState>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Replace the selection. The stored response belongs to the old
    /// selection, so it is dropped along with it.
    pub async fn replace_selection(&self, files: Vec<SelectedFile>) {
        let mut state = self.state.lock().await;
        state.selection = files;
        state.last_response = None;
    }

    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.selection.clear();
        state.last_response = None;
    }

    pub async fn selection(&self) -> Vec<SelectedFile> {
        self.state.lock().await.selection.clone()
    }

    pub async fn store_response(&self, response: UploadResponse) {
        self.state.lock().await.last_response = Some(response);
    }

    pub async fn clear_response(&self) {
        self.state.lock().await.last_response = None;
    }

    pub async fn last_response(&self) -> Option<UploadResponse> {
        self.state.lock().await.last_response.clone()
    }
}
