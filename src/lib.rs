mod commands;
mod error;
mod models;
mod services;

use services::api_client::ApiClient;
use services::session::UploadSession;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Log to stderr, filter via RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .setup(|app| {
            let api = ApiClient::from_env();
            log::info!("Classification endpoint: {}", api.upload_url());
            app.manage(api);
            app.manage(UploadSession::new());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::selection::select_files,
            commands::selection::clear_selection,
            commands::selection::get_selection,
            commands::upload::submit_files,
            commands::upload::submit_email_text,
            commands::upload::get_last_response,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
