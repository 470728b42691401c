pub mod api_client;
pub mod file_service;
pub mod session;
