pub mod upload_types;
