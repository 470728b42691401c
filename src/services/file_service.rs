use crate::error::AppError;
use crate::models::upload_types::SelectedFile;
use std::path::Path;

const SUPPORTED_TYPES: &[(&str, &str)] = &[("txt", "text/plain"), ("pdf", "application/pdf")];

pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension().and_then(|ext| ext.to_str())?.to_lowercase();
    SUPPORTED_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, content_type)| *content_type)
}

/// Validate a picked path and describe it for the selection list.
pub fn inspect_file(path: &str) -> Result<SelectedFile, AppError> {
    let file_path = Path::new(path);
    if !file_path.is_file() {
        return Err(format!("File does not exist: {}", path).into());
    }

    let content_type = content_type_for(file_path).ok_or_else(|| AppError {
        message: format!("Unsupported file type: {} (expected .txt or .pdf)", path),
    })?;

    let meta = std::fs::metadata(file_path).map_err(|e| AppError {
        message: format!("Cannot read metadata for {}: {}", path, e),
    })?;

    let name = file_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(SelectedFile {
        name,
        path: path.to_string(),
        size: meta.len(),
        content_type: content_type.to_string(),
    })
}

pub async fn read_file_bytes(file: &SelectedFile) -> Result<Vec<u8>, AppError> {
    tokio::fs::read(&file.path).await.map_err(|e| AppError {
        message: format!("Failed to read {}: {}", file.name, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_content_type_detection() {
        assert_eq!(content_type_for(Path::new("a.txt")), Some("text/plain"));
        assert_eq!(content_type_for(Path::new("b.PDF")), Some("application/pdf"));
        assert_eq!(content_type_for(Path::new("c.png")), None);
        assert_eq!(content_type_for(Path::new("no_extension")), None);
    }

    #[test]
    fn test_inspect_file_reports_metadata() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mail.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"hello inbox").unwrap();

        let selected = inspect_file(path.to_str().unwrap()).unwrap();
        assert_eq!(selected.name, "mail.txt");
        assert_eq!(selected.size, 11);
        assert_eq!(selected.content_type, "text/plain");
    }

    #[test]
    fn test_inspect_file_rejects_missing_path() {
        let err = inspect_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.message.contains("does not exist"));
    }

    #[test]
    fn test_inspect_file_rejects_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::File::create(&path).unwrap();

        let err = inspect_file(path.to_str().unwrap()).unwrap_err();
        assert!(err.message.contains("Unsupported file type"));
    }

    #[tokio::test]
    async fn test_read_file_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mail.txt");
        std::fs::write(&path, b"body text").unwrap();

        let selected = inspect_file(path.to_str().unwrap()).unwrap();
        let bytes = read_file_bytes(&selected).await.unwrap();
        assert_eq!(bytes, b"body text");
    }
}
