//! Local-disk storage for uploaded files (reports and SOS clips).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use carenest_core::hashing::sha256_hex;
use carenest_core::uploads::stored_file_name;
use chrono::Utc;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// A file written to the upload directory.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub path: PathBuf,
    pub size: i64,
    pub sha256: String,
}

/// Write `data` under `dir` as `<millis>-<uuid>-<sanitised original name>`.
///
/// The file is created with `create_new`, so an existing upload is never
/// overwritten.
pub async fn save_upload(dir: &Path, original_name: &str, data: &[u8]) -> AppResult<StoredFile> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Cannot create upload dir: {e}")))?;

    let prefix = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    );
    let path = dir.join(stored_file_name(original_name, &prefix));
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
        .map_err(|e| AppError::InternalError(format!("Cannot create upload: {e}")))?;
    file.write_all(data)
        .await
        .map_err(|e| AppError::InternalError(format!("Cannot write upload: {e}")))?;
    file.flush()
        .await
        .map_err(|e| AppError::InternalError(format!("Cannot write upload: {e}")))?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "Stored upload");

    Ok(StoredFile {
        path,
        size: data.len() as i64,
        sha256: sha256_hex(data),
    })
}

/// Read a stored file. `Ok(None)` when it no longer exists.
pub async fn read_upload(path: &Path) -> AppResult<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::InternalError(format!("Cannot read upload: {e}"))),
    }
}

/// Delete a stored file. A file that is already gone is not an error.
pub async fn remove_upload(path: &Path) -> AppResult<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Upload already missing on delete");
            Ok(())
        }
        Err(e) => Err(AppError::InternalError(format!("Cannot delete upload: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_read_remove() {
        let dir = tempfile::tempdir().unwrap();
        let stored = save_upload(dir.path(), "../../etc/passwd", b"hello")
            .await
            .unwrap();

        assert!(stored.path.starts_with(dir.path()));
        assert!(stored.path.to_string_lossy().ends_with("-passwd"));
        assert_eq!(stored.size, 5);
        assert_eq!(stored.sha256.len(), 64);

        assert_eq!(read_upload(&stored.path).await.unwrap().unwrap(), b"hello");

        remove_upload(&stored.path).await.unwrap();
        assert!(read_upload(&stored.path).await.unwrap().is_none());
        // Second delete is tolerated.
        remove_upload(&stored.path).await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn same_name_uploads_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut tasks = Vec::new();
        for i in 0..50 {
            let dir = dir.path().to_path_buf();
            tasks.push(tokio::spawn(async move {
                let body = format!("owner-{i}");
                let stored = save_upload(&dir, "report.pdf", body.as_bytes()).await.unwrap();
                (stored.path, body)
            }));
        }

        let mut paths = std::collections::HashSet::new();
        for task in tasks {
            let (path, body) = task.await.unwrap();
            let on_disk = read_upload(&path).await.unwrap().unwrap();
            assert_eq!(on_disk, body.as_bytes());
            assert!(path.to_string_lossy().ends_with("-report.pdf"));
            paths.insert(path);
        }
        assert_eq!(paths.len(), 50);
    }
}
