//! Staged image storage for multipart uploads.
//!
//! Uploaded files are written to disk before the database record they belong
//! to exists. The staging API keeps that window explicit: a staged upload is
//! either promoted by persisting its public path, or discarded when the
//! surrounding operation fails.

use std::path::{Path, PathBuf};

use axum::extract::multipart::Field;
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::server::error::upload::UploadError;

/// Largest accepted upload, matching the catalog clients.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Filesystem store for uploaded images.
#[derive(Clone)]
pub struct UploadStore {
    root: PathBuf,
}

/// File written to disk but not yet referenced by any record.
#[derive(Debug)]
pub struct StagedUpload {
    pub filename: String,
    pub path: PathBuf,
}

impl StagedUpload {
    /// Public URL path clients use to fetch the file.
    pub fn public_path(&self) -> String {
        format!("{}/{}", PUBLIC_PREFIX, self.filename)
    }
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads a multipart field and stages it on disk.
    ///
    /// # Returns
    /// - `Ok(StagedUpload)` - File accepted and written
    /// - `Err(UploadError)` - Rejected file, malformed stream, or write failure
    pub async fn stage_field(&self, field: Field<'_>) -> Result<StagedUpload, UploadError> {
        let content_type = field.content_type().map(str::to_string);
        let original_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;

        self.stage_bytes(content_type.as_deref(), original_name.as_deref(), &bytes)
            .await
    }

    /// Validates and writes file content under a fresh unique name.
    ///
    /// Only `image/*` content up to [`MAX_UPLOAD_BYTES`] is accepted. The
    /// extension of the original filename is kept so browsers infer the
    /// right type when the file is served.
    pub async fn stage_bytes(
        &self,
        content_type: Option<&str>,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<StagedUpload, UploadError> {
        if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
            return Err(UploadError::NotAnImage);
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size: bytes.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        tokio::fs::create_dir_all(&self.root).await?;

        let filename = unique_filename(original_name);
        let path = self.root.join(&filename);
        tokio::fs::write(&path, bytes).await?;

        Ok(StagedUpload { filename, path })
    }

    /// Removes a staged file after the operation it belonged to failed.
    ///
    /// Best-effort: a failure to remove is logged and otherwise ignored, as
    /// the caller is already propagating the primary error.
    pub async fn discard(&self, staged: &StagedUpload) {
        if let Err(err) = tokio::fs::remove_file(&staged.path).await {
            tracing::warn!(
                "Failed to discard staged upload {}: {}",
                staged.path.display(),
                err
            );
        }
    }

    /// Removes the stored file behind a public path, best-effort.
    ///
    /// Paths that do not point into the store are ignored.
    pub async fn remove_public(&self, public_path: &str) {
        let Some(path) = self.resolve(public_path) else {
            return;
        };

        if let Err(err) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Failed to remove stored file {}: {}", path.display(), err);
        }
    }

    /// Maps a public path back to a file inside the store root.
    ///
    /// Rejects anything outside the `/uploads/` prefix and any filename that
    /// could escape the root.
    fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        let filename = public_path.strip_prefix("/uploads/")?;
        if filename.is_empty() || filename.contains('/') || filename.contains("..") {
            return None;
        }

        Some(self.root.join(filename))
    }
}

/// Builds a collision-resistant stored filename, keeping the original
/// extension when present.
fn unique_filename(original_name: Option<&str>) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!(
        "{}-{}{}",
        chrono::Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stages_image_bytes_and_builds_public_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let staged = store
            .stage_bytes(Some("image/png"), Some("photo.png"), b"fake png")
            .await
            .unwrap();

        assert!(staged.path.exists());
        assert!(staged.filename.ends_with(".png"));
        assert_eq!(
            staged.public_path(),
            format!("/uploads/{}", staged.filename)
        );
    }

    #[tokio::test]
    async fn rejects_non_image_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let result = store
            .stage_bytes(Some("application/pdf"), Some("doc.pdf"), b"%PDF")
            .await;

        assert!(matches!(result, Err(UploadError::NotAnImage)));
    }

    #[tokio::test]
    async fn rejects_missing_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let result = store.stage_bytes(None, Some("photo.png"), b"bytes").await;

        assert!(matches!(result, Err(UploadError::NotAnImage)));
    }

    #[tokio::test]
    async fn rejects_oversized_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let oversized = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let result = store
            .stage_bytes(Some("image/jpeg"), Some("big.jpg"), &oversized)
            .await;

        assert!(matches!(result, Err(UploadError::TooLarge { .. })));
    }

    #[tokio::test]
    async fn discard_removes_the_staged_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let staged = store
            .stage_bytes(Some("image/png"), None, b"bytes")
            .await
            .unwrap();
        assert!(staged.path.exists());

        store.discard(&staged).await;
        assert!(!staged.path.exists());
    }

    #[tokio::test]
    async fn remove_public_ignores_paths_outside_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let staged = store
            .stage_bytes(Some("image/png"), None, b"bytes")
            .await
            .unwrap();

        store.remove_public("/etc/passwd").await;
        store.remove_public("/uploads/../escape").await;
        store.remove_public(&staged.public_path()).await;

        assert!(!staged.path.exists());
    }
}
