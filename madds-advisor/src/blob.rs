//! Blob-storage seam for image classification.
//!
//! The advisor never reads image bytes itself. An upload is handed to a
//! [`BlobStore`], and the URL it returns is forwarded to the backend.

use async_trait::async_trait;

/// Blob storage errors.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// The upload was rejected before storing
    #[error("Upload rejected: {0}")]
    Rejected(String),

    /// The storage service failed
    #[error("Storage failed: {0}")]
    StorageFailed(String),
}

/// A raw file to store.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Create a new upload.
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Whether the declared type is an image.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Stores uploaded files and returns a URL the backend can fetch.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store the upload and return its public URL.
    async fn store(&self, upload: ImageUpload) -> Result<String, BlobError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Keeps uploads in memory and hands out fake URLs.
    #[derive(Default)]
    pub struct MemoryBlobStore {
        pub stored: Mutex<Vec<ImageUpload>>,
        pub fail: bool,
    }

    #[async_trait]
    impl BlobStore for MemoryBlobStore {
        async fn store(&self, upload: ImageUpload) -> Result<String, BlobError> {
            if self.fail {
                return Err(BlobError::StorageFailed("bucket unavailable".to_string()));
            }
            if !upload.is_image() {
                return Err(BlobError::Rejected(format!("not an image: {}", upload.content_type)));
            }

            let url = format!("https://blobs.test/{}", upload.file_name);
            self.stored.lock().unwrap().push(upload);
            Ok(url)
        }
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryBlobStore::default();
        let url = store
            .store(ImageUpload::new("chair.jpg", "image/jpeg", vec![0xff, 0xd8]))
            .await
            .unwrap();

        assert_eq!(url, "https://blobs.test/chair.jpg");
        assert_eq!(store.stored.lock().unwrap().len(), 1);

        let rejected = store
            .store(ImageUpload::new("notes.txt", "text/plain", vec![]))
            .await;
        tokio_test::assert_err!(rejected);
    }
}
