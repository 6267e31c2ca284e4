//! Storage module for file management
//!
//! Provides the blob-storage boundary used for maintenance attachments and
//! strata documents, plus the MinIO/S3-compatible implementation.

mod minio_client;

pub use minio_client::MinIOClient;

use async_trait::async_trait;

use crate::core::error::AppError;

/// Opaque blob-storage boundary: put by key, signed get by key.
///
/// Any S3-compatible store satisfies this; services depend on the trait so
/// upload handling can be exercised without a live bucket.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload a blob under the given key, returning the key
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError>;

    /// Generate a time-limited presigned URL for downloading a blob
    async fn presigned_url(&self, key: &str) -> Result<String, AppError>;

    /// Delete a blob
    async fn delete(&self, key: &str) -> Result<(), AppError>;

    /// Direct (unsigned) URL reference for a blob
    fn file_url(&self, key: &str) -> String;
}

#[cfg(test)]
pub mod memory {
    //! In-memory BlobStore used by service tests.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct MemoryBlobStore {
        blobs: Mutex<HashMap<String, (Vec<u8>, String)>>,
        /// Keys the store should refuse to accept, to simulate upload failures
        pub failing_keys: Vec<String>,
    }

    impl MemoryBlobStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contains(&self, key: &str) -> bool {
            self.blobs.lock().unwrap().contains_key(key)
        }

        pub fn len(&self) -> usize {
            self.blobs.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl BlobStore for MemoryBlobStore {
        async fn upload(
            &self,
            key: &str,
            data: Vec<u8>,
            content_type: &str,
        ) -> Result<String, AppError> {
            if self.failing_keys.iter().any(|k| key.contains(k.as_str())) {
                return Err(AppError::Storage(format!("simulated failure for {}", key)));
            }
            self.blobs
                .lock()
                .unwrap()
                .insert(key.to_string(), (data, content_type.to_string()));
            Ok(key.to_string())
        }

        async fn presigned_url(&self, key: &str) -> Result<String, AppError> {
            Ok(format!("memory://signed/{}", key))
        }

        async fn delete(&self, key: &str) -> Result<(), AppError> {
            self.blobs.lock().unwrap().remove(key);
            Ok(())
        }

        fn file_url(&self, key: &str) -> String {
            format!("memory://{}", key)
        }
    }
}
