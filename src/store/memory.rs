use crate::interfaces::StorageBackend;
use crate::store::error::{Result, StoreError};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised by [`InMemoryBackend`], named after the S3 error codes they mimic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryBackendError {
    #[error("NoSuchBucket: bucket '{0}' does not exist")]
    NoSuchBucket(String),

    #[error("BucketAlreadyOwnedByYou: bucket '{0}' already exists")]
    BucketAlreadyOwnedByYou(String),

    #[error("BucketNotEmpty: bucket '{0}' still holds objects")]
    BucketNotEmpty(String),

    #[error("NoSuchKey: '{key}' not found in bucket '{bucket}'")]
    NoSuchKey { bucket: String, key: String },
}

type Objects = BTreeMap<String, Vec<u8>>;

/// Process-local stand-in for S3, used by `--dry-run` and the tests.
///
/// Keys and bucket names are kept sorted, matching the ordering S3 returns
/// from `ListBuckets` and `ListObjectsV2`.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    buckets: RefCell<BTreeMap<String, Objects>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content stored at `key`, if the bucket and key both exist
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.buckets
            .borrow()
            .get(bucket)
            .and_then(|objects| objects.get(key).cloned())
    }

    fn with_bucket<T>(
        &self,
        operation: &'static str,
        bucket: &str,
        f: impl FnOnce(&mut Objects) -> Result<T>,
    ) -> Result<T> {
        let mut buckets = self.buckets.borrow_mut();
        let objects = buckets.get_mut(bucket).ok_or_else(|| {
            StoreError::backend(
                operation,
                MemoryBackendError::NoSuchBucket(bucket.to_string()),
            )
        })?;
        f(objects)
    }
}

impl StorageBackend for InMemoryBackend {
    fn create_bucket(&self, bucket: &str) -> Result<()> {
        let mut buckets = self.buckets.borrow_mut();
        if buckets.contains_key(bucket) {
            return Err(StoreError::backend(
                "create_bucket",
                MemoryBackendError::BucketAlreadyOwnedByYou(bucket.to_string()),
            ));
        }
        buckets.insert(bucket.to_string(), Objects::new());
        Ok(())
    }

    fn list_buckets(&self) -> Result<Vec<String>> {
        Ok(self.buckets.borrow().keys().cloned().collect())
    }

    fn delete_bucket(&self, bucket: &str) -> Result<()> {
        let mut buckets = self.buckets.borrow_mut();
        match buckets.get(bucket) {
            None => Err(StoreError::backend(
                "delete_bucket",
                MemoryBackendError::NoSuchBucket(bucket.to_string()),
            )),
            Some(objects) if !objects.is_empty() => Err(StoreError::backend(
                "delete_bucket",
                MemoryBackendError::BucketNotEmpty(bucket.to_string()),
            )),
            Some(_) => {
                buckets.remove(bucket);
                Ok(())
            }
        }
    }

    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.with_bucket("put_object", bucket, |objects| {
            objects.insert(key.to_string(), body);
            Ok(())
        })
    }

    fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.with_bucket("delete_object", bucket, |objects| {
            objects.remove(key);
            Ok(())
        })
    }

    fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<usize> {
        self.with_bucket("delete_objects", bucket, |objects| {
            let deleted = keys
                .iter()
                .filter(|key| objects.remove(key.as_str()).is_some())
                .count();
            Ok(deleted)
        })
    }

    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        self.with_bucket("list_objects", bucket, |objects| {
            Ok(objects
                .keys()
                .filter(|key| key.starts_with(prefix))
                .cloned()
                .collect())
        })
    }

    fn upload_file(&self, bucket: &str, local_path: &Path, key: &str) -> Result<()> {
        let body = std::fs::read(local_path)?;
        self.put_object(bucket, key, body)
    }

    fn download_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        let body = self.with_bucket("download_object", bucket, |objects| {
            objects.get(key).cloned().ok_or_else(|| {
                StoreError::backend(
                    "download_object",
                    MemoryBackendError::NoSuchKey {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    },
                )
            })
        })?;
        std::fs::write(local_path, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_error(err: &StoreError) -> &MemoryBackendError {
        err.backend_source()
            .and_then(|source| source.downcast_ref::<MemoryBackendError>())
            .expect("expected an in-memory backend error")
    }

    #[test]
    fn test_create_existing_bucket_fails() {
        let backend = InMemoryBackend::new();
        backend.create_bucket("b1").unwrap();
        let err = backend.create_bucket("b1").unwrap_err();
        assert_eq!(
            backend_error(&err),
            &MemoryBackendError::BucketAlreadyOwnedByYou("b1".to_string())
        );
    }

    #[test]
    fn test_non_empty_bucket_cannot_be_deleted() {
        let backend = InMemoryBackend::new();
        backend.create_bucket("b1").unwrap();
        backend.put_object("b1", "k", b"x".to_vec()).unwrap();

        let err = backend.delete_bucket("b1").unwrap_err();
        assert_eq!(
            backend_error(&err),
            &MemoryBackendError::BucketNotEmpty("b1".to_string())
        );

        backend.delete_object("b1", "k").unwrap();
        backend.delete_bucket("b1").unwrap();
        assert!(backend.list_buckets().unwrap().is_empty());
    }

    #[test]
    fn test_missing_bucket_is_reported() {
        let backend = InMemoryBackend::new();
        let err = backend.list_objects("nope", "").unwrap_err();
        assert_eq!(
            backend_error(&err),
            &MemoryBackendError::NoSuchBucket("nope".to_string())
        );
    }

    #[test]
    fn test_listing_is_sorted_and_prefix_filtered() {
        let backend = InMemoryBackend::new();
        backend.create_bucket("b1").unwrap();
        for key in ["tmp/b", "data/", "data/z", "data/a", "database"] {
            backend.put_object("b1", key, Vec::new()).unwrap();
        }

        assert_eq!(
            backend.list_objects("b1", "data/").unwrap(),
            vec!["data/", "data/a", "data/z"]
        );
        assert_eq!(backend.list_objects("b1", "").unwrap().len(), 5);
    }

    #[test]
    fn test_delete_objects_counts_only_existing_keys() {
        let backend = InMemoryBackend::new();
        backend.create_bucket("b1").unwrap();
        backend.put_object("b1", "a", Vec::new()).unwrap();

        let deleted = backend
            .delete_objects("b1", vec!["a".to_string(), "missing".to_string()])
            .unwrap();
        assert_eq!(deleted, 1);
    }

    #[test]
    fn test_download_missing_key_fails() {
        let backend = InMemoryBackend::new();
        backend.create_bucket("b1").unwrap();
        let dir = tempfile::tempdir().unwrap();

        let err = backend
            .download_file("b1", "nope", &dir.path().join("out"))
            .unwrap_err();
        assert!(matches!(
            backend_error(&err),
            MemoryBackendError::NoSuchKey { .. }
        ));
    }
}
