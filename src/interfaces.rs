use crate::store::error::Result;
use mockall::automock;
use std::path::Path;

/// The remote calls the object store client is built on.
///
/// Every method is a blocking call. Implementations hold no cached state about
/// buckets or objects; the backend is the source of truth.
#[automock]
pub trait StorageBackend {
    fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Bucket names in backend order.
    fn list_buckets(&self) -> Result<Vec<String>>;

    /// Deletes an empty bucket.
    fn delete_bucket(&self, bucket: &str) -> Result<()>;

    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;

    /// Deletes a single key. A missing key is not an error.
    fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;

    /// Deletes the given keys in bulk and returns how many were removed.
    fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<usize>;

    /// Every key starting with `prefix`; an empty prefix lists the whole bucket.
    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>>;

    fn upload_file(&self, bucket: &str, local_path: &Path, key: &str) -> Result<()>;

    fn download_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()>;
}
