use crate::interfaces::StorageBackend;
use crate::store::client::ObjectStoreClient;
use crate::store::error::Result;
use crate::store::prefix::normalize_prefix;

impl<B: StorageBackend> ObjectStoreClient<B> {
    /// Create a zero-byte placeholder at the normalized `prefix`
    pub fn create_directory(&self, bucket: &str, prefix: &str) -> Result<String> {
        let key = normalize_prefix(prefix);
        self.backend.put_object(bucket, &key, Vec::new())?;
        self.logger.normal(&format!("Created bucket dir - {bucket}/{key}"));
        Ok(key)
    }

    /// Delete every object in `bucket` and return how many were removed.
    /// An empty bucket issues no bulk delete.
    pub fn delete_all_objects(&self, bucket: &str) -> Result<usize> {
        let keys = self.backend.list_objects(bucket, "")?;
        let deleted = if keys.is_empty() {
            0
        } else {
            self.backend.delete_objects(bucket, keys)?
        };
        self.logger.normal(&format!("Deleted all bucket - {bucket} objects - {deleted}."));
        Ok(deleted)
    }

    /// Delete one object. With `normalize` the key gets a trailing separator
    /// first, which targets a directory placeholder.
    pub fn delete_object(&self, bucket: &str, key: &str, normalize: bool) -> Result<()> {
        let key = if normalize {
            normalize_prefix(key)
        } else {
            key.to_string()
        };
        self.backend.delete_object(bucket, &key)?;
        self.logger.normal(&format!("Deleted bucket - {bucket} object - {key}."));
        Ok(())
    }

    /// Every key in `bucket`
    pub fn list_objects(&self, bucket: &str) -> Result<Vec<String>> {
        self.filter_objects(bucket, "")
    }

    /// Keys in `bucket` starting with `prefix`, which is used as given.
    /// An empty prefix lists everything.
    pub fn filter_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        let keys = self.backend.list_objects(bucket, prefix)?;
        self.logger.info(&format!(
            "Found {} object(s) with prefix '{prefix}' in bucket '{bucket}'",
            keys.len()
        ));
        Ok(keys)
    }
}
