use crate::interfaces::StorageBackend;
use crate::store::client::ObjectStoreClient;
use crate::store::error::Result;

impl<B: StorageBackend> ObjectStoreClient<B> {
    /// Request a new bucket. No existence pre-check is made, so creating a
    /// bucket twice surfaces whatever the backend reports.
    pub fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.backend.create_bucket(bucket)?;
        self.logger.normal(&format!("Created bucket - {bucket}"));
        Ok(())
    }

    /// All bucket names owned by the caller, in backend order
    pub fn list_buckets(&self) -> Result<Vec<String>> {
        let buckets = self.backend.list_buckets()?;
        self.logger.info(&format!("Listed {} bucket(s)", buckets.len()));
        Ok(buckets)
    }

    /// Scan the full bucket list for `bucket`.
    ///
    /// One `list_buckets` call per check. An authorization failure on the
    /// listing is returned as an error rather than as "absent".
    pub fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        let exists = self.list_buckets()?.iter().any(|name| name == bucket);
        if exists {
            self.logger.normal(&format!("Bucket - {bucket} exists."));
        } else {
            self.logger.normal(&format!("Bucket - {bucket} does not exist."));
        }
        Ok(exists)
    }

    /// Empty and delete `bucket`. A bucket that does not exist is left alone
    /// and reported as success.
    pub fn delete_bucket(&self, bucket: &str) -> Result<()> {
        if !self.bucket_exists(bucket)? {
            return Ok(());
        }

        self.delete_all_objects(bucket)?;
        self.backend.delete_bucket(bucket)?;
        self.logger.normal(&format!("Deleted bucket - {bucket}"));
        Ok(())
    }
}
