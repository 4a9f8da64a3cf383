use crate::store::error::{Result, StoreError};
use crate::store::s3::client::S3Backend;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Delete, Error as KeyError, ObjectIdentifier};

/// Most keys a single DeleteObjects request accepts.
const DELETE_BATCH_LIMIT: usize = 1000;

/// One quiet-mode `Delete` per run of at most [`DELETE_BATCH_LIMIT`] keys
fn delete_batches(keys: &[String]) -> Result<Vec<Delete>> {
    keys.chunks(DELETE_BATCH_LIMIT)
        .map(|batch| -> Result<Delete> {
            let identifiers = batch
                .iter()
                .map(|key| ObjectIdentifier::builder().key(key).build())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(Delete::builder()
                .set_objects(Some(identifiers))
                .quiet(true)
                .build()?)
        })
        .collect()
}

// Quiet mode only reports the keys that failed
fn partial_delete_error(bucket: &str, errors: &[KeyError]) -> Option<StoreError> {
    let first = errors.first()?;
    Some(StoreError::PartialDelete {
        bucket: bucket.to_string(),
        failed: errors.len(),
        first_key: first.key().unwrap_or_default().to_string(),
        message: first.message().unwrap_or("unknown error").to_string(),
    })
}

impl S3Backend {
    pub fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.runtime.block_on(async {
            let response = self
                .client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(ByteStream::from(body))
                .send()
                .await
                .map_err(|e| self.sdk_error("put_object", e))?;

            self.logger.debug(&format!(
                "put_object {bucket}/{key} e-tag: {}",
                response.e_tag().unwrap_or("<none>")
            ));
            Ok::<(), StoreError>(())
        })
    }

    pub fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .delete_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| self.sdk_error("delete_object", e))?;
            Ok::<(), StoreError>(())
        })
    }

    pub fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<usize> {
        let batches = delete_batches(&keys)?;
        self.runtime.block_on(async {
            let mut deleted = 0;

            for delete in batches {
                let count = delete.objects().len();
                self.logger.debug(&format!(
                    "Sending DeleteObjects for {count} keys in bucket '{bucket}'"
                ));

                let response = self
                    .client
                    .delete_objects()
                    .bucket(bucket)
                    .delete(delete)
                    .send()
                    .await
                    .map_err(|e| self.sdk_error("delete_objects", e))?;

                if let Some(err) = partial_delete_error(bucket, response.errors()) {
                    return Err(err);
                }
                deleted += count;
            }

            Ok::<usize, StoreError>(deleted)
        })
    }

    pub fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            self.logger.debug(&format!(
                "Listing objects with prefix '{prefix}' in bucket '{bucket}'"
            ));

            let prefix = (!prefix.is_empty()).then(|| prefix.to_string());
            let mut pages = self
                .client
                .list_objects_v2()
                .bucket(bucket)
                .set_prefix(prefix)
                .into_paginator()
                .send();

            let mut keys = Vec::new();
            let mut page_count = 0;
            while let Some(page) = pages.next().await {
                let page = page.map_err(|e| self.sdk_error("list_objects", e))?;
                page_count += 1;
                keys.extend(
                    page.contents()
                        .iter()
                        .filter_map(|object| object.key().map(str::to_string)),
                );
            }

            self.logger.debug(&format!(
                "Found {} objects across {page_count} page(s)",
                keys.len()
            ));
            Ok::<Vec<String>, StoreError>(keys)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("data/{i:04}")).collect()
    }

    fn batch_sizes(keys: &[String]) -> Vec<usize> {
        delete_batches(keys)
            .unwrap()
            .iter()
            .map(|delete| delete.objects().len())
            .collect()
    }

    #[test]
    fn test_no_keys_no_batches() {
        assert!(batch_sizes(&[]).is_empty());
    }

    #[test]
    fn test_batches_hold_at_most_a_thousand_keys() {
        assert_eq!(batch_sizes(&keys(1)), vec![1]);
        assert_eq!(batch_sizes(&keys(1000)), vec![1000]);
        assert_eq!(batch_sizes(&keys(1001)), vec![1000, 1]);
    }

    #[test]
    fn test_batches_keep_key_order_and_quiet_mode() {
        let batches = delete_batches(&keys(1001)).unwrap();
        assert_eq!(batches[0].quiet(), Some(true));
        assert_eq!(batches[0].objects()[0].key(), "data/0000");
        assert_eq!(batches[1].objects()[0].key(), "data/1000");
    }

    #[test]
    fn test_clean_response_is_not_an_error() {
        assert!(partial_delete_error("b1", &[]).is_none());
    }

    #[test]
    fn test_failed_keys_become_partial_delete() {
        let errors = vec![
            KeyError::builder()
                .key("data/a")
                .code("AccessDenied")
                .message("Access Denied")
                .build(),
            KeyError::builder().key("data/b").build(),
        ];

        match partial_delete_error("b1", &errors) {
            Some(StoreError::PartialDelete {
                bucket,
                failed,
                first_key,
                message,
            }) => {
                assert_eq!(bucket, "b1");
                assert_eq!(failed, 2);
                assert_eq!(first_key, "data/a");
                assert_eq!(message, "Access Denied");
            }
            other => panic!("expected PartialDelete, got {other:?}"),
        }
    }
}
