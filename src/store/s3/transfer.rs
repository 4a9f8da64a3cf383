use crate::store::error::{Result, StoreError};
use crate::store::s3::client::S3Backend;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

impl S3Backend {
    /// Stream a local file to `key` without loading it into memory
    pub fn upload_file(&self, bucket: &str, local_path: &Path, key: &str) -> Result<()> {
        self.runtime.block_on(async {
            let body = ByteStream::from_path(local_path)
                .await
                .map_err(|e| self.sdk_error("upload_object", e))?;

            let response = self
                .client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(body)
                .send()
                .await
                .map_err(|e| self.sdk_error("upload_object", e))?;

            self.logger.debug(&format!(
                "Uploaded {} to {bucket}/{key}, e-tag: {}",
                local_path.display(),
                response.e_tag().unwrap_or("<none>")
            ));
            Ok::<(), StoreError>(())
        })
    }

    /// Fetch `key` and write its content to `local_path`, replacing any existing file
    pub fn download_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        self.runtime.block_on(async {
            let response = self
                .client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| self.sdk_error("download_object", e))?;

            self.logger.debug(&format!(
                "S3 download response received\nContent length: {:?}\nE-Tag: {:?}",
                response.content_length(),
                response.e_tag()
            ));

            let bytes = response
                .body
                .collect()
                .await
                .map_err(|e| self.sdk_error("download_object", e))?
                .into_bytes();

            std::fs::write(local_path, &bytes)?;

            self.logger.debug(&format!(
                "Wrote {} bytes to {}",
                bytes.len(),
                local_path.display()
            ));
            Ok::<(), StoreError>(())
        })
    }
}
