use crate::store::error::{Result, StoreError};
use crate::store::s3::client::S3Backend;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

/// Region where S3 rejects an explicit location constraint.
const DEFAULT_REGION: &str = "us-east-1";

/// Constraint CreateBucket needs for `region`; none in the default region.
fn location_constraint_for(region: Option<&str>) -> Option<BucketLocationConstraint> {
    region
        .filter(|region| *region != DEFAULT_REGION)
        .map(BucketLocationConstraint::from)
}

impl S3Backend {
    fn location_constraint(&self) -> Option<BucketLocationConstraint> {
        location_constraint_for(self.region())
    }

    pub fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.runtime.block_on(async {
            let mut request = self.client.create_bucket().bucket(bucket);
            if let Some(constraint) = self.location_constraint() {
                self.logger.debug(&format!("Using location constraint {}", constraint.as_str()));
                request = request.create_bucket_configuration(
                    CreateBucketConfiguration::builder()
                        .location_constraint(constraint)
                        .build(),
                );
            }

            let response = request
                .send()
                .await
                .map_err(|e| self.sdk_error("create_bucket", e))?;

            self.logger.debug(&format!(
                "create_bucket response location: {}",
                response.location().unwrap_or("<none>")
            ));
            Ok::<(), StoreError>(())
        })
    }

    pub fn list_buckets(&self) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            let response = self
                .client
                .list_buckets()
                .send()
                .await
                .map_err(|e| self.sdk_error("list_buckets", e))?;

            let names: Vec<String> = response
                .buckets()
                .iter()
                .filter_map(|bucket| bucket.name().map(str::to_string))
                .collect();

            self.logger.debug(&format!("Found {} buckets", names.len()));
            Ok::<Vec<String>, StoreError>(names)
        })
    }

    pub fn delete_bucket(&self, bucket: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .delete_bucket()
                .bucket(bucket)
                .send()
                .await
                .map_err(|e| self.sdk_error("delete_bucket", e))?;
            Ok::<(), StoreError>(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::StoreConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn backend_in(region: &str) -> S3Backend {
        let mut access = NamedTempFile::new().unwrap();
        let mut secret = NamedTempFile::new().unwrap();
        writeln!(access, "AKIAEXAMPLE").unwrap();
        writeln!(secret, "secret").unwrap();
        let config = StoreConfig {
            region: Some(region.to_string()),
            access_key_file: Some(access.path().to_path_buf()),
            secret_key_file: Some(secret.path().to_path_buf()),
            ..Default::default()
        };
        S3Backend::new(&config).unwrap()
    }

    #[test]
    fn test_no_constraint_in_default_region() {
        assert_eq!(location_constraint_for(Some("us-east-1")), None);
        assert_eq!(location_constraint_for(None), None);
        assert_eq!(backend_in("us-east-1").location_constraint(), None);
    }

    #[test]
    fn test_constraint_outside_default_region() {
        assert_eq!(
            location_constraint_for(Some("eu-west-1")),
            Some(BucketLocationConstraint::EuWest1)
        );

        let constraint = backend_in("eu-west-1").location_constraint().unwrap();
        assert_eq!(constraint.as_str(), "eu-west-1");
    }
}
