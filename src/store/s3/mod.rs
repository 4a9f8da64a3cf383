mod bucket;
mod client;
mod objects;
mod transfer;

pub use client::{S3Backend, read_value_from_file};

use crate::interfaces::StorageBackend;
use crate::store::error::Result;
use std::path::Path;

impl StorageBackend for S3Backend {
    fn create_bucket(&self, bucket: &str) -> Result<()> {
        S3Backend::create_bucket(self, bucket)
    }

    fn list_buckets(&self) -> Result<Vec<String>> {
        S3Backend::list_buckets(self)
    }

    fn delete_bucket(&self, bucket: &str) -> Result<()> {
        S3Backend::delete_bucket(self, bucket)
    }

    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        S3Backend::put_object(self, bucket, key, body)
    }

    fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        S3Backend::delete_object(self, bucket, key)
    }

    fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<usize> {
        S3Backend::delete_objects(self, bucket, keys)
    }

    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        S3Backend::list_objects(self, bucket, prefix)
    }

    fn upload_file(&self, bucket: &str, local_path: &Path, key: &str) -> Result<()> {
        S3Backend::upload_file(self, bucket, local_path, key)
    }

    fn download_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        S3Backend::download_file(self, bucket, key, local_path)
    }
}
