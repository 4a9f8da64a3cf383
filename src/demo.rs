use crate::interfaces::StorageBackend;
use crate::store::error::{Result, StoreError};
use crate::store::{ConsistencyWait, ObjectStoreClient};
use md5::{Digest, Md5};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEMO_FILES: [&str; 3] = ["ga.json", "ga.hive", "ga.lck"];
pub const DEMO_DIRS: [&str; 5] = ["data", "tmp", "app", "lib", "etc"];
const DEMO_CONTENT: &str = " This is checking scenario for S3. thanks\n for viewing this.\n";

/// Inputs for one run of the scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoPlan {
    pub bucket: String,
    /// Where downloads land; a temporary directory when `None`
    pub download_dir: Option<PathBuf>,
    pub wait: ConsistencyWait,
}

/// What the scenario observed at each step
#[derive(Debug, Default, Clone, Serialize)]
pub struct DemoReport {
    pub bucket: String,
    pub buckets_after_create: Vec<String>,
    pub objects_after_mkdir: Vec<String>,
    pub uploaded: Vec<String>,
    pub filtered: BTreeMap<String, Vec<String>>,
    pub downloaded: Vec<PathBuf>,
    pub verified: usize,
    pub deleted_in_cleanup: usize,
    pub bucket_exists_after: bool,
}

/// Create a bucket, fill it, read everything back and tear it down again.
///
/// Stops at the first failing step; the bucket may be left behind in that case.
pub fn run_demo<B: StorageBackend>(
    client: &ObjectStoreClient<B>,
    plan: &DemoPlan,
) -> Result<DemoReport> {
    let logger = *client.logger();
    let bucket = plan.bucket.as_str();
    let mut report = DemoReport {
        bucket: bucket.to_string(),
        ..Default::default()
    };

    let sources = tempfile::tempdir()?;
    for file in DEMO_FILES {
        std::fs::write(sources.path().join(file), DEMO_CONTENT)?;
    }

    // Held until the end of the run so temporary downloads stay readable
    let scratch = tempfile::tempdir()?;
    let download_dir = plan
        .download_dir
        .clone()
        .unwrap_or_else(|| scratch.path().to_path_buf());

    logger.normal("1. creating a bucket");
    client.create_bucket(bucket)?;
    report.buckets_after_create = client.list_buckets()?;
    logger.normal(&format!("{:?}", report.buckets_after_create));

    logger.normal("2. creating directory inside a bucket");
    for dir in DEMO_DIRS {
        client.create_directory(bucket, dir)?;
    }
    report.objects_after_mkdir = client.list_objects(bucket)?;
    logger.normal(&format!("{:?}", report.objects_after_mkdir));

    logger.normal("3. Add files in bucket");
    for file in DEMO_FILES {
        for dir in DEMO_DIRS {
            let key = format!("{dir}/{file}");
            client.upload_object(bucket, &sources.path().join(file), &key)?;
            report.uploaded.push(key);
        }
    }

    for dir in DEMO_DIRS {
        logger.normal(&format!("Filter Files in dir {dir}"));
        let keys = client.filter_objects(bucket, dir)?;
        logger.normal(&format!("{keys:?}"));
        report.filtered.insert(dir.to_string(), keys);
    }

    plan.wait.wait_for_objects(client, bucket, &report.uploaded)?;

    logger.normal("4. Download files in bucket");
    for dir in DEMO_DIRS {
        for file in DEMO_FILES {
            let key = format!("{dir}/{file}");
            let target = download_dir.join(format!("{dir}-{file}"));
            client.download_object(bucket, &key, &target)?;
            verify_download(&key, &sources.path().join(file), &target)?;
            report.verified += 1;
            report.downloaded.push(target);
        }
    }

    logger.normal("5. Delete files in bucket");
    for dir in DEMO_DIRS {
        for file in DEMO_FILES {
            client.delete_object(bucket, &format!("{dir}/{file}"), false)?;
        }
        client.delete_object(bucket, dir, true)?;
    }
    report.deleted_in_cleanup = client.delete_all_objects(bucket)?;

    logger.normal("6. Delete bucket");
    client.delete_bucket(bucket)?;
    report.bucket_exists_after = client.bucket_exists(bucket)?;

    Ok(report)
}

fn md5_hex(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(hex::encode(Md5::digest(&bytes)))
}

fn verify_download(key: &str, source: &Path, downloaded: &Path) -> Result<()> {
    let expected = md5_hex(source)?;
    let actual = md5_hex(downloaded)?;
    if expected != actual {
        return Err(StoreError::DownloadMismatch {
            key: key.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}
