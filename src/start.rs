use anyhow::Context;
use serde::Serialize;

use crate::args::{Args, Command};
use crate::demo::{DemoPlan, run_demo};
use crate::interfaces::StorageBackend;
use crate::store::{InMemoryBackend, ObjectStoreClient, StoreConfig};

/// How a successfully executed command should end the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The queried bucket does not exist
    NotFound,
}

/// Build the backend selected by `args` and run its command
///
/// # Errors
///
/// Returns an error if the S3 client cannot be created or the command fails.
pub fn run_app(args: &Args) -> anyhow::Result<Outcome> {
    if args.dry_run {
        let client = ObjectStoreClient::new(InMemoryBackend::new(), args.verbose);
        client
            .logger()
            .warn("--dry-run: using an empty in-memory store, nothing is sent to S3");
        return run_command(&client, args);
    }

    let config = StoreConfig::from_args(args);
    let client = ObjectStoreClient::connect(&config).context("Failed to create S3 client")?;
    run_command(&client, args)
}

/// Execute the parsed command against any backend
///
/// # Errors
///
/// Returns the backend error of the failing operation, with the command as context.
pub fn run_command<B: StorageBackend>(
    client: &ObjectStoreClient<B>,
    args: &Args,
) -> anyhow::Result<Outcome> {
    match &args.command {
        Command::CreateBucket { bucket } => {
            client
                .create_bucket(bucket)
                .with_context(|| format!("Failed to create bucket '{bucket}'"))?;
        }
        Command::ListBuckets => {
            let buckets = client.list_buckets().context("Failed to list buckets")?;
            print_listing(&buckets, args.json)?;
        }
        Command::BucketExists { bucket } => {
            let exists = client
                .bucket_exists(bucket)
                .with_context(|| format!("Failed to check bucket '{bucket}'"))?;
            if !exists {
                return Ok(Outcome::NotFound);
            }
        }
        Command::Mkdir { bucket, prefix } => {
            client
                .create_directory(bucket, prefix)
                .with_context(|| format!("Failed to create '{prefix}' in bucket '{bucket}'"))?;
        }
        Command::DeleteAll { bucket } => {
            client
                .delete_all_objects(bucket)
                .with_context(|| format!("Failed to empty bucket '{bucket}'"))?;
        }
        Command::DeleteObject { bucket, key, dir } => {
            client
                .delete_object(bucket, key, *dir)
                .with_context(|| format!("Failed to delete '{key}' from bucket '{bucket}'"))?;
        }
        Command::DeleteBucket { bucket } => {
            client
                .delete_bucket(bucket)
                .with_context(|| format!("Failed to delete bucket '{bucket}'"))?;
        }
        Command::List { bucket } => {
            let keys = client
                .list_objects(bucket)
                .with_context(|| format!("Failed to list bucket '{bucket}'"))?;
            print_listing(&keys, args.json)?;
        }
        Command::Filter { bucket, prefix } => {
            let prefix = prefix.as_deref().unwrap_or_default();
            let keys = client
                .filter_objects(bucket, prefix)
                .with_context(|| format!("Failed to filter bucket '{bucket}' by '{prefix}'"))?;
            print_listing(&keys, args.json)?;
        }
        Command::Upload {
            bucket,
            local_path,
            remote_key,
        } => {
            client
                .upload_object(bucket, local_path, remote_key)
                .with_context(|| {
                    format!(
                        "Failed to upload {} to {bucket}/{remote_key}",
                        local_path.display()
                    )
                })?;
        }
        Command::Download {
            bucket,
            remote_key,
            local_path,
        } => {
            client
                .download_object(bucket, remote_key, local_path)
                .with_context(|| {
                    format!(
                        "Failed to download {bucket}/{remote_key} to {}",
                        local_path.display()
                    )
                })?;
        }
        Command::Demo(demo) => {
            let plan = DemoPlan {
                bucket: demo.bucket.clone(),
                download_dir: demo.download_dir.clone(),
                wait: demo.consistency_wait(),
            };
            let report = run_demo(client, &plan)
                .with_context(|| format!("Demo against bucket '{}' failed", plan.bucket))?;
            if args.json {
                print_json(&report)?;
            } else {
                client.logger().normal(&format!(
                    "Demo finished: {} object(s) uploaded, {} download(s) verified",
                    report.uploaded.len(),
                    report.verified
                ));
            }
        }
    }
    Ok(Outcome::Success)
}

fn print_listing(items: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        print_json(&items)
    } else {
        for item in items {
            println!("{item}");
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
