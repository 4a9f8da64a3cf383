use crate::interfaces::StorageBackend;
use crate::store::client::ObjectStoreClient;
use crate::store::error::{Result, StoreError};
use std::collections::HashSet;
use std::thread;
use std::time::{Duration, Instant};

/// Fixed wait used when nothing else is configured.
pub const DEFAULT_FIXED_WAIT: Duration = Duration::from_secs(60);

/// How long to wait for freshly written objects to become visible in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyWait {
    None,
    Fixed(Duration),
    /// Re-list the bucket every `interval` until every expected key shows up.
    Poll {
        timeout: Duration,
        interval: Duration,
    },
}

impl Default for ConsistencyWait {
    fn default() -> Self {
        ConsistencyWait::Fixed(DEFAULT_FIXED_WAIT)
    }
}

impl ConsistencyWait {
    pub fn wait_for_objects<B: StorageBackend>(
        &self,
        client: &ObjectStoreClient<B>,
        bucket: &str,
        keys: &[String],
    ) -> Result<()> {
        match *self {
            ConsistencyWait::None => Ok(()),
            ConsistencyWait::Fixed(duration) => {
                client.logger().info(&format!(
                    "Waiting {}s for bucket '{bucket}' to settle",
                    duration.as_secs()
                ));
                thread::sleep(duration);
                Ok(())
            }
            ConsistencyWait::Poll { timeout, interval } => {
                poll_until_visible(client, bucket, keys, timeout, interval)
            }
        }
    }
}

fn poll_until_visible<B: StorageBackend>(
    client: &ObjectStoreClient<B>,
    bucket: &str,
    keys: &[String],
    timeout: Duration,
    interval: Duration,
) -> Result<()> {
    let started = Instant::now();
    let mut attempt = 0;

    loop {
        attempt += 1;
        let listed: HashSet<String> = client.list_objects(bucket)?.into_iter().collect();
        let missing = keys.iter().filter(|key| !listed.contains(*key)).count();
        if missing == 0 {
            client.logger().debug(&format!(
                "All {} object(s) visible after {attempt} listing(s)",
                keys.len()
            ));
            return Ok(());
        }

        let elapsed = started.elapsed();
        if elapsed >= timeout {
            return Err(StoreError::ConsistencyTimeout {
                bucket: bucket.to_string(),
                missing,
                waited_secs: elapsed.as_secs(),
            });
        }

        client.logger().debug(&format!(
            "{missing} object(s) not yet visible in '{bucket}', retrying"
        ));
        thread::sleep(interval.min(timeout - elapsed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::MockStorageBackend;
    use mockall::Sequence;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_no_wait_makes_no_calls() {
        // Any backend call would panic on an unconfigured mock
        let client = ObjectStoreClient::new(MockStorageBackend::new(), 0);
        ConsistencyWait::None
            .wait_for_objects(&client, "b1", &keys(&["a"]))
            .unwrap();
    }

    #[test]
    fn test_poll_returns_once_all_keys_are_listed() {
        let mut backend = MockStorageBackend::new();
        let mut seq = Sequence::new();
        backend
            .expect_list_objects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(vec!["a".to_string()]));
        backend
            .expect_list_objects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(vec!["a".to_string(), "b".to_string()]));

        let client = ObjectStoreClient::new(backend, 0);
        let policy = ConsistencyWait::Poll {
            timeout: Duration::from_secs(5),
            interval: Duration::from_millis(1),
        };
        policy
            .wait_for_objects(&client, "b1", &keys(&["a", "b"]))
            .unwrap();
    }

    #[test]
    fn test_poll_times_out() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_list_objects()
            .returning(|_, _| Ok(Vec::new()));

        let client = ObjectStoreClient::new(backend, 0);
        let policy = ConsistencyWait::Poll {
            timeout: Duration::ZERO,
            interval: Duration::ZERO,
        };
        let err = policy
            .wait_for_objects(&client, "b1", &keys(&["a", "b"]))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::ConsistencyTimeout { missing: 2, .. }
        ));
    }

    #[test]
    fn test_default_matches_fixed_minute() {
        assert_eq!(
            ConsistencyWait::default(),
            ConsistencyWait::Fixed(Duration::from_secs(60))
        );
    }
}
