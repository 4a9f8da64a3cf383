mod bucket;
pub mod client;
pub mod consistency;
pub mod error;
pub mod memory;
pub mod models;
mod object;
pub mod prefix;
pub mod s3;
mod transfer;

// Re-export types for convenient access from other modules
pub use client::ObjectStoreClient;
pub use consistency::ConsistencyWait;
pub use error::{Result, StoreError};
pub use memory::InMemoryBackend;
pub use models::StoreConfig;
pub use prefix::normalize_prefix;
pub use s3::S3Backend;
