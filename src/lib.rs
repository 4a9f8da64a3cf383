pub mod args;
pub mod demo;
pub mod interfaces;
pub mod start;
pub mod store;
pub mod utils {
    pub mod log_utils;
    pub mod path_utils;
}

pub use args::Args;
pub use start::{Outcome, run_app};
pub use store::{ObjectStoreClient, StoreError};
