pub(crate) mod account_record;
pub(crate) mod client;
pub(crate) mod error;

pub use account_record::AccountRecord;
pub use client::ApiClient;
pub use error::{ApiError, Result};
