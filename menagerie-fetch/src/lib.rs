//! # menagerie-fetch
//!
//! Fetches animal records from the lookup API and maps HTTP and transport
//! failures onto [`FetchError`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use menagerie_core::{config, QueryTerm};
//! use menagerie_fetch::Fetcher;
//!
//! fn lookup() -> Result<(), Box<dyn std::error::Error>> {
//!     let key = config::resolve_api_key()?;
//!     let fetcher = Fetcher::new(config::ApiConfig::new(key));
//!     let records = fetcher.fetch(&QueryTerm::from("Fox"))?;
//!     println!("{} records", records.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod decode;
pub mod error;

pub use client::{fetch, Fetcher, API_KEY_HEADER};
pub use decode::decode_records;
pub use error::{ErrorKind, FetchError};
