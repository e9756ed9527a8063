//! igprofile-rs: best-effort Instagram profile lookups.
//!
//! Wraps the Apify `instagram-scraper` actor task's `run-sync` endpoint and
//! normalizes its several response shapes into a single [`Profile`] record.
//! Lookups never fail outward: any upstream error degrades to a default
//! "missing" profile so callers always receive a usable value.
//!
//! ```no_run
//! use igprofile_rs::IgClient;
//!
//! # async fn run() -> Result<(), igprofile_rs::IgError> {
//! let client = IgClient::builder().token("apify_api_...").build()?;
//! let profile = igprofile_rs::profile::fetch(&client, "@instagram").await;
//! println!("{} exists: {}", profile.username, profile.exists);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod profile;

pub use crate::core::{IgClient, IgClientBuilder, IgError};
pub use crate::profile::{Profile, ProfileBuilder};
