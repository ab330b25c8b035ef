//! # pads
//!
//! Query the NASA ADS (SciX) database from the command line.
//!
//! Provides:
//! - **Library**: constraint set, ADS query building, an async client for the
//!   search and BibTeX export endpoints, and line-oriented output formatting
//! - **CLI**: `pads` binary, e.g. `pads -a "doe, j" -b apj -y 2000-2001 --print-row`
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn example() -> pads::error::Result<()> {
//! use pads::{AdsClient, Constraints};
//!
//! // Token from --token, ADS_API_TOKEN, ADS_DEV_KEY or ~/.ads/dev_key
//! let client = AdsClient::from_env(None)?;
//!
//! let constraints = Constraints {
//!     author: Some("doe, j".to_string()),
//!     year: Some("2000-2001".parse()?),
//!     ..Constraints::default()
//! };
//! let results = client.search(&constraints).await?;
//! for paper in &results.papers {
//!     println!("{} {}", paper.bibcode, paper.title);
//! }
//!
//! let bibtex = client.export_bibtex(&["2000ApJ...530..660D"]).await?;
//! println!("{}", bibtex);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod output;
pub mod parse;
pub mod query;
pub mod rate_limit;
pub mod sandbox;
pub mod search;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export key types at the crate root.
pub use backend::Backend;
pub use client::AdsClient;
pub use error::PadsError;
pub use query::{Constraints, QueryBuilder, YearRange};
pub use sandbox::Sandbox;
pub use types::*;
