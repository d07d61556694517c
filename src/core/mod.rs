//! Core components of the `newspulse` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`PulseClient`] and its builder.
//! - The primary [`PulseError`] type.
//! - Internal networking helpers shared by the fetch paths.

/// The main client (`PulseClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`PulseError`) for the crate.
pub mod error;

pub(crate) mod net;

#[cfg(feature = "dataframe")]
/// Optional polars bridge for record collections and summary tables.
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::PulseClient`
pub use client::{Backoff, PulseClient, PulseClientBuilder, RetryConfig};
pub use error::PulseError;
