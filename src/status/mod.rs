//! Status endpoint access.
//!
//! Fetches [`StatusSnapshot`]s from the training process. Failures never
//! propagate out of [`StatusSource::get_status`]: they are logged and the
//! tick is skipped.

mod client;
mod config;
mod error;
mod types;

pub use client::*;
pub use config::*;
pub use error::*;
pub use types::*;
