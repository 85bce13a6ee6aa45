//! Core types, error handling, and statistical primitives for revlens.
//!
//! This crate provides the shared foundation used by all other revlens crates:
//! - [`RevlensError`] — unified error type using `thiserror`
//! - Record types: [`RevisionEvent`], [`CompressedEdit`], [`ContributorStats`],
//!   [`PeriodCount`]
//! - [`quantile`] — the single quantile definition used across the toolkit

mod error;
mod quantile;
mod types;

pub use error::RevlensError;
pub use quantile::quantile;
pub use types::{CompressedEdit, ContributorStats, PeriodCount, RevisionEvent};

/// A convenience `Result` type for revlens operations.
pub type Result<T> = std::result::Result<T, RevlensError>;
