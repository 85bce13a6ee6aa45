//! Heavy-tailed distribution fitting for contribution counts.
//!
//! Contribution activity in edit-history datasets is famously heavy-tailed:
//! a handful of contributors produce most of the edits. This crate fits a
//! continuous power law to positive samples, reports a Kolmogorov-Smirnov
//! goodness-of-fit distance, and compares the fit against an exponential
//! alternative with a likelihood-ratio p-value.
//!
//! The statistical engine sits behind the narrow [`FitEngine`] trait so it
//! can be swapped without touching callers; [`PowerLawEngine`] is the
//! built-in implementation. [`FitReport`] serializes to JSON for external
//! plotting surfaces.

pub mod engine;
pub mod powerlaw;
pub mod samples;

pub use engine::{FitEngine, FitOptions, FitReport};
pub use powerlaw::PowerLawEngine;
pub use samples::events_per_contributor;
