//! # Engine Module
//!
//! The analysis components that turn a residue signal into derived structure.
//!
//! ## Architecture
//!
//! - **Statistics** ([`statistics`]) - Count, mean and range of a signal, plus the
//!   per-state residue distribution
//! - **Classification** ([`classifier`]) - Maps a value to `Ordered`, `Transition` or
//!   `Disordered` under an explicit [`ThresholdPolicy`](crate::core::models::policy::ThresholdPolicy)
//! - **Region Detection** ([`regions`]) - Groups contiguous residues sharing a run label
//!   into clusters
//! - **Comparison** ([`comparison`]) - Aligns two signals by residue number and reports
//!   significant differences
//! - **Summaries** ([`summary`]) - Deterministic narrative text built from statistics and
//!   clusters
//! - **Configuration** ([`config`]) - Validated parameters shared by all components
//! - **Progress Monitoring** ([`progress`]) - Optional callbacks for long batch runs
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! Every component is a pure function of its arguments. None of them caches state
//! between calls, so concurrent analyses never need to coordinate.

pub mod classifier;
pub mod comparison;
pub mod config;
pub mod error;
pub mod progress;
pub mod regions;
pub mod statistics;
pub mod summary;
