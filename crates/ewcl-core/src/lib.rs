//! # EWCL Core Library
//!
//! Residue-level analysis of entropy signals produced for biomolecular structures.
//! A signal maps each residue number to a scalar in `[0, 1]` describing how likely
//! that residue is to be structurally disordered; this crate turns it into summary
//! statistics, per-residue states, contiguous regions of interest, comparisons
//! between two signals and a short narrative description.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`ResidueSignal`,
//!   `ThresholdPolicy`, `Cluster`, `ComparisonRecord`) and the CSV/JSON formats used to
//!   read signals and export analysis reports.
//!
//! - **[`engine`]: The Logic Core.** The analysis components themselves: statistics
//!   aggregation, residue classification, region detection, comparison and summary
//!   generation. Every component is a pure function over borrowed inputs, so the same
//!   signal can be analyzed from many threads at once without coordination.
//!
//! - **[`workflows`]: The Public API.** Request-scoped procedures that tie `engine` and
//!   `core` together (`analyze`, `compare`) and report progress to the caller.

pub mod core;
pub mod engine;
pub mod workflows;
