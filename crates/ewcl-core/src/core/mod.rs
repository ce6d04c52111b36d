//! # Core Module
//!
//! Fundamental building blocks shared by every analysis step.
//!
//! - **Data Models** ([`models`]) - Residue signals, threshold policies, clusters,
//!   comparison records and the aggregated analysis report
//! - **File I/O** ([`io`]) - Reading signals and exporting reports as CSV or JSON
//!
//! Nothing in this module performs analysis; it only defines the values the
//! [`engine`](crate::engine) consumes and produces.

pub mod io;
pub mod models;
