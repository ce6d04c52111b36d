//! Data models for residue signal analysis.
//!
//! All types here are plain values: they are built once, never mutated by the
//! analysis components, and are safe to share across threads.

pub mod cluster;
pub mod comparison;
pub mod policy;
pub mod report;
pub mod signal;
pub mod statistics;
