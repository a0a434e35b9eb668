//! Fabricates small tabular fixtures of bounded random integers with
//! injected noise: out-of-range "ambiguous" values and missing cells.
//!
//! The pipeline is linear: generate a bounded integer sequence, corrupt a
//! random subset of its positions, collect the columns into a dataset and
//! hand it to the CSV sink. Every sampling operation takes the random
//! source as an explicit argument so callers can seed it.

pub mod data;
