//! Shared helpers for producing sortable arrays.
//!
//! Random generation for fresh runs and parsing of user-supplied values.

pub mod random;
pub mod values;
