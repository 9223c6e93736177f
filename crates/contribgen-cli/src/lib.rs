//! contribgen CLI library.
//!
//! This crate provides the functionality behind the `contribgen` binary:
//! input loading and the generate/validate command implementations.

pub mod commands;
pub mod input;
