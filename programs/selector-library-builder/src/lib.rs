//! Command line entry point for the selector library builder.

#![deny(clippy::nursery, clippy::pedantic, missing_docs)]

pub mod cli;
pub mod observability;
