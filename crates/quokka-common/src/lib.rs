//! Common utilities for the Quokka markup parser.
//!
//! This crate provides shared infrastructure used by the parsing components:
//! - **Warning System** - colored terminal output for tolerated malformed input

pub mod warning;
