//! Common utilities for tagtree.
//!
//! This crate provides shared infrastructure used by the parser front ends:
//! - **Warning System** - colored terminal output for parse issues

pub mod warning;
