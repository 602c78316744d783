//! Snowball-style stemming engine
//!
//! This crate provides the stemming virtual machine (a character buffer with
//! cursor/limit bookkeeping, character-class and exact-match primitives,
//! slice mutation, and the among multi-way matcher) together with the rule
//! programs for the bundled languages. It performs no I/O and keeps no
//! global state; callers own a [`StemContext`] and run a language program
//! against it.

#![warn(missing_docs)]

pub mod among;
pub mod context;
pub mod language;

pub use among::Among;
pub use context::{Grouping, StemContext};
