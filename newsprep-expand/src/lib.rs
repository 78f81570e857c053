//! # newsprep-expand
//!
//! Expands article abstracts into a short `full_text` paragraph by calling
//! a chat-completion API once per article, paced for the provider's rate
//! limits. Failures after bounded retries substitute a sentinel string so
//! the batch always completes.

pub mod client;
pub mod config;

pub use client::{ExpandError, ExpansionClient, EXPANSION_FAILED};
