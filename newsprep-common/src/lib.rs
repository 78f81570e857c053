//! # newsprep Common Library
//!
//! Shared code for all newsprep batch tools including:
//! - Article record (serde model of the dataset entries)
//! - Dataset file I/O (load / save the JSON article array)
//! - Configuration loading and path resolution
//! - Common error types

pub mod article;
pub mod config;
pub mod dataset;
pub mod error;

pub use article::Article;
pub use error::{Error, Result};
