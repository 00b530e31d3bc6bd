//! Core domain models for the feed tools
//!
//! This module contains the fundamental types used throughout the application:
//! - Package descriptors returned by a feed query
//! - The query filter applied when listing packages
//! - The deletion batch read from a package list file
//! - Run configurations gathered interactively

mod deletion_batch;
mod package;
mod query_filter;
mod run_config;

pub use deletion_batch::DeletionBatch;
pub use package::PackageDescriptor;
pub use query_filter::{parse_nuget_version, QueryFilter};
pub use run_config::{DeleterConfig, ListerConfig};
