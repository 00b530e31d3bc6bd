//! nuget-feed-tools - Interactive NuGet feed maintenance
//!
//! This library provides the core of two console tools:
//! - nuget-package-lister: query a NuGet v2 feed and save the package list
//!   as text and CSV
//! - nuget-package-deleter: delete the package ids named in a file from a
//!   feed with the `nuget delete` command

pub mod cli;
pub mod console;
pub mod domain;
pub mod error;
pub mod feed;
pub mod logging;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod workflow;
