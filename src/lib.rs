//! dlsched - a small web service that records scheduled download jobs
//!
//! Jobs are submitted as JSON over HTTP, validated, checked for name
//! collisions and stored in SQLite. Nothing here executes them.

#![allow(missing_docs)]

pub mod api;
pub mod app;
pub mod app_info;
pub mod boot;
pub mod cli;
pub mod commands;
pub mod config;
pub mod database;
pub mod environment;
pub mod jobs;
pub mod router;
pub mod setup_tracing;
pub mod templates;

#[cfg(any(test, feature = "test-utils"))]
pub mod tests;
