//! Core build pipeline
//!
//! This module contains the target-resolution and incremental-build
//! logic.
//!
//! # Submodules
//!
//! - [`settings`] - Build settings (mortar.toml) parsing
//! - [`target`] - Target resolution and selection
//! - [`discovery`] - Source file discovery and object mapping
//! - [`cache`] - Per-file cache validity
//! - [`compile`] - Compile step (one source file, one object)
//! - [`link`] - Link step (static archive or executable)
//! - [`builder`] - Build orchestration

pub mod builder;
pub mod cache;
pub mod compile;
pub mod discovery;
pub mod link;
pub mod settings;
pub mod target;
