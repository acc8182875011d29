//! Shared test fixtures for FormPredict crates.
//!
//! This crate provides artifacts, answer sets and wired registries for the
//! built-in variants. It depends only on `formpredict-core`.
//!
//! - [`answers`] - valid answer sets for each built-in schema
//! - [`artifacts`] - small hand-built models matching the built-in schemas
//! - [`registry`] - a registry with every built-in variant wired up
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! formpredict-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use formpredict_test::{fixture_registry, obesity_answers};
//! ```

pub mod answers;
pub mod artifacts;
pub mod registry;

pub use answers::{insurance_answers, obesity_answers};
pub use artifacts::{fixture_artifact_dir, insurance_linear, obesity_tree, write_artifact};
pub use registry::fixture_registry;
