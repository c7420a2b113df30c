// src/analysis/mod.rs
//! Core analysis logic: syntax tree, naming rules, scanners and spec lookup.

pub mod ast;
pub mod controllers;
pub mod detector;
pub mod engine;
pub mod naming;
pub mod spec_path;
pub mod tasks;

pub use self::engine::Engine;

use crate::config::Exclusions;

/// Per-file inputs shared by the scanners.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    /// Root-relative path, used in violations and exclusion lookups.
    pub file: &'a str,
    pub exclusions: &'a Exclusions,
}
