//! flaskgen scaffolds Flask projects.
//! It turns a small configuration (name, application type, directory structure
//! and optional features) into a ready-to-run project skeleton.

/// Command-line interface module for the flaskgen application
pub mod cli;

/// Project configuration model and answer parsing
pub mod config;

/// Output file names and fixed defaults
pub mod constants;

/// Requirement list, README and starter source assemblers
pub mod content;

/// Error types and handling for the flaskgen application
pub mod error;

pub mod logger;

/// Project builder: plans and writes the generated files
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Conditional template compilation and rendering
/// Falls back to the raw template whenever rendering fails
pub mod renderer;

/// Fixed catalog of starter sources and literal files
pub mod templates;
