/// Command-line parsing and run orchestration
pub mod cli;
/// Layout constants and the bundled edge table
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Combination artifact and console output
pub mod report;
/// Sprite map document reading and writing
pub mod tilemap;
