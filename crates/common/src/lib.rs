//! Shared types used across the skillhub crates.

pub mod error;
pub mod tool;

pub use {error::FromMessage, tool::AgentTool};
