//! keyfollow CLI library
//!
//! Exposes the configuration, engine, and error modules so integration
//! tests can drive a full correlation run against mock servers. The binary
//! entry point is in main.rs.

pub mod config;
pub mod engine;
pub mod error;
pub mod output;
