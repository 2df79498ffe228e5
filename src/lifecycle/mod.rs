//! Lifecycle management.
//!
//! # Lifecycle Phases
//! ```text
//! 1. Startup
//!    → load config
//!    → construct empty registry
//!    → attach modules in fixed order (run on_attach hooks)
//!    → compile route tree
//!
//! 2. Running
//!    → registry read-only, shared via Arc
//!    → resolve_behavior on every pathname change
//! ```

pub mod startup;

pub use startup::{bootstrap, Bootstrapped};
