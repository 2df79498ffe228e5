//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Start-up:
//!     ModuleDescriptor[] (caller-fixed order)
//!     → registry.rs attach (run on_attach, insert into arena)
//!     → pattern.rs (compile each route path once)
//!     → Freeze: share registry behind Arc
//!
//! Navigation (per pathname change):
//!     pathname
//!     → registry.rs (pre-order walk in module order)
//!     → matcher.rs (evaluate pattern)
//!     → Return: first match's behavior, or the default
//! ```
//!
//! # Design Decisions
//! - Routes compiled at attach, immutable afterwards
//! - No regex in hot path
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by module attach order, then declaration)

pub mod matcher;
pub mod pattern;
pub mod registry;

pub use matcher::{matches, Matcher};
pub use pattern::PathPattern;
pub use registry::{DuplicatePolicy, ModuleRegistry, ModuleView, RegistryError, RouteMatch};
