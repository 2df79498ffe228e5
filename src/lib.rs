//! Module registry and route-resolution engine.
//!
//! Feature modules contribute route trees independently; the registry
//! aggregates them, resolves a pathname to its layout behavior, and the
//! compiler turns the aggregate into nested render trees partitioned by
//! layout kind, with the protected partition behind an access guard.
//!
//! # Architecture Overview
//!
//! ```text
//!   ModuleDescriptor[]          ┌──────────────┐      ┌──────────────┐
//!   ───────────────────────────▶│   routing    │─────▶│   compiler   │──▶ CompiledRoutes
//!   (config manifest + code)    │   registry   │      │ partition +  │    none / auth /
//!                               └──────┬───────┘      │ render trees │    protected + guard
//!                                      │              └──────────────┘
//!   pathname ─────────────────────────▶│ resolve_behavior
//!                                      ▼
//!                               LayoutBehavior
//! ```

// Core subsystems
pub mod compiler;
pub mod config;
pub mod route;
pub mod routing;
pub mod security;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use compiler::{compile, CompiledRoutes, RenderNode};
pub use config::RouterConfig;
pub use route::{LayoutBehavior, LayoutKind, ModuleDescriptor, Renderable, RouteDescriptor};
pub use routing::{matches, ModuleRegistry};
pub use security::{AccessGuard, AuthOracle, GuardDecision};
