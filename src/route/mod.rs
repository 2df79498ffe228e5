//! Route data model.
//!
//! # Data Flow
//! ```text
//! Feature module
//!     → ModuleDescriptor { name, routes: RouteDescriptor tree, on_attach }
//!     → registry attach
//!     → arena.rs (flatten into RouteId-addressed nodes)
//!     → RouteRef views for traversal and compilation
//! ```

pub mod arena;
pub mod descriptor;
pub mod module;

pub use arena::{RouteArena, RouteId, RouteRef};
pub use descriptor::{ComponentRef, LayoutBehavior, LayoutKind, Renderable, RouteDescriptor};
pub use module::ModuleDescriptor;
