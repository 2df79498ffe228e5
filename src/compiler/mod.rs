//! Route tree compiler.
//!
//! # Data Flow
//! ```text
//! registry.all_routes()
//!     → partition.rs (bucket top-level routes by layout kind)
//!     → render.rs (build nested RenderNode trees per bucket)
//!     → protected bucket wrapped with the AccessGuard
//!     → CompiledRoutes { none, auth, protected, not_found }
//! ```
//!
//! # Design Decisions
//! - Compilation never fails; misconfigured routes compile to placeholders
//! - Partitions are independent of pathname resolution

pub mod partition;
pub mod render;

use serde::Serialize;
use tracing::{info, warn};

use crate::routing::registry::ModuleRegistry;
use crate::security::access_guard::{AccessGuard, GuardDecision};
use crate::security::oracle::AuthOracle;

pub use partition::{partition, LayoutPartition};
pub use render::{build, Element, Fallback, Outlet, RenderNode};

/// Protected routes together with the guard that wraps them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtectedPartition {
    #[serde(skip)]
    guard: AccessGuard,
    pub nodes: Vec<RenderNode>,
}

impl ProtectedPartition {
    pub fn new(guard: AccessGuard, nodes: Vec<RenderNode>) -> Self {
        Self { guard, nodes }
    }

    pub fn guard(&self) -> &AccessGuard {
        &self.guard
    }

    /// Top-level protected node whose subtree contains a match for `pathname`.
    pub fn owner_of(&self, pathname: &str) -> Option<&RenderNode> {
        self.nodes.iter().find(|node| node.find(pathname).is_some())
    }

    /// Run the guard for `pathname`.
    ///
    /// The guard-wide roles and the owning route's roles are separate
    /// requirements: the user must hold one role from each non-empty set.
    /// Returns `None` when no protected route covers `pathname`.
    pub fn authorize(&self, oracle: &dyn AuthOracle, pathname: &str) -> Option<GuardDecision> {
        let owner = self.owner_of(pathname)?;
        let decision = self.guard.evaluate(oracle, pathname, None);
        if !decision.is_allowed() {
            return Some(decision);
        }
        let route_guard = self.guard.with_roles(owner.required_roles.iter().cloned());
        Some(route_guard.evaluate(oracle, pathname, Some(vec![owner.clone()])))
    }
}

/// Output of [`compile`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledRoutes {
    pub none: Vec<RenderNode>,
    pub auth: Vec<RenderNode>,
    pub protected: ProtectedPartition,
    /// Outermost catch-all.
    pub not_found: RenderNode,
}

impl CompiledRoutes {
    /// Total number of render nodes, catch-all excluded.
    pub fn node_count(&self) -> usize {
        self.none
            .iter()
            .chain(&self.auth)
            .chain(&self.protected.nodes)
            .map(RenderNode::size)
            .sum()
    }
}

/// Partition the registry's routes and build every render tree.
pub fn compile(registry: &ModuleRegistry, guard: AccessGuard) -> CompiledRoutes {
    let parts = partition(registry);

    let roots: Vec<_> = registry.all_routes().iter().map(|r| r.id()).collect();
    for route in registry.arena().preorder(&roots) {
        if route.renderable().is_none() {
            warn!(path = route.path(), "Route has no renderable, rendering placeholder");
        }
    }

    let compiled = CompiledRoutes {
        none: parts.none.iter().copied().map(build).collect(),
        auth: parts.auth.iter().copied().map(build).collect(),
        protected: ProtectedPartition::new(guard, parts.protected.iter().copied().map(build).collect()),
        not_found: RenderNode::not_found(),
    };

    info!(
        none = compiled.none.len(),
        auth = compiled.auth.len(),
        protected = compiled.protected.nodes.len(),
        nodes = compiled.node_count(),
        "Route tree compiled"
    );

    compiled
}
