//! Module registry: route aggregation and pathname resolution.
//!
//! # Responsibilities
//! - Store attached modules and their route trees
//! - Enumerate top-level routes in module order
//! - Resolve a pathname to its layout behavior (first match wins)
//!
//! # Design Decisions
//! - Mutation needs `&mut self`; share behind `Arc` once start-up is done
//! - O(1) module lookup via HashMap, O(n) pre-order scan for resolution
//! - Module order is first-attach order; an overwrite keeps its slot
//! - Unmatched paths resolve to the default behavior, never an error

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::route::arena::{RouteArena, RouteId, RouteRef};
use crate::route::descriptor::LayoutBehavior;
use crate::route::module::ModuleDescriptor;

/// What to do when a module name is attached twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Later attach replaces the earlier module.
    #[default]
    Lenient,
    /// Reject the second attach.
    Strict,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("module `{0}` is already attached")]
    DuplicateModule(String),
}

#[derive(Debug, Clone)]
struct ModuleEntry {
    name: String,
    roots: Vec<RouteId>,
}

/// Read-only view of an attached module.
#[derive(Debug, Clone, Copy)]
pub struct ModuleView<'a> {
    arena: &'a RouteArena,
    entry: &'a ModuleEntry,
}

impl<'a> ModuleView<'a> {
    pub fn name(&self) -> &'a str {
        &self.entry.name
    }

    /// Top-level routes of this module, in declaration order.
    pub fn routes(&self) -> Vec<RouteRef<'a>> {
        self.entry
            .roots
            .iter()
            .filter_map(|id| self.arena.get(*id))
            .collect()
    }
}

/// Result of a successful pathname resolution.
#[derive(Debug, Clone, Copy)]
pub struct RouteMatch<'a> {
    /// Module that contributed the matched route.
    pub module: &'a str,
    /// First route in traversal order whose pattern matched.
    pub route: RouteRef<'a>,
    /// Top-level ancestor of `route` (itself when top-level).
    pub root: RouteRef<'a>,
}

impl RouteMatch<'_> {
    pub fn behavior(&self) -> LayoutBehavior {
        self.route.behavior()
    }
}

/// Aggregates route trees from independently developed modules.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    policy: DuplicatePolicy,
    arena: RouteArena,
    modules: Vec<ModuleEntry>,
    by_name: HashMap<String, usize>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Attach a module, running its `on_attach` hook before its routes are
    /// inserted.
    ///
    /// Under [`DuplicatePolicy::Strict`] a second module with the same name
    /// is rejected and its hook is not run.
    pub fn attach(&mut self, module: ModuleDescriptor) -> Result<(), RegistryError> {
        let existing = self.by_name.get(&module.name).copied();
        if existing.is_some() && self.policy == DuplicatePolicy::Strict {
            return Err(RegistryError::DuplicateModule(module.name));
        }

        let (name, routes, hook) = module.into_parts();

        if let Some(hook) = hook {
            debug!(module = %name, "Running attach hook");
            hook();
        }

        let roots: Vec<RouteId> = routes.into_iter().map(|r| self.arena.insert(r)).collect();
        let route_count = roots.len();

        match existing {
            Some(slot) => {
                warn!(module = %name, "Module re-attached, replacing previous routes");
                // Old nodes stay in the arena but are no longer reachable.
                self.modules[slot].roots = roots;
            }
            None => {
                self.by_name.insert(name.clone(), self.modules.len());
                self.modules.push(ModuleEntry {
                    name: name.clone(),
                    roots,
                });
            }
        }

        info!(module = %name, routes = route_count, "Module attached");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<ModuleView<'_>> {
        self.by_name.get(name).map(|&slot| ModuleView {
            arena: &self.arena,
            entry: &self.modules[slot],
        })
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }

    pub fn modules(&self) -> impl Iterator<Item = ModuleView<'_>> {
        self.modules.iter().map(|entry| ModuleView {
            arena: &self.arena,
            entry,
        })
    }

    pub fn arena(&self) -> &RouteArena {
        &self.arena
    }

    /// Top-level routes of every module, in module order.
    pub fn all_routes(&self) -> Vec<RouteRef<'_>> {
        self.root_ids()
            .filter_map(|id| self.arena.get(id))
            .collect()
    }

    fn root_ids(&self) -> impl Iterator<Item = RouteId> + '_ {
        self.modules.iter().flat_map(|m| m.roots.iter().copied())
    }

    /// Find the first route, in pre-order over [`all_routes`](Self::all_routes),
    /// whose pattern matches `pathname`.
    pub fn resolve(&self, pathname: &str) -> Option<RouteMatch<'_>> {
        for entry in &self.modules {
            if let Some(route) = self
                .arena
                .preorder(&entry.roots)
                .find(|route| route.matches(pathname))
            {
                trace!(pathname, module = %entry.name, pattern = route.path(), "Route matched");
                return Some(RouteMatch {
                    module: &entry.name,
                    route,
                    root: route.root(),
                });
            }
        }

        trace!(pathname, "No route matched");
        None
    }

    /// Layout behavior for `pathname`, or the default when nothing matches.
    pub fn resolve_behavior(&self, pathname: &str) -> LayoutBehavior {
        self.resolve(pathname)
            .map(|m| m.behavior())
            .unwrap_or_default()
    }
}
