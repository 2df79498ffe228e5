//! Configuration schema definitions.
//!
//! This module defines the route manifest and engine settings.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::route::descriptor::RouteDescriptor;
use crate::route::module::ModuleDescriptor;
use crate::routing::registry::DuplicatePolicy;

/// Root configuration for the route registry.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Registry behavior (duplicate module handling).
    pub registry: RegistryConfig,

    /// Access guard locations and guard-wide roles.
    pub guard: GuardConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Feature modules, attached in file order.
    pub modules: Vec<ModuleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// `lenient` (last attach wins) or `strict` (duplicate is an error).
    pub duplicate_policy: DuplicatePolicy,
}

/// Access guard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Where unauthenticated users are sent.
    pub login_path: String,

    /// Where authenticated users lacking a required role are sent.
    pub unauthorized_path: String,

    /// Roles required for every protected route (any one suffices).
    pub required_roles: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
            required_roles: Vec::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A feature module declared in the manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModuleConfig {
    /// Unique module name.
    pub name: String,

    /// Top-level routes, in declaration order.
    #[serde(default)]
    pub routes: Vec<RouteDescriptor>,
}

impl From<ModuleConfig> for ModuleDescriptor {
    fn from(config: ModuleConfig) -> Self {
        ModuleDescriptor::with_routes(config.name, config.routes)
    }
}
