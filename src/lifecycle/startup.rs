//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the registry with the configured duplicate policy
//! - Attach manifest modules, then code-defined modules, in a fixed order
//! - Compile the route tree once every module is attached
//! - Freeze the registry behind `Arc`
//!
//! # Design Decisions
//! - Fail fast: a strict-mode duplicate aborts start-up
//! - Attach is sequential, never concurrent
//! - Queries only run after the last attach

use std::sync::Arc;

use tracing::info;

use crate::compiler::{compile, CompiledRoutes};
use crate::config::loader::ConfigError;
use crate::config::schema::RouterConfig;
use crate::route::module::ModuleDescriptor;
use crate::routing::registry::ModuleRegistry;
use crate::security::access_guard::AccessGuard;

/// Everything the host needs after start-up.
#[derive(Debug)]
pub struct Bootstrapped {
    pub registry: Arc<ModuleRegistry>,
    pub routes: CompiledRoutes,
}

impl Bootstrapped {
    pub fn guard(&self) -> &AccessGuard {
        self.routes.protected.guard()
    }
}

/// Attach the manifest's modules followed by `modules`, then compile.
pub fn bootstrap<I>(config: &RouterConfig, modules: I) -> Result<Bootstrapped, ConfigError>
where
    I: IntoIterator<Item = ModuleDescriptor>,
{
    let mut registry = ModuleRegistry::with_policy(config.registry.duplicate_policy);

    let declared = config.modules.iter().cloned().map(ModuleDescriptor::from);
    for module in declared.chain(modules) {
        registry.attach(module)?;
    }

    let routes = compile(&registry, AccessGuard::new(&config.guard));

    info!(
        modules = registry.len(),
        policy = ?registry.policy(),
        "Module registry ready"
    );

    Ok(Bootstrapped {
        registry: Arc::new(registry),
        routes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;
    use crate::route::descriptor::{LayoutBehavior, RouteDescriptor};
    use crate::routing::registry::{DuplicatePolicy, RegistryError};
    use std::sync::atomic::{AtomicBool, Ordering};

    const MANIFEST: &str = r#"
        [[modules]]
        name = "home"
        routes = [{ path = "/", renderable = { immediate = "Home" } }]

        [[modules]]
        name = "chat"
        routes = [{ path = "/apps/chat/*", layout_kind = "protected", layout_behavior = "full-height" }]
    "#;

    #[test]
    fn test_manifest_modules_attach_before_code_modules() {
        let config = parse_config(MANIFEST).unwrap();
        let attached = Arc::new(AtomicBool::new(false));
        let flag = attached.clone();

        let extra = ModuleDescriptor::new("extra")
            .route(RouteDescriptor::new("/apps/chat/settings").behavior(LayoutBehavior::Centered))
            .on_attach(move || flag.store(true, Ordering::SeqCst));

        let boot = bootstrap(&config, [extra]).unwrap();

        assert!(attached.load(Ordering::SeqCst));
        assert_eq!(
            boot.registry.module_names().collect::<Vec<_>>(),
            vec!["home", "chat", "extra"]
        );
        // chat's wildcard is reached first.
        assert_eq!(
            boot.registry.resolve_behavior("/apps/chat/settings"),
            LayoutBehavior::FullHeight
        );
        assert_eq!(boot.routes.protected.nodes.len(), 1);
        assert_eq!(boot.guard().login_path(), "/login");
    }

    #[test]
    fn test_strict_duplicate_aborts_startup() {
        let mut config = parse_config(MANIFEST).unwrap();
        config.registry.duplicate_policy = DuplicatePolicy::Strict;

        let err = bootstrap(&config, [ModuleDescriptor::new("home")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Registry(RegistryError::DuplicateModule(ref name)) if name == "home"
        ));
    }
}
